//! Model candidate configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Model selected by default when it is loaded
pub const DEFAULT_PREFERRED_MODEL: &str = "Logistic Regression";

/// One candidate model: a classifier artifact plus its threshold record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPairSpec {
    /// Display name, unique within the registry
    pub name: String,

    /// Path to the exported pipeline JSON
    pub classifier: PathBuf,

    /// Path to the `{"threshold": ...}` record
    pub threshold: PathBuf,
}

impl ModelPairSpec {
    pub fn new(
        name: impl Into<String>,
        classifier: impl Into<PathBuf>,
        threshold: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            classifier: classifier.into(),
            threshold: threshold.into(),
        }
    }
}

/// Candidates probed when no configuration lists any
pub fn default_model_pairs() -> Vec<ModelPairSpec> {
    vec![
        ModelPairSpec::new(
            "Naive Bayes",
            "model/spam_nb_tfidf.json",
            "model/threshold.json",
        ),
        ModelPairSpec::new(
            "Logistic Regression",
            "model/spam_lr_tfidf.json",
            "model/threshold_lr.json",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs_order() {
        let pairs = default_model_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "Naive Bayes");
        assert_eq!(pairs[1].name, DEFAULT_PREFERRED_MODEL);
        assert_eq!(pairs[1].threshold, PathBuf::from("model/threshold_lr.json"));
    }

    #[test]
    fn test_pair_from_json() {
        let json = r#"{"name": "NB", "classifier": "a.json", "threshold": "t.json"}"#;
        let spec: ModelPairSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, ModelPairSpec::new("NB", "a.json", "t.json"));
    }
}
