//! Exported pipeline artifacts and threshold records

use crate::classifier::{Classifier, SparseVector};
use crate::logistic::LogisticRegression;
use crate::naive_bayes::MultinomialNb;
use crate::tfidf::{TfidfVectorizer, VectorizerSpec};
use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};
use std::path::Path;

/// On-disk pipeline: vectorizer parameters plus a fitted estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub vectorizer: VectorizerSpec,
    pub model: Estimator,
}

/// Fitted estimator head
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    MultinomialNb(MultinomialNb),
    LogisticRegression(LogisticRegression),
}

impl Estimator {
    fn validate(&self, n_features: usize) -> Result<()> {
        match self {
            Self::MultinomialNb(nb) => nb.validate(n_features),
            Self::LogisticRegression(lr) => lr.validate(n_features),
        }
    }

    fn spam_probability(&self, x: &SparseVector) -> f64 {
        match self {
            Self::MultinomialNb(nb) => nb.spam_probability(x),
            Self::LogisticRegression(lr) => lr.spam_probability(x),
        }
    }

    /// Short identifier of the estimator type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MultinomialNb(_) => "multinomial_nb",
            Self::LogisticRegression(_) => "logistic_regression",
        }
    }
}

/// TF-IDF vectorizer followed by a probabilistic estimator
#[derive(Debug, Clone)]
pub struct TfidfPipeline {
    name: String,
    vectorizer: TfidfVectorizer,
    estimator: Estimator,
}

impl TfidfPipeline {
    /// Build a pipeline from a parsed artifact, validating shapes
    pub fn from_artifact(name: impl Into<String>, artifact: PipelineArtifact) -> Result<Self> {
        let vectorizer = TfidfVectorizer::new(artifact.vectorizer)?;
        artifact.model.validate(vectorizer.n_features())?;

        Ok(Self {
            name: name.into(),
            vectorizer,
            estimator: artifact.model,
        })
    }

    /// Load a pipeline from a JSON artifact file
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let artifact: PipelineArtifact = serde_json::from_str(&contents).map_err(|e| {
            Error::artifact(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Self::from_artifact(name, artifact)
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }
}

impl Classifier for TfidfPipeline {
    fn spam_probability(&self, text: &str) -> f64 {
        let features = self.vectorizer.transform(text);
        self.estimator.spam_probability(&features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Threshold record stored next to each artifact
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdRecord {
    pub threshold: f64,
}

/// Read a threshold record, rejecting values outside `[0, 1]`
pub fn load_threshold(path: impl AsRef<Path>) -> Result<f64> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let record: ThresholdRecord = serde_json::from_str(&contents)?;

    if !(0.0..=1.0).contains(&record.threshold) {
        return Err(Error::config(format!(
            "threshold {} in {} is outside [0, 1]",
            record.threshold,
            path.display()
        )));
    }

    Ok(record.threshold)
}
