//! Registry loading from artifact files on disk

use serde_json::json;
use spamcheck_classifiers::{
    init_registry, LoadOutcome, ModelPairSpec, Predictor, RegistryBuilder, DEFAULT_PREFERRED_MODEL,
};
use spamcheck_core::{Error, Label};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn vocabulary() -> serde_json::Value {
    json!({
        "free": 0, "win": 1, "prize": 2, "claim": 3, "urgent": 4,
        "class": 5, "lunch": 6, "meeting": 7
    })
}

fn lr_artifact() -> serde_json::Value {
    json!({
        "vectorizer": {
            "vocabulary": vocabulary(),
            "idf": [1.2, 1.5, 1.8, 1.6, 2.0, 1.4, 1.9, 1.7],
            "ngram_range": [1, 1]
        },
        "model": {
            "type": "logistic_regression",
            "coef": [2.5, 2.0, 2.2, 1.8, 2.4, -2.0, -2.3, -1.9],
            "intercept": -0.8
        }
    })
}

fn nb_artifact() -> serde_json::Value {
    let spam = [0.25, 0.2, 0.2, 0.15, 0.1, 0.04, 0.03, 0.03];
    let ham = [0.05, 0.05, 0.03, 0.02, 0.05, 0.3, 0.25, 0.25];
    let spam_log: Vec<f64> = spam.iter().map(|p: &f64| p.ln()).collect();
    let ham_log: Vec<f64> = ham.iter().map(|p: &f64| p.ln()).collect();
    json!({
        "vectorizer": {
            "vocabulary": vocabulary(),
            "idf": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        },
        "model": {
            "type": "multinomial_nb",
            "class_log_prior": [0.87f64.ln(), 0.13f64.ln()],
            "feature_log_prob": [ham_log, spam_log]
        }
    })
}

fn write_json(path: &Path, value: &serde_json::Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Candidate pairs rooted in `dir`, mirroring the default layout
fn specs_in(dir: &Path) -> Vec<ModelPairSpec> {
    vec![
        ModelPairSpec::new(
            "Naive Bayes",
            dir.join("model/spam_nb_tfidf.json"),
            dir.join("model/threshold.json"),
        ),
        ModelPairSpec::new(
            "Logistic Regression",
            dir.join("model/spam_lr_tfidf.json"),
            dir.join("model/threshold_lr.json"),
        ),
    ]
}

fn write_lr(dir: &Path) {
    write_json(&dir.join("model/spam_lr_tfidf.json"), &lr_artifact());
    write_json(&dir.join("model/threshold_lr.json"), &json!({ "threshold": 0.57 }));
}

fn write_nb(dir: &Path) {
    write_json(&dir.join("model/spam_nb_tfidf.json"), &nb_artifact());
    write_json(&dir.join("model/threshold.json"), &json!({ "threshold": 0.13 }));
}

#[test]
fn test_both_models_loaded() {
    let dir = TempDir::new().unwrap();
    write_nb(dir.path());
    write_lr(dir.path());

    let registry = init_registry(&specs_in(dir.path()), Some(DEFAULT_PREFERRED_MODEL)).unwrap();

    assert_eq!(registry.names(), vec!["Naive Bayes", "Logistic Regression"]);
    assert_eq!(registry.default_model(), "Logistic Regression");
    assert_eq!(registry.get("Naive Bayes").unwrap().threshold(), 0.13);
    assert_eq!(registry.get("Logistic Regression").unwrap().threshold(), 0.57);
}

#[test]
fn test_only_naive_bayes_falls_back() {
    let dir = TempDir::new().unwrap();
    write_nb(dir.path());

    let registry = init_registry(&specs_in(dir.path()), Some(DEFAULT_PREFERRED_MODEL)).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.default_model(), "Naive Bayes");
}

#[test]
fn test_half_pair_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_lr(dir.path());
    write_json(&dir.path().join("model/spam_nb_tfidf.json"), &nb_artifact());

    let registry = init_registry(&specs_in(dir.path()), None).unwrap();
    assert_eq!(registry.names(), vec!["Logistic Regression"]);

    let mut builder = RegistryBuilder::new();
    let outcome = builder
        .load(
            "Naive Bayes",
            dir.path().join("model/spam_nb_tfidf.json"),
            dir.path().join("model/threshold.json"),
        )
        .unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Missing {
            paths: vec![dir.path().join("model/threshold.json")]
        }
    );
}

#[test]
fn test_no_models_fails_startup() {
    let dir = TempDir::new().unwrap();

    let err = init_registry(&specs_in(dir.path()), Some(DEFAULT_PREFERRED_MODEL)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("no models found"));
    assert!(err.to_string().contains("threshold_lr.json"));
}

#[test]
fn test_malformed_threshold_is_error() {
    let dir = TempDir::new().unwrap();
    write_lr(dir.path());
    write_json(&dir.path().join("model/threshold_lr.json"), &json!({ "cutoff": 0.5 }));

    let err = init_registry(&specs_in(dir.path()), None).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_threshold_out_of_range_is_error() {
    let dir = TempDir::new().unwrap();
    write_lr(dir.path());
    write_json(&dir.path().join("model/threshold_lr.json"), &json!({ "threshold": 1.5 }));

    let err = init_registry(&specs_in(dir.path()), None).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_corrupt_artifact_is_error() {
    let dir = TempDir::new().unwrap();
    write_lr(dir.path());
    std::fs::write(dir.path().join("model/spam_lr_tfidf.json"), "not json").unwrap();

    let err = init_registry(&specs_in(dir.path()), None).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)));
}

#[test]
fn test_loaded_models_classify_examples() {
    let dir = TempDir::new().unwrap();
    write_nb(dir.path());
    write_lr(dir.path());

    let registry = init_registry(&specs_in(dir.path()), Some(DEFAULT_PREFERRED_MODEL)).unwrap();
    let predictor = Predictor::new(Arc::new(registry));

    for model in ["Naive Bayes", "Logistic Regression"] {
        let spam = predictor
            .predict(
                "Congratulations! You've won a free prize. Click here to claim now.",
                model,
            )
            .unwrap();
        assert_eq!(spam.label, Label::Spam, "{}", model);

        let ham = predictor
            .predict("Are we still on for class at 3 pm? Lunch after the meeting?", model)
            .unwrap();
        assert_eq!(ham.label, Label::Ham, "{}", model);
        assert!((0.0..=1.0).contains(&ham.probability));
    }
}
