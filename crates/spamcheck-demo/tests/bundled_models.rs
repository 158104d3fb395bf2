//! The artifacts shipped in `model/` load and separate the demo examples

use spamcheck_classifiers::{init_registry, ModelPairSpec, Predictor};
use spamcheck_core::Label;
use spamcheck_demo::config::{DemoConfig, UiConfig};
use std::path::PathBuf;
use std::sync::Arc;

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn bundled_predictor() -> Predictor {
    let root = repo_root();
    let config = DemoConfig::from_file(root.join("spamcheck.yaml")).unwrap();
    let specs: Vec<ModelPairSpec> = config
        .models
        .iter()
        .map(|spec| {
            ModelPairSpec::new(
                spec.name.clone(),
                root.join(&spec.classifier),
                root.join(&spec.threshold),
            )
        })
        .collect();

    let registry = init_registry(&specs, config.default_model.as_deref()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.default_model(), "Logistic Regression");
    Predictor::new(Arc::new(registry))
}

#[test]
fn test_bundled_models_label_examples() {
    let predictor = bundled_predictor();
    let examples = UiConfig::default().examples;

    for model in ["Naive Bayes", "Logistic Regression"] {
        let expected = [Label::Spam, Label::Ham, Label::Spam, Label::Spam];
        for (text, expected) in examples.iter().zip(expected) {
            let result = predictor.predict(text, model).unwrap();
            assert_eq!(result.label, expected, "{} on {:?}", model, text);
            assert!((0.0..=1.0).contains(&result.probability));
        }
    }
}

#[test]
fn test_bundled_models_blank_input() {
    let predictor = bundled_predictor();
    let result = predictor.predict("", "Naive Bayes").unwrap();
    assert_eq!(result.label, Label::Unknown);
    assert_eq!(result.probability, 0.0);
}
