//! spamcheck classifiers
//!
//! Spam scoring over exported TF-IDF pipelines.
//!
//! - [`TfidfVectorizer`] turns text into a sparse, weighted term vector
//! - [`MultinomialNb`] and [`LogisticRegression`] turn that vector into P(spam)
//! - [`ModelRegistry`] holds the models loaded at startup with their thresholds
//! - [`Predictor`] applies a model's threshold to produce a label
//!
//! Everything here is immutable once loaded and safe to share across threads.

pub mod artifact;
pub mod classifier;
pub mod config;
pub mod logistic;
pub mod naive_bayes;
pub mod predictor;
pub mod registry;
pub mod tfidf;

pub use artifact::{load_threshold, Estimator, PipelineArtifact, ThresholdRecord, TfidfPipeline};
pub use classifier::{Classifier, SparseVector};
pub use config::{default_model_pairs, ModelPairSpec, DEFAULT_PREFERRED_MODEL};
pub use logistic::LogisticRegression;
pub use naive_bayes::MultinomialNb;
pub use predictor::Predictor;
pub use registry::{init_registry, LoadOutcome, ModelEntry, ModelRegistry, RegistryBuilder};
pub use tfidf::{Norm, TfidfVectorizer, VectorizerSpec};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::predictor::Predictor;
    pub use crate::registry::{init_registry, ModelRegistry, RegistryBuilder};
    pub use spamcheck_core::{Label, PredictionResult};
}
