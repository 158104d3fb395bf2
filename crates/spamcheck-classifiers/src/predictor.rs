//! Threshold-based spam prediction

use crate::registry::{ModelEntry, ModelRegistry};
use spamcheck_core::{Error, PredictionResult, Result};
use std::sync::Arc;
use tracing::debug;

/// Applies a registry model and its threshold to free text
#[derive(Debug, Clone)]
pub struct Predictor {
    registry: Arc<ModelRegistry>,
}

impl Predictor {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    /// Classify `text` with the named model.
    ///
    /// Blank text yields [`PredictionResult::unknown`] for any model name,
    /// without touching a classifier.
    pub fn predict(&self, text: &str, model_name: &str) -> Result<PredictionResult> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(PredictionResult::unknown());
        }

        let entry = self
            .registry
            .get(model_name)
            .ok_or_else(|| Error::unknown_model(model_name))?;

        Ok(Self::score(entry, text))
    }

    /// Classify `text` with the registry's default model
    pub fn predict_default(&self, text: &str) -> PredictionResult {
        let text = text.trim();
        if text.is_empty() {
            return PredictionResult::unknown();
        }

        Self::score(self.registry.default_entry(), text)
    }

    fn score(entry: &ModelEntry, text: &str) -> PredictionResult {
        let p = entry.classifier().spam_probability(text);
        let result = PredictionResult::from_probability(p, entry.threshold());

        debug!(
            model = entry.name(),
            label = %result.label,
            probability = result.probability,
            "prediction"
        );

        result
    }
}
