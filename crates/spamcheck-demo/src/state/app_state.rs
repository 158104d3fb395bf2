use crate::config::{DemoConfig, UiConfig};
use spamcheck_classifiers::{init_registry, ModelRegistry, Predictor};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Predictor over the registry loaded at startup
    pub predictor: Predictor,

    /// Page text and examples
    pub ui: Arc<UiConfig>,
}

impl AppState {
    pub fn new(registry: ModelRegistry, ui: UiConfig) -> Self {
        Self {
            predictor: Predictor::new(Arc::new(registry)),
            ui: Arc::new(ui),
        }
    }

    /// Load every configured model. Fails when none are available.
    pub fn from_config(config: &DemoConfig) -> spamcheck_core::Result<Self> {
        let registry = init_registry(&config.models, config.default_model.as_deref())?;
        Ok(Self::new(registry, config.ui.clone()))
    }

    pub fn registry(&self) -> &ModelRegistry {
        self.predictor.registry()
    }
}
