//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use spamcheck_core::{Label, PredictionResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Message to classify; absent means empty
    #[serde(default)]
    pub text: String,

    /// Model name; absent means the default model
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub label: Label,

    /// Label as rendered in the form (`—` for unknown)
    pub display: String,

    /// P(spam), rounded to 4 decimals
    pub probability: f64,

    pub model: String,
}

impl PredictResponse {
    pub fn new(result: PredictionResult, model: impl Into<String>) -> Self {
        Self {
            label: result.label,
            display: result.label.display_symbol().to_string(),
            probability: result.probability,
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub threshold: f64,
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleInput {
    pub text: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiResponse {
    pub title: String,
    pub description: String,
    pub examples: Vec<ExampleInput>,
}
