//! Demo configuration

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use spamcheck_classifiers::{default_model_pairs, ModelPairSpec, DEFAULT_PREFERRED_MODEL};
use std::net::SocketAddr;
use std::path::Path;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./spamcheck.yaml";

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Listen address
    #[serde(default = "default_address")]
    pub address: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model preselected in the form, when loaded
    #[serde(default = "default_preferred_model")]
    pub default_model: Option<String>,

    /// Candidate models, probed in order
    #[serde(default = "default_model_pairs")]
    pub models: Vec<ModelPairSpec>,

    /// Page text and example inputs
    #[serde(default)]
    pub ui: UiConfig,
}

impl DemoConfig {
    /// Load configuration from file and CLI overrides.
    ///
    /// An explicit `--config` must exist; the default path is optional.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            None => Self::default(),
        };

        if let Some(address) = &cli.address {
            config.address = address.clone();
        }

        if let Some(port) = cli.port {
            config.port = port;
        }

        Ok(config)
    }

    /// Parse a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.address, self.port).parse()?)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            default_model: default_preferred_model(),
            models: default_model_pairs(),
            ui: UiConfig::default(),
        }
    }
}

/// Text shown around the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Messages offered as one-click examples
    #[serde(default = "default_examples")]
    pub examples: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            examples: default_examples(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_preferred_model() -> Option<String> {
    Some(DEFAULT_PREFERRED_MODEL.to_string())
}

fn default_title() -> String {
    "Spam Detector (TF-IDF): NB vs LR".to_string()
}

fn default_description() -> String {
    "Choose a model. Logistic Regression at t=0.57 favors recall and F1; \
     Naive Bayes at t=0.13 is a solid baseline.\n\
     Predictions use the saved threshold of the selected model."
        .to_string()
}

fn default_examples() -> Vec<String> {
    vec![
        "Congratulations! You’ve won a free vacation. Click here to claim now.".to_string(),
        "Are we still on for class at 3 pm?".to_string(),
        "Reply STOP to unsubscribe from alerts.".to_string(),
        "URGENT! Your account will be suspended. Verify at http://bit.ly/xyz".to_string(),
    ]
}
