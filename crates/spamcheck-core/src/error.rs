//! Error types for spamcheck

/// Result type alias using spamcheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for spamcheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors, including an empty model registry
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed classifier artifact
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Prediction requested for a model that was never loaded
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new unknown-model error
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel(name.into())
    }
}
