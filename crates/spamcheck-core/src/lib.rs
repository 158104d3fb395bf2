//! spamcheck core
//!
//! Types shared by the classifier and demo crates:
//! - the error type and result alias
//! - prediction labels and results

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Label, PredictionResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Label, PredictionResult};
}
