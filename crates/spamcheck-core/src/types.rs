//! Prediction labels and results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places kept in a reported probability
pub const PROBABILITY_DECIMALS: i32 = 4;

/// Outcome of comparing a spam probability against a model's threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Probability reached the threshold
    Spam,
    /// Probability stayed below the threshold
    Ham,
    /// No text to classify
    Unknown,
}

impl Label {
    /// Text shown in the UI. `Unknown` is a placeholder, not a class.
    pub fn display_symbol(&self) -> &'static str {
        match self {
            Self::Spam => "SPAM",
            Self::Ham => "HAM",
            Self::Unknown => "—",
        }
    }

    /// Label for a probability under the given threshold (inclusive)
    pub fn from_threshold(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            Self::Spam
        } else {
            Self::Ham
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Spam => "SPAM",
            Self::Ham => "HAM",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Label plus spam probability for a single message
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Label,

    /// Spam probability rounded to [`PROBABILITY_DECIMALS`] places
    pub probability: f64,
}

impl PredictionResult {
    /// Result for empty input
    pub fn unknown() -> Self {
        Self {
            label: Label::Unknown,
            probability: 0.0,
        }
    }

    /// Build a result from a raw probability. The label is decided before rounding.
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        Self {
            label: Label::from_threshold(probability, threshold),
            probability: round_probability(probability),
        }
    }
}

/// Round to [`PROBABILITY_DECIMALS`] decimal places
pub fn round_probability(p: f64) -> f64 {
    let scale = 10f64.powi(PROBABILITY_DECIMALS);
    (p * scale).round() / scale
}
