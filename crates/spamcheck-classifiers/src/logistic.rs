//! Binary logistic regression over TF-IDF features

use crate::classifier::SparseVector;
use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};

/// Fitted logistic regression weights; positive decisions mean spam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature
    pub coef: Vec<f64>,

    #[serde(default)]
    pub intercept: f64,
}

impl LogisticRegression {
    /// Check shapes against the vectorizer's feature count
    pub fn validate(&self, n_features: usize) -> Result<()> {
        if self.coef.len() != n_features {
            return Err(Error::artifact(format!(
                "logistic regression has {} coefficients, expected {}",
                self.coef.len(),
                n_features
            )));
        }
        Ok(())
    }

    /// Signed distance from the decision boundary
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        self.intercept + x.iter().map(|&(j, w)| w * self.coef[j]).sum::<f64>()
    }

    /// Probability of the spam class
    pub fn spam_probability(&self, x: &SparseVector) -> f64 {
        sigmoid(self.decision_function(x))
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
