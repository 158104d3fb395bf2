//! Multinomial Naive Bayes over TF-IDF features

use crate::classifier::SparseVector;
use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};

/// Fitted multinomial Naive Bayes parameters for a ham/spam problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Log prior per class, `[ham, spam]`
    pub class_log_prior: Vec<f64>,

    /// Log probability of each feature given the class, one row per class
    pub feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Check shapes against the vectorizer's feature count
    pub fn validate(&self, n_features: usize) -> Result<()> {
        if self.class_log_prior.len() != 2 || self.feature_log_prob.len() != 2 {
            return Err(Error::artifact(format!(
                "naive bayes must have exactly 2 classes, got {} priors and {} rows",
                self.class_log_prior.len(),
                self.feature_log_prob.len()
            )));
        }

        for (class, row) in self.feature_log_prob.iter().enumerate() {
            if row.len() != n_features {
                return Err(Error::artifact(format!(
                    "feature_log_prob row {} has {} entries, expected {}",
                    class,
                    row.len(),
                    n_features
                )));
            }
        }

        Ok(())
    }

    /// Joint log likelihood of `x` under each class
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> [f64; 2] {
        let mut jll = [self.class_log_prior[0], self.class_log_prior[1]];
        for (class, row) in self.feature_log_prob.iter().enumerate() {
            jll[class] += x.iter().map(|&(j, w)| w * row[j]).sum::<f64>();
        }
        jll
    }

    /// Posterior probability of the spam class (index 1)
    pub fn spam_probability(&self, x: &SparseVector) -> f64 {
        let jll = self.joint_log_likelihood(x);
        let max = jll[0].max(jll[1]);
        let ham = (jll[0] - max).exp();
        let spam = (jll[1] - max).exp();
        (spam / (ham + spam)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> MultinomialNb {
        MultinomialNb {
            class_log_prior: vec![0.8f64.ln(), 0.2f64.ln()],
            feature_log_prob: vec![
                vec![0.1f64.ln(), 0.9f64.ln()],
                vec![0.7f64.ln(), 0.3f64.ln()],
            ],
        }
    }

    #[test]
    fn test_empty_vector_returns_prior() {
        let p = model().spam_probability(&vec![]);
        assert!((p - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_posterior() {
        let x = vec![(0, 1.0)];
        let spam = 0.2 * 0.7;
        let ham = 0.8 * 0.1;
        let expected = spam / (spam + ham);
        assert!((model().spam_probability(&x) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_likelihoods_stay_finite() {
        let x = vec![(0, 1000.0)];
        let p = model().spam_probability(&x);
        assert!(p.is_finite());
        assert!((0.0..=1.0).contains(&p));
        assert!(p > 0.99);
    }

    #[test]
    fn test_validate_shapes() {
        assert!(model().validate(2).is_ok());
        assert!(model().validate(3).is_err());

        let mut three_class = model();
        three_class.class_log_prior.push(0.0);
        assert!(three_class.validate(2).is_err());
    }
}
