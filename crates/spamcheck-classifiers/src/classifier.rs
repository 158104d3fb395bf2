//! Classifier trait and common types

/// Sparse feature vector as `(feature index, weight)` pairs, sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Trait for all spam classifiers
///
/// Implementations must be pure: the same text always yields the same
/// probability, and scoring never mutates the classifier.
pub trait Classifier: Send + Sync {
    /// Probability in `[0, 1]` that `text` is spam
    fn spam_probability(&self, text: &str) -> f64;

    /// Get the classifier name
    fn name(&self) -> &str;
}
