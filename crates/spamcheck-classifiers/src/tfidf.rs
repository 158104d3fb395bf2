//! TF-IDF feature extraction for exported text pipelines

use crate::classifier::SparseVector;
use regex::Regex;
use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Vectorizer parameters as exported alongside a trained model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerSpec {
    /// Term (or space-joined n-gram) to feature index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature index
    pub idf: Vec<f64>,

    /// Lowercase text before tokenizing
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Regex whose matches are the tokens
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    /// Inclusive `(min_n, max_n)` word n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Tokens dropped before n-grams are formed
    #[serde(default)]
    pub stop_words: Vec<String>,

    /// Use `1 + ln(tf)` instead of raw counts
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Row normalization; `null` disables it
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

/// Vector normalization applied after IDF weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_lowercase() -> bool {
    true
}

fn default_token_pattern() -> String {
    r"(?u)\b\w\w+\b".to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Compiled vectorizer
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    lowercase: bool,
    token_regex: Regex,
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    /// Compile and validate a vectorizer spec
    pub fn new(spec: VectorizerSpec) -> Result<Self> {
        let (min_n, max_n) = spec.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::artifact(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        if let Some((term, index)) = spec
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= spec.idf.len())
        {
            return Err(Error::artifact(format!(
                "vocabulary term '{}' has index {} but idf has {} entries",
                term,
                index,
                spec.idf.len()
            )));
        }

        if spec.vocabulary.len() != spec.idf.len() {
            return Err(Error::artifact(format!(
                "vocabulary has {} terms but idf has {} entries",
                spec.vocabulary.len(),
                spec.idf.len()
            )));
        }

        let token_regex = Regex::new(&spec.token_pattern).map_err(|e| {
            Error::artifact(format!("Failed to compile token pattern: {}", e))
        })?;

        Ok(Self {
            vocabulary: spec.vocabulary,
            idf: spec.idf,
            lowercase: spec.lowercase,
            token_regex,
            ngram_range: spec.ngram_range,
            stop_words: spec.stop_words.into_iter().collect(),
            sublinear_tf: spec.sublinear_tf,
            norm: spec.norm,
        })
    }

    /// Number of features produced by [`transform`](Self::transform)
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Split text into tokens, after lowercasing and stop word removal
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        self.token_regex
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }

    /// All word n-grams in the configured range, joined by single spaces
    pub fn ngrams(&self, tokens: &[String]) -> Vec<String> {
        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }

        terms
    }

    /// Weighted, normalized term vector for `text`. Out-of-vocabulary terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let tokens = self.tokenize(text);

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.ngrams(&tokens) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (index, tf * self.idf[index])
            })
            .collect();
        vector.sort_unstable_by_key(|(index, _)| *index);

        let length = match self.norm {
            Some(Norm::L2) => vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => vector.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            None => 1.0,
        };
        if length > 0.0 && length != 1.0 {
            for (_, weight) in &mut vector {
                *weight /= length;
            }
        }

        vector
    }
}
