//! Model registry initialization

use crate::artifact::{load_threshold, TfidfPipeline};
use crate::classifier::Classifier;
use crate::config::ModelPairSpec;
use spamcheck_core::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// A loaded model and the threshold it is judged against
#[derive(Clone)]
pub struct ModelEntry {
    name: String,
    classifier: Arc<dyn Classifier>,
    threshold: f64,
}

impl ModelEntry {
    /// Create an entry, rejecting thresholds outside `[0, 1]`
    pub fn new(
        name: impl Into<String>,
        classifier: Arc<dyn Classifier>,
        threshold: f64,
    ) -> Result<Self> {
        let name = name.into();
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::config(format!(
                "threshold {} for model '{}' is outside [0, 1]",
                threshold, name
            )));
        }

        Ok(Self {
            name,
            classifier,
            threshold,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classifier(&self) -> &Arc<dyn Classifier> {
        &self.classifier
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelEntry")
            .field("name", &self.name)
            .field("classifier", &self.classifier.name())
            .field("threshold", &self.threshold)
            .finish()
    }
}

/// Result of probing one classifier/threshold pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both files were present and the entry was registered
    Loaded,

    /// At least one file was absent; nothing was registered
    Missing { paths: Vec<PathBuf> },
}

/// Collects entries before the registry is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<ModelEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. An existing entry with the same name is replaced in place.
    pub fn insert(&mut self, entry: ModelEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_entry(mut self, entry: ModelEntry) -> Self {
        self.insert(entry);
        self
    }

    /// Load `name` from a pipeline artifact and threshold record.
    ///
    /// Missing files are reported as [`LoadOutcome::Missing`]; files that
    /// exist but cannot be parsed are errors.
    pub fn load(
        &mut self,
        name: &str,
        classifier_path: impl AsRef<Path>,
        threshold_path: impl AsRef<Path>,
    ) -> Result<LoadOutcome> {
        let classifier_path = classifier_path.as_ref();
        let threshold_path = threshold_path.as_ref();

        let missing: Vec<PathBuf> = [classifier_path, threshold_path]
            .into_iter()
            .filter(|path| !path.exists())
            .map(Path::to_path_buf)
            .collect();
        if !missing.is_empty() {
            return Ok(LoadOutcome::Missing { paths: missing });
        }

        let pipeline = TfidfPipeline::from_file(name, classifier_path)?;
        let threshold = load_threshold(threshold_path)?;
        self.insert(ModelEntry::new(name, Arc::new(pipeline), threshold)?);

        Ok(LoadOutcome::Loaded)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the registry.
    ///
    /// The default model is `preferred` when it was loaded, otherwise the
    /// first inserted entry. Fails when nothing was loaded.
    pub fn build(self, preferred: Option<&str>) -> Result<ModelRegistry> {
        let first = self
            .entries
            .first()
            .ok_or_else(|| Error::config("no models found"))?;

        let default_model = preferred
            .filter(|name| self.entries.iter().any(|e| e.name == *name))
            .unwrap_or(first.name.as_str())
            .to_string();

        Ok(ModelRegistry {
            entries: self.entries,
            default_model,
        })
    }
}

/// Read-only set of models available for prediction
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
    default_model: String,
}

impl ModelRegistry {
    /// Get an entry by name
    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check if a model is loaded
    pub fn has_model(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Model names in load order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Entries in load order
    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn default_entry(&self) -> &ModelEntry {
        self.get(&self.default_model).unwrap_or(&self.entries[0])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty registry cannot be built
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Probe every candidate pair and build the registry.
///
/// Pairs with missing files are skipped with a warning. Fails with a
/// configuration error naming the expected files when none load.
pub fn init_registry(specs: &[ModelPairSpec], preferred: Option<&str>) -> Result<ModelRegistry> {
    let mut builder = RegistryBuilder::new();

    info!("Probing {} model candidates", specs.len());

    for spec in specs {
        match builder.load(&spec.name, &spec.classifier, &spec.threshold)? {
            LoadOutcome::Loaded => {
                info!(
                    "✓ Loaded model: {} ({})",
                    spec.name,
                    spec.classifier.display()
                );
            }
            LoadOutcome::Missing { paths } => {
                let paths: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
                warn!("✗ Skipping model {}: missing {}", spec.name, paths.join(", "));
            }
        }
    }

    if builder.is_empty() {
        let expected: Vec<String> = specs
            .iter()
            .map(|s| {
                format!(
                    "- {}: {} + {}",
                    s.name,
                    s.classifier.display(),
                    s.threshold.display()
                )
            })
            .collect();
        return Err(Error::config(format!(
            "no models found. Place artifacts at:\n{}",
            expected.join("\n")
        )));
    }

    let registry = builder.build(preferred)?;
    info!(
        "Model registry initialized with {}/{} models, default: {}",
        registry.len(),
        specs.len(),
        registry.default_model()
    );

    Ok(registry)
}
