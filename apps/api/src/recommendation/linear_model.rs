//! Linear (multinomial logistic) classifier loaded from a JSON artifact, plus
//! encoder loading and artifact discovery at startup.
//!
//! Artifact shape:
//! ```json
//! {
//!   "classes": ["Data Scientist", "Web Developer"],
//!   "features": ["Age", "Skill_Python"],
//!   "coefficients": [[0.01, 1.2], [0.0, -0.4]],
//!   "intercepts": [0.0, 0.1]
//! }
//! ```
//! Encoders file: `{ "Gender": ["Female", "Male"], ... }`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::recommendation::model_adapter::{
    CategoricalEncoder, Classifier, Encoders, FeatureVector, ModelError,
};

#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    classes: Vec<String>,
    features: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    pub fn from_json(json: &str) -> Result<Self> {
        let model: LinearClassifier =
            serde_json::from_str(json).context("Model artifact is not valid JSON")?;
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid model artifact {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            bail!("model has no classes");
        }
        if self.coefficients.len() != self.classes.len() {
            bail!(
                "{} coefficient rows for {} classes",
                self.coefficients.len(),
                self.classes.len()
            );
        }
        if self.intercepts.len() != self.classes.len() {
            bail!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            );
        }
        if let Some(row) = self
            .coefficients
            .iter()
            .find(|row| row.len() != self.features.len())
        {
            bail!(
                "coefficient row has {} entries for {} features",
                row.len(),
                self.features.len()
            );
        }
        Ok(())
    }

    fn logits(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let inputs = self
            .features
            .iter()
            .map(|name| features.numeric(name))
            .collect::<Result<Vec<f64>, ModelError>>()?;

        Ok(self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept + row.iter().zip(&inputs).map(|(w, x)| w * x).sum::<f64>()
            })
            .collect())
    }
}

impl Classifier for LinearClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, features: &FeatureVector) -> Result<String, ModelError> {
        let logits = self.logits(features)?;
        logits
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.classes[i].clone())
            .ok_or_else(|| ModelError::Classifier("model has no classes".to_string()))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let logits = self.logits(features)?;
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(ModelError::InvalidProbabilities(format!(
                "softmax denominator is {sum}"
            )));
        }
        Ok(exps.into_iter().map(|e| e / sum).collect())
    }
}

pub fn load_encoders(path: &Path) -> Result<Encoders> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read encoders {}", path.display()))?;
    let raw: HashMap<String, Vec<String>> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid encoders file {}", path.display()))?;
    Ok(raw
        .into_iter()
        .map(|(feature, classes)| (feature, CategoricalEncoder::new(classes)))
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Startup discovery
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_MODEL_PATHS: &[&str] = &["models/career_model.json", "career_model.json"];
pub const DEFAULT_ENCODER_PATHS: &[&str] =
    &["models/career_encoders.json", "career_encoders.json"];

/// Explicit path when configured, otherwise the default candidates.
pub fn candidate_paths(explicit: Option<&Path>, defaults: &[&str]) -> Vec<PathBuf> {
    match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => defaults.iter().map(PathBuf::from).collect(),
    }
}

/// Loads from the first existing candidate that parses. Failures are logged and
/// the next candidate is tried; `None` means nothing usable was found.
pub fn load_first<T>(candidates: &[PathBuf], load: impl Fn(&Path) -> Result<T>) -> Option<T> {
    for path in candidates.iter().filter(|p| p.exists()) {
        match load(path) {
            Ok(value) => {
                info!("Loaded {}", path.display());
                return Some(value);
            }
            Err(e) => warn!("{e:#}"),
        }
    }
    None
}
