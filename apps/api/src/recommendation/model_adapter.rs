//! Model Adapter: the seam between the engine and a trained career classifier.
//!
//! The classifier itself is pluggable (`Classifier` trait, carried as
//! `Arc<dyn Classifier>`). The adapter owns profile → feature encoding and turns
//! the classifier's probability vector into a `ScoreDistribution`.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::models::profile::UserProfile;
use crate::recommendation::distribution::ScoreDistribution;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("feature '{0}' is missing from the input")]
    MissingFeature(String),

    #[error("categorical feature '{0}' has no encoder")]
    UnencodedFeature(String),

    #[error("classifier returned {got} probabilities for {expected} classes")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("classifier returned an invalid probability vector: {0}")]
    InvalidProbabilities(String),

    #[error("classifier error: {0}")]
    Classifier(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Features
// ────────────────────────────────────────────────────────────────────────────

/// A single encoded input value.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    /// Raw categorical value that no encoder was available for.
    Categorical(String),
}

/// Named features handed to the classifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    values: HashMap<String, FeatureValue>,
}

impl FeatureVector {
    pub fn insert(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.values.insert(name.into(), value);
    }

    /// Numeric value of a feature, failing if it is absent or still a raw category.
    pub fn numeric(&self, name: &str) -> Result<f64, ModelError> {
        match self.values.get(name) {
            Some(FeatureValue::Numeric(v)) => Ok(*v),
            Some(FeatureValue::Categorical(_)) => {
                Err(ModelError::UnencodedFeature(name.to_string()))
            }
            None => Err(ModelError::MissingFeature(name.to_string())),
        }
    }
}

#[cfg(test)]
impl FeatureVector {
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Label encoder for one categorical feature: a value's code is its index in `classes`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalEncoder {
    pub classes: Vec<String>,
}

impl CategoricalEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn transform(&self, value: &str) -> Option<f64> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as f64)
    }

    /// Encodes `value`, substituting the first known class for unseen values.
    /// This biases unseen inputs toward one class; kept for compatibility with
    /// encoders fitted that way.
    pub fn transform_or_first(&self, value: &str) -> Option<f64> {
        self.transform(value)
            .or_else(|| self.classes.first().and_then(|first| self.transform(first)))
    }
}

pub type Encoders = HashMap<String, CategoricalEncoder>;

const SKILL_FEATURES: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "SQL",
    "Machine Learning",
    "Data Analysis",
];

const INTEREST_FEATURES: &[&str] = &[
    "AI",
    "Data Science",
    "Web Development",
    "Mobile Development",
    "Cybersecurity",
];

fn contains_ignore_case(list: &[String], item: &str) -> bool {
    let item = item.to_lowercase();
    list.iter().any(|s| s.to_lowercase() == item)
}

fn flag(present: bool) -> FeatureValue {
    FeatureValue::Numeric(if present { 1.0 } else { 0.0 })
}

/// Encodes a profile into the feature layout the classifier was trained on.
pub fn encode_profile(profile: &UserProfile, encoders: &Encoders) -> FeatureVector {
    let mut features = FeatureVector::default();
    features.insert("Age", FeatureValue::Numeric(f64::from(profile.age)));

    let categorical = [
        ("Gender", &profile.gender),
        ("Education", &profile.education_level),
        ("Field", &profile.field_of_study),
        ("WorkEnvironment", &profile.work_environment),
    ];
    for (name, raw) in categorical {
        let value = match encoders.get(name) {
            Some(encoder) => match encoder.transform(raw) {
                Some(code) => FeatureValue::Numeric(code),
                // Raw values are user demographics; only the substitute is logged.
                None => {
                    debug!(
                        feature = name,
                        substitute = encoder.classes.first().map(String::as_str).unwrap_or("none"),
                        "Unseen categorical value, substituting first known class"
                    );
                    encoder
                        .transform_or_first(raw)
                        .map(FeatureValue::Numeric)
                        .unwrap_or_else(|| FeatureValue::Categorical(raw.clone()))
                }
            },
            None => FeatureValue::Categorical(raw.clone()),
        };
        features.insert(name, value);
    }

    for skill in SKILL_FEATURES {
        features.insert(
            format!("Skill_{}", skill.replace(' ', "")),
            flag(contains_ignore_case(&profile.technical_skills, skill)),
        );
    }
    for interest in INTEREST_FEATURES {
        features.insert(
            format!("Interest_{}", interest.replace(' ', "")),
            flag(contains_ignore_case(&profile.interests, interest)),
        );
    }

    features.insert(
        "NumTechnicalSkills",
        FeatureValue::Numeric(profile.technical_skills.len() as f64),
    );
    features.insert(
        "NumSoftSkills",
        FeatureValue::Numeric(profile.soft_skills.len() as f64),
    );

    features
}

// ────────────────────────────────────────────────────────────────────────────
// Classifier seam
// ────────────────────────────────────────────────────────────────────────────

/// A trained probabilistic classifier over career labels.
/// Implement this to plug in a different model format without touching the engine.
pub trait Classifier: Send + Sync {
    /// Career labels, aligned with `predict_proba` output.
    fn classes(&self) -> &[String];

    fn predict(&self, features: &FeatureVector) -> Result<String, ModelError>;

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError>;
}

#[derive(Clone)]
pub struct ModelAdapter {
    classifier: Arc<dyn Classifier>,
    encoders: Arc<Encoders>,
}

impl ModelAdapter {
    pub fn new(classifier: Arc<dyn Classifier>, encoders: Encoders) -> Self {
        Self {
            classifier,
            encoders: Arc::new(encoders),
        }
    }

    /// Runs the classifier and returns its distribution, sorted descending.
    pub fn predict(&self, profile: &UserProfile) -> Result<ScoreDistribution, ModelError> {
        let features = encode_profile(profile, &self.encoders);

        let label = self.classifier.predict(&features)?;
        let probabilities = self.classifier.predict_proba(&features)?;
        let classes = self.classifier.classes();

        if probabilities.len() != classes.len() {
            return Err(ModelError::ShapeMismatch {
                expected: classes.len(),
                got: probabilities.len(),
            });
        }
        if let Some(bad) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(ModelError::InvalidProbabilities(format!(
                "value {bad} is not a probability"
            )));
        }
        if probabilities.iter().sum::<f64>() <= 0.0 {
            return Err(ModelError::InvalidProbabilities(
                "probabilities sum to zero".to_string(),
            ));
        }

        let distribution = classes
            .iter()
            .cloned()
            .zip(probabilities)
            .collect::<ScoreDistribution>()
            .normalized()
            .sorted_desc();

        if distribution.best().map(|b| b.career.as_str()) != Some(label.as_str()) {
            debug!("Classifier label '{label}' differs from highest-probability class");
        }

        Ok(distribution)
    }
}
