use serde::{Deserialize, Serialize};

/// The user profile a recommendation is computed from.
///
/// Scalar fields are required on the wire; list fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: i32,
    pub gender: String,
    pub education_level: String,
    pub field_of_study: String,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    pub work_environment: String,
    pub career_goals: String,
}
