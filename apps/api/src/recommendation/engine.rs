//! Recommendation Engine: picks a scorer, falls back when the classifier fails,
//! and expands the top three careers into full matches.
//!
//! Built once at startup and shared as `Arc<RecommendationEngine>`. Holds no
//! per-request state; `None` for the model adapter means no classifier is loaded.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::models::profile::UserProfile;
use crate::recommendation::catalog::{self, CareerMetadata};
use crate::recommendation::development_plan::{generate_plan, DevelopmentPlan};
use crate::recommendation::distribution::ScoreDistribution;
use crate::recommendation::model_adapter::{ModelAdapter, ModelError};
use crate::recommendation::rule_scorer::ProfileScorer;
use crate::recommendation::skill_match::match_skills;

pub const TOP_MATCHES: usize = 3;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("scoring produced an empty distribution")]
    EmptyDistribution,
}

// ────────────────────────────────────────────────────────────────────────────
// Result models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoringSource {
    #[serde(rename = "rule-based")]
    RuleBased,
    #[serde(rename = "machine-learning")]
    MachineLearning,
    #[serde(rename = "rule-based (fallback)")]
    RuleBasedFallback,
}

impl ScoringSource {
    pub fn label(self) -> &'static str {
        match self {
            ScoringSource::RuleBased => "rule-based",
            ScoringSource::MachineLearning => "machine-learning",
            ScoringSource::RuleBasedFallback => "rule-based (fallback)",
        }
    }
}

/// Which scoring branch ran. The source label is derived from the variant.
#[derive(Debug)]
pub enum ScoringOutcome {
    /// No classifier configured.
    RuleBased(ScoreDistribution),
    Model(ScoreDistribution),
    /// Classifier configured but failed; rule-based scores stand in.
    Fallback {
        distribution: ScoreDistribution,
        cause: ModelError,
    },
}

impl ScoringOutcome {
    pub fn source(&self) -> ScoringSource {
        match self {
            ScoringOutcome::RuleBased(_) => ScoringSource::RuleBased,
            ScoringOutcome::Model(_) => ScoringSource::MachineLearning,
            ScoringOutcome::Fallback { .. } => ScoringSource::RuleBasedFallback,
        }
    }

    pub fn distribution(&self) -> &ScoreDistribution {
        match self {
            ScoringOutcome::RuleBased(d) | ScoringOutcome::Model(d) => d,
            ScoringOutcome::Fallback { distribution, .. } => distribution,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Strong Match")]
    Strong,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Weak Match")]
    Weak,
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.8 => MatchLevel::Excellent,
            s if s >= 0.6 => MatchLevel::Strong,
            s if s >= 0.4 => MatchLevel::Good,
            s if s >= 0.2 => MatchLevel::Moderate,
            _ => MatchLevel::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Strong => "Strong Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Moderate => "Moderate Match",
            MatchLevel::Weak => "Weak Match",
        }
    }
}

/// One ranked career with its skill gap and development plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatch {
    pub career: String,
    pub score: f64,
    pub percentage: f64,
    pub match_level: MatchLevel,
    pub metadata: CareerMetadata,
    pub required_skills: Vec<String>,
    /// Required skills the user already has.
    #[serde(rename = "user_skills")]
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub development_plan: DevelopmentPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub recommended_career: String,
    pub confidence_score: f64,
    #[serde(rename = "model_type")]
    pub source: ScoringSource,
    #[serde(rename = "top_3_matches")]
    pub matches: Vec<CareerMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

pub struct RecommendationEngine {
    scorer: ProfileScorer,
    model: Option<ModelAdapter>,
}

impl RecommendationEngine {
    pub fn new(scorer: ProfileScorer, model: Option<ModelAdapter>) -> Self {
        Self { scorer, model }
    }

    /// Rule-based only.
    #[cfg(test)]
    pub fn rule_based(scorer: ProfileScorer) -> Self {
        Self::new(scorer, None)
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn score(&self, profile: &UserProfile) -> ScoringOutcome {
        let Some(model) = &self.model else {
            return ScoringOutcome::RuleBased(self.scorer.score(profile));
        };

        match model.predict(profile) {
            Ok(distribution) => ScoringOutcome::Model(distribution),
            Err(cause) => ScoringOutcome::Fallback {
                distribution: self.scorer.score(profile),
                cause,
            },
        }
    }

    pub fn recommend(&self, profile: &UserProfile) -> Result<RecommendationResult, EngineError> {
        let outcome = self.score(profile);
        if let ScoringOutcome::Fallback { cause, .. } = &outcome {
            warn!("Error making prediction with ML model: {cause}");
        }
        let distribution = outcome.distribution();
        let best = distribution.best().ok_or(EngineError::EmptyDistribution)?;

        let matches = distribution
            .top(TOP_MATCHES)
            .iter()
            .map(|entry| build_match(&entry.career, entry.score, profile))
            .collect();

        Ok(RecommendationResult {
            recommended_career: best.career.clone(),
            confidence_score: best.score,
            source: outcome.source(),
            matches,
        })
    }
}

fn build_match(career: &str, score: f64, profile: &UserProfile) -> CareerMatch {
    let skills = match_skills(&profile.technical_skills, career);
    let development_plan = generate_plan(career, &skills.missing, &profile.career_goals);

    CareerMatch {
        career: career.to_string(),
        score,
        percentage: score * 100.0,
        match_level: MatchLevel::from_score(score),
        metadata: catalog::lookup(career),
        required_skills: skills.required,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        development_plan,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::recommendation::catalog::NOT_AVAILABLE;
    use crate::recommendation::model_adapter::tests::{BrokenClassifier, FixedClassifier};
    use crate::recommendation::model_adapter::Encoders;

    const TECHNICAL_CLUSTER: [&str; 4] = [
        "Software Engineer",
        "Web Developer",
        "Data Scientist",
        "AI Engineer",
    ];

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn cs_profile() -> UserProfile {
        UserProfile {
            age: 21,
            gender: "Female".to_string(),
            education_level: "Bachelor's".to_string(),
            field_of_study: "Computer Science".to_string(),
            technical_skills: strings(&["Python", "JavaScript", "HTML", "CSS"]),
            soft_skills: strings(&["Communication", "Teamwork"]),
            interests: strings(&["Web Development", "Data Science", "AI"]),
            personality_traits: strings(&["Analytical"]),
            work_environment: "Remote".to_string(),
            career_goals: "Build a portfolio and apply for jobs".to_string(),
        }
    }

    fn fixed_engine(classes: &[&str], probabilities: Vec<f64>) -> RecommendationEngine {
        let classifier = FixedClassifier {
            classes: strings(classes),
            probabilities,
        };
        RecommendationEngine::new(
            ProfileScorer::default(),
            Some(ModelAdapter::new(Arc::new(classifier), Encoders::new())),
        )
    }

    #[test]
    fn test_match_level_thresholds() {
        assert_eq!(MatchLevel::from_score(0.85).label(), "Excellent Match");
        assert_eq!(MatchLevel::from_score(0.65).label(), "Strong Match");
        assert_eq!(MatchLevel::from_score(0.45).label(), "Good Match");
        assert_eq!(MatchLevel::from_score(0.25).label(), "Moderate Match");
        assert_eq!(MatchLevel::from_score(0.1).label(), "Weak Match");
    }

    #[test]
    fn test_match_level_boundaries_are_inclusive() {
        assert_eq!(MatchLevel::from_score(0.8), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(0.6), MatchLevel::Strong);
        assert_eq!(MatchLevel::from_score(0.4), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(0.2), MatchLevel::Moderate);
        assert_eq!(MatchLevel::from_score(0.0), MatchLevel::Weak);
    }

    #[test]
    fn test_computer_science_scenario_without_classifier() {
        let engine = RecommendationEngine::rule_based(ProfileScorer::default());
        let result = engine.recommend(&cs_profile()).unwrap();

        assert_eq!(result.source, ScoringSource::RuleBased);
        assert!(TECHNICAL_CLUSTER.contains(&result.recommended_career.as_str()));
        assert_eq!(result.matches[0].career, result.recommended_career);
        assert_eq!(result.matches[0].score, result.confidence_score);

        let web = match_skills(&cs_profile().technical_skills, "Web Developer");
        assert_eq!(web.matched, strings(&["HTML", "CSS", "JavaScript"]));
        assert_eq!(web.missing, strings(&["React", "Node.js", "Responsive Design"]));
    }

    #[test]
    fn test_always_three_matches_in_descending_order() {
        let engine = RecommendationEngine::rule_based(ProfileScorer::default());
        for profile in [cs_profile(), UserProfile::default()] {
            let result = engine.recommend(&profile).unwrap();
            assert_eq!(result.matches.len(), TOP_MATCHES);
            assert!(result
                .matches
                .windows(2)
                .all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_ties_break_in_catalog_order() {
        let engine = RecommendationEngine::rule_based(ProfileScorer::default());
        let result = engine.recommend(&UserProfile::default()).unwrap();
        let careers: Vec<&str> = result.matches.iter().map(|m| m.career.as_str()).collect();
        assert_eq!(
            careers,
            vec!["Data Scientist", "Software Engineer", "Web Developer"]
        );
        assert_eq!(result.matches[0].match_level, MatchLevel::Weak);
    }

    #[test]
    fn test_match_carries_percentage_metadata_and_plan() {
        let engine = RecommendationEngine::rule_based(ProfileScorer::default());
        let result = engine.recommend(&cs_profile()).unwrap();

        for m in &result.matches {
            assert!((m.percentage - m.score * 100.0).abs() < 1e-9);
            assert_eq!(m.metadata.skills, m.required_skills);
            assert!(!m.development_plan.short_term.is_empty());
            assert!(!m.development_plan.medium_term.is_empty());
            assert!(!m.development_plan.long_term.is_empty());
            assert!(m
                .development_plan
                .long_term
                .contains(&format!("Apply for {} positions or internships", m.career)));
        }
    }

    #[test]
    fn test_classifier_success_is_machine_learning() {
        let engine = fixed_engine(
            &["Data Scientist", "Web Developer", "AI Engineer", "Product Manager"],
            vec![0.1, 0.6, 0.2, 0.1],
        );
        let result = engine.recommend(&cs_profile()).unwrap();

        assert_eq!(result.source, ScoringSource::MachineLearning);
        assert_eq!(result.recommended_career, "Web Developer");
        assert!((result.confidence_score - 0.6).abs() < 1e-9);
        assert_eq!(result.matches[0].match_level, MatchLevel::Strong);
        assert_eq!(result.matches[1].career, "AI Engineer");
    }

    #[test]
    fn test_classifier_failure_falls_back_to_rules() {
        let engine = RecommendationEngine::new(
            ProfileScorer::default(),
            Some(ModelAdapter::new(Arc::new(BrokenClassifier), Encoders::new())),
        );
        let outcome = engine.score(&cs_profile());
        assert!(matches!(
            outcome,
            ScoringOutcome::Fallback {
                cause: ModelError::Classifier(_),
                ..
            }
        ));

        let result = engine.recommend(&cs_profile()).unwrap();
        assert_eq!(result.source, ScoringSource::RuleBasedFallback);
        assert!(TECHNICAL_CLUSTER.contains(&result.recommended_career.as_str()));
        assert_eq!(result.matches.len(), TOP_MATCHES);
    }

    #[test]
    fn test_unknown_classifier_label_gets_placeholder_metadata() {
        let engine = fixed_engine(&["Astronaut", "Web Developer"], vec![0.9, 0.1]);
        let result = engine.recommend(&cs_profile()).unwrap();

        assert_eq!(result.recommended_career, "Astronaut");
        let astronaut = &result.matches[0];
        assert_eq!(astronaut.metadata.salary, NOT_AVAILABLE);
        assert!(astronaut.required_skills.is_empty());
        assert!(!astronaut.development_plan.short_term.is_empty());
        // Fewer classes than the shortlist size.
        assert_eq!(result.matches.len(), 2);
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let engine = RecommendationEngine::rule_based(ProfileScorer::default());
        let result = engine.recommend(&cs_profile()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["model_type"], "rule-based");
        assert_eq!(json["top_3_matches"].as_array().unwrap().len(), 3);
        let first = &json["top_3_matches"][0];
        assert!(first["user_skills"].is_array());
        assert!(first["match_level"].as_str().unwrap().ends_with("Match"));
        assert!(first["metadata"]["salary"].is_string());
        assert!(first["development_plan"]["medium_term"].is_array());
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(ScoringSource::RuleBased.label(), "rule-based");
        assert_eq!(ScoringSource::MachineLearning.label(), "machine-learning");
        assert_eq!(
            ScoringSource::RuleBasedFallback.label(),
            "rule-based (fallback)"
        );
    }
}
