//! Skill gap analysis between a user's technical skills and a career's requirements.

use crate::recommendation::catalog;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub required: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Matches `user_skills` against the catalog requirements for `career`.
///
/// A required skill counts as matched when some user skill equals it or either
/// contains the other, ignoring case. "Python" therefore covers "Python 3" and
/// "Advanced Python". Output lists follow the catalog's required-skill order.
pub fn match_skills(user_skills: &[String], career: &str) -> SkillMatchResult {
    match_against(user_skills, catalog::required_skills(career))
}

pub fn match_against(user_skills: &[String], required: &[&str]) -> SkillMatchResult {
    let user_lower: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        let skill_lower = skill.to_lowercase();
        let covered = user_lower.iter().any(|user_skill| {
            skill_lower == *user_skill
                || skill_lower.contains(user_skill.as_str())
                || user_skill.contains(skill_lower.as_str())
        });

        if covered {
            matched.push(skill.to_string());
        } else {
            missing.push(skill.to_string());
        }
    }

    SkillMatchResult {
        required: required.iter().map(|s| s.to_string()).collect(),
        matched,
        missing,
    }
}
