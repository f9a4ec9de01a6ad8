//! Development Plan: turns a skill gap and free-text goals into a three-horizon plan.
//!
//! Missing skills are bucketed by position (first two short-term, next two
//! medium-term, the rest long-term). Any horizon left thin is topped up with
//! generic career-level goals so no horizon is ever empty.

use serde::Serialize;

const SHORT_TERM_SKILLS: usize = 2;
const MEDIUM_TERM_SKILLS: usize = 2;
const MIN_GOALS_PER_HORIZON: usize = 2;

const APPLY_KEYWORDS: &[&str] = &["apply", "job", "work"];
const PORTFOLIO_KEYWORDS: &[&str] = &["portfolio", "project"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentPlan {
    pub short_term: Vec<String>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
}

pub fn generate_plan(career: &str, missing_skills: &[String], career_goals: &str) -> DevelopmentPlan {
    let short_end = missing_skills.len().min(SHORT_TERM_SKILLS);
    let medium_end = missing_skills.len().min(SHORT_TERM_SKILLS + MEDIUM_TERM_SKILLS);
    let (short_skills, rest) = missing_skills.split_at(short_end);
    let (medium_skills, long_skills) = rest.split_at(medium_end - short_end);

    let mut short_term: Vec<String> = short_skills
        .iter()
        .flat_map(|skill| {
            [
                format!("Learn {skill} fundamentals"),
                format!("Complete an online course on {skill}"),
            ]
        })
        .collect();
    if short_term.len() < MIN_GOALS_PER_HORIZON {
        short_term.push(format!("Research best learning resources for {career} path"));
        short_term.push(format!("Join online communities focused on {career}"));
    }

    let mut medium_term: Vec<String> = medium_skills
        .iter()
        .flat_map(|skill| {
            [
                format!("Build projects showcasing {skill}"),
                format!("Get certified in {skill} if applicable"),
            ]
        })
        .collect();
    if medium_term.len() < MIN_GOALS_PER_HORIZON {
        medium_term.push(format!(
            "Contribute to open-source projects related to {career}"
        ));
        medium_term.push(format!("Network with professionals in the {career} field"));
    }

    let mut long_term: Vec<String> = long_skills
        .iter()
        .map(|skill| format!("Become proficient in advanced {skill} concepts"))
        .collect();

    let goals = career_goals.to_lowercase();
    if mentions_any(&goals, APPLY_KEYWORDS) {
        long_term.push(format!("Apply for {career} positions or internships"));
    }
    if mentions_any(&goals, PORTFOLIO_KEYWORDS) {
        long_term.push(format!(
            "Build a comprehensive portfolio of {career} projects"
        ));
    }
    if long_term.len() < MIN_GOALS_PER_HORIZON {
        long_term.push(format!(
            "Pursue advanced education or specialization in {career}"
        ));
        long_term.push(format!("Mentor others in {career} skills you've mastered"));
    }

    DevelopmentPlan {
        short_term,
        medium_term,
        long_term,
    }
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_are_bucketed_by_position() {
        let missing = skills(&["A", "B", "C", "D", "E", "F"]);
        let plan = generate_plan("Data Scientist", &missing, "");

        assert_eq!(
            plan.short_term,
            vec![
                "Learn A fundamentals",
                "Complete an online course on A",
                "Learn B fundamentals",
                "Complete an online course on B",
            ]
        );
        assert_eq!(
            plan.medium_term,
            vec![
                "Build projects showcasing C",
                "Get certified in C if applicable",
                "Build projects showcasing D",
                "Get certified in D if applicable",
            ]
        );
        assert_eq!(
            plan.long_term,
            vec![
                "Become proficient in advanced E concepts",
                "Become proficient in advanced F concepts",
            ]
        );
    }

    #[test]
    fn test_no_missing_skills_fills_every_horizon_with_generic_goals() {
        let plan = generate_plan("Web Developer", &[], "");
        assert_eq!(
            plan.short_term,
            vec![
                "Research best learning resources for Web Developer path",
                "Join online communities focused on Web Developer",
            ]
        );
        assert_eq!(
            plan.medium_term,
            vec![
                "Contribute to open-source projects related to Web Developer",
                "Network with professionals in the Web Developer field",
            ]
        );
        assert_eq!(
            plan.long_term,
            vec![
                "Pursue advanced education or specialization in Web Developer",
                "Mentor others in Web Developer skills you've mastered",
            ]
        );
    }

    #[test]
    fn test_single_long_term_skill_gets_topped_up() {
        let missing = skills(&["A", "B", "C", "D", "E"]);
        let plan = generate_plan("AI Engineer", &missing, "");
        assert_eq!(plan.long_term.len(), 3);
        assert_eq!(plan.long_term[0], "Become proficient in advanced E concepts");
    }

    #[test]
    fn test_goal_keywords_add_long_term_goals() {
        let plan = generate_plan(
            "Web Developer",
            &[],
            "I want to build a PORTFOLIO and get a Job",
        );
        assert_eq!(
            plan.long_term,
            vec![
                "Apply for Web Developer positions or internships",
                "Build a comprehensive portfolio of Web Developer projects",
            ]
        );
    }

    #[test]
    fn test_single_goal_keyword_still_gets_generic_fill() {
        let plan = generate_plan("Data Scientist", &[], "Work in AI");
        assert_eq!(
            plan.long_term,
            vec![
                "Apply for Data Scientist positions or internships",
                "Pursue advanced education or specialization in Data Scientist",
                "Mentor others in Data Scientist skills you've mastered",
            ]
        );
    }

    #[test]
    fn test_every_horizon_is_non_empty() {
        let goals = ["", "apply", "portfolio project job", "unrelated"];
        for n in 0..8 {
            let missing: Vec<String> = (0..n).map(|i| format!("Skill{i}")).collect();
            for goal in goals {
                let plan = generate_plan("Product Manager", &missing, goal);
                assert!(!plan.short_term.is_empty());
                assert!(!plan.medium_term.is_empty());
                assert!(!plan.long_term.is_empty());
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let missing = skills(&["React", "Node.js", "Responsive Design"]);
        assert_eq!(
            generate_plan("Web Developer", &missing, "find a job"),
            generate_plan("Web Developer", &missing, "find a job")
        );
    }
}
