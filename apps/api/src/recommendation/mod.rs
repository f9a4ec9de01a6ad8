// Recommendation Engine
// Catalog lookup, rule-based and classifier scoring, skill gaps, development plans.
// Pure and synchronous: no I/O happens here except artifact loading at startup.

pub mod catalog;
pub mod development_plan;
pub mod distribution;
pub mod engine;
pub mod handlers;
pub mod linear_model;
pub mod model_adapter;
pub mod rule_scorer;
pub mod skill_match;
