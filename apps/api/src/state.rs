use std::sync::Arc;

use crate::recommendation::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; immutable afterwards.
    pub engine: Arc<RecommendationEngine>,
    /// Whether an encoders file was found, reported by /health independently of the model.
    pub encoders_loaded: bool,
}
