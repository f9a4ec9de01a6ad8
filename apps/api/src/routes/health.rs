use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner with model status.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Career Recommendation API",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
        "model_loaded": state.engine.model_loaded()
    }))
}

/// GET /health
/// Reports whether the classifier and its encoders were loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "model_loaded": state.engine.model_loaded(),
        "encoders_loaded": state.encoders_loaded
    }))
}
