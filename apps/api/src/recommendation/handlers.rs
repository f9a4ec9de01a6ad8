//! Axum route handlers for the Recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::recommendation::engine::RecommendationResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictCareerRequest {
    pub user_profile: UserProfile,
}

/// POST /predict-career
///
/// Ranks catalog careers for the submitted profile and returns the top three
/// with skill gaps and development plans.
pub async fn handle_predict_career(
    State(state): State<AppState>,
    payload: Result<Json<PredictCareerRequest>, JsonRejection>,
) -> Result<Json<RecommendationResult>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("Invalid input data: {}", e.body_text())))?;
    let profile = request.user_profile;

    info!(
        "Processing career prediction for user with {} technical skills, {} interests, education in {}",
        profile.technical_skills.len(),
        profile.interests.len(),
        profile.field_of_study
    );

    let result = state.engine.recommend(&profile)?;

    if let Some(top) = result.matches.first() {
        info!(
            "Career prediction complete ({}). Top recommendation: {} with confidence {:.2} ({})",
            result.source.label(),
            result.recommended_career,
            result.confidence_score,
            top.match_level.label()
        );
    }

    Ok(Json(result))
}
