mod config;
mod errors;
mod models;
mod recommendation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::recommendation::engine::RecommendationEngine;
use crate::recommendation::linear_model::{
    candidate_paths, load_encoders, load_first, LinearClassifier, DEFAULT_ENCODER_PATHS,
    DEFAULT_MODEL_PATHS,
};
use crate::recommendation::model_adapter::{Classifier, ModelAdapter};
use crate::recommendation::rule_scorer::{Jitter, ProfileScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Recommendation API v{}", env!("CARGO_PKG_VERSION"));

    // Classifier artifacts are optional; without a model the engine scores rule-based.
    let model = load_first(
        &candidate_paths(config.model_path.as_deref(), DEFAULT_MODEL_PATHS),
        LinearClassifier::load,
    );
    let encoders = load_first(
        &candidate_paths(config.encoders_path.as_deref(), DEFAULT_ENCODER_PATHS),
        load_encoders,
    );
    let encoders_loaded = encoders.is_some();

    let adapter = match model {
        Some(model) => {
            info!("Classifier loaded ({} careers)", model.classes().len());
            Some(ModelAdapter::new(Arc::new(model), encoders.unwrap_or_default()))
        }
        None => {
            warn!("Model file not found. Using rule-based scoring.");
            None
        }
    };

    if let Jitter::Uniform { amplitude, seed } = config.jitter {
        info!("Rule-based scoring jitter: ±{amplitude} (seed: {seed:?})");
    }
    let engine = RecommendationEngine::new(ProfileScorer::new(config.jitter), adapter);

    let state = AppState {
        engine: Arc::new(engine),
        encoders_loaded,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
