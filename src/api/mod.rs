//! HTTP API module
//!
//! Each user control of the timer is one endpoint; all of them answer
//! with the resulting timer status.

pub mod handlers;
pub mod requests;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/reset", post(reset_handler))
        .route("/stop-alarm", post(stop_alarm_handler))
        .route("/time", put(set_time_handler))
        .route("/presets", get(presets_handler))
        .route("/presets/:label", post(preset_handler))
        .route("/sound/toggle", post(toggle_sound_handler))
        .route("/theme/toggle", post(toggle_theme_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
