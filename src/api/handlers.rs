//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, TimeFields, TimerStatus};
use super::{
    requests::TimeInput,
    responses::{ApiResponse, HealthResponse, PresetsResponse, StatusResponse},
};

/// Turn the outcome of a user action into a JSON response
fn action_response(
    action: &str,
    result: Result<TimerStatus, String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(timer) => {
            info!("{} endpoint called - timer now {}", action, timer.phase);
            let message = format!("{} handled, timer {}", action, timer.phase);
            Ok(Json(ApiResponse::ok(message, timer)))
        }
        Err(e) => {
            error!("Failed to handle {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start from the fields (optionally replaced by the body) or resume
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<TimeInput>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    if let Some(Json(input)) = body {
        if let Err(e) = state.set_fields(TimeFields::from(input)) {
            error!("Failed to set time fields: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
    action_response("start", state.start())
}

/// Handle POST /pause - Pause a running countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    action_response("pause", state.pause())
}

/// Handle POST /reset - Zero the timer from any phase
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    action_response("reset", state.reset())
}

/// Handle POST /stop-alarm - Silence a ringing alarm
pub async fn stop_alarm_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    action_response("stop-alarm", state.stop_alarm())
}

/// Handle PUT /time - Edit the hours/minutes/seconds fields
pub async fn set_time_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TimeInput>,
) -> Result<Json<ApiResponse>, StatusCode> {
    action_response("set-time", state.set_fields(TimeFields::from(input)))
}

/// Handle GET /presets - List the configured presets
pub async fn presets_handler(State(state): State<Arc<AppState>>) -> Json<PresetsResponse> {
    Json(PresetsResponse {
        presets: state.presets.clone(),
    })
}

/// Handle POST /presets/:label - Load a preset without starting it
pub async fn preset_handler(
    State(state): State<Arc<AppState>>,
    Path(label): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.select_preset(&label) {
        Ok(Some(timer)) => action_response("preset", Ok(timer)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => action_response("preset", Err(e)),
    }
}

/// Handle POST /sound/toggle - Flip the alarm sound on or off
pub async fn toggle_sound_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    action_response("toggle-sound", state.toggle_sound())
}

/// Handle POST /theme/toggle - Switch between light and dark themes
pub async fn toggle_theme_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    action_response("toggle-theme", state.toggle_theme())
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.status() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer status: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
