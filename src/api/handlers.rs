//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /toggle - Start or pause the countdown
pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle_run() {
        Ok(timer) => {
            info!("Toggle endpoint called - timer running: {}", timer.is_running);
            let message = if timer.is_running { "Timer started" } else { "Timer paused" };
            Ok(Json(ApiResponse::for_timer(message.to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to toggle timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Stop the countdown and restore a full work phase
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(timer) => {
            info!("Reset endpoint called - timer back to {}", timer.clock());
            Ok(Json(ApiResponse::for_timer("Timer reset".to_string(), &timer)))
        }
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the timer and session status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer: (&timer).into(),
        transitions: state.transition_count(),
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
