//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Phase, TimerState};

/// Timer snapshot with the derived values front ends draw from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub remaining_seconds: u64,
    pub is_running: bool,
    pub is_break: bool,
    pub phase: Phase,
    pub total_seconds: u64,
    pub progress: f64,
    pub ring_offset: f64,
    pub clock: String,
    pub status_text: String,
    pub phase_label: String,
}

impl From<&TimerState> for TimerView {
    fn from(timer: &TimerState) -> Self {
        Self {
            remaining_seconds: timer.remaining_seconds,
            is_running: timer.is_running,
            is_break: timer.is_break(),
            phase: timer.phase,
            total_seconds: timer.total_seconds(),
            progress: timer.progress(),
            ring_offset: timer.ring_offset(),
            clock: timer.clock(),
            status_text: timer.status_text().to_string(),
            phase_label: timer.phase.label().to_string(),
        }
    }
}

/// API response structure for state change endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: &TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer: timer.into(),
        }
    }

    /// Create a response whose status follows the running flag
    pub fn for_timer(message: String, timer: &TimerState) -> Self {
        let status = if timer.is_running { "running" } else { "paused" };
        Self::new(status.to_string(), message, timer)
    }
}

/// Status response with session information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub transitions: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
