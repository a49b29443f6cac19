//! State management module
//!
//! This module contains the timer state machine and the session controller
//! that owns it.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, RunControl};
pub use timer_state::{
    Phase, TickOutcome, TimerState, BREAK_SECONDS, RING_CIRCUMFERENCE, RING_RADIUS, TICK_PERIOD,
    WORK_SECONDS,
};
