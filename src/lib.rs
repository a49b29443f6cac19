//! twenty-twenty - a 20-20-20 eye-care timer
//!
//! Alternates a 20 minute work phase with a 20 second break, playing a
//! two-tone cue at every transition. The timer is driven by a background
//! ticker and controlled over HTTP or from the terminal.

pub mod api;
pub mod config;
pub mod input;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use services::{AudioCue, SilentCue, ToneCue};
pub use state::{AppState, Phase, TimerState, BREAK_SECONDS, WORK_SECONDS};
pub use utils::signals::shutdown_signal;
