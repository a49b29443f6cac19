//! External side effects module
//!
//! This module contains the audio cue capability and its rodio backend.

pub mod audio;
pub mod tone;

// Re-export main types
pub use audio::{AudioCue, AudioCueError, SilentCue};
pub use tone::ToneCue;
