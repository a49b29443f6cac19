//! Audio cue capability used to mark phase transitions

use std::io;

use thiserror::Error;

/// Errors that can occur while playing a transition cue
#[derive(Error, Debug)]
pub enum AudioCueError {
    /// The playback thread could not be started
    #[error("Failed to spawn playback thread: {0}")]
    Spawn(#[from] io::Error),

    /// No usable audio output device
    #[error("Audio device not available: {0}")]
    Device(#[from] rodio::StreamError),

    /// The output device refused the tones
    #[error("Playback failed: {0}")]
    Playback(#[from] rodio::PlayError),
}

/// Something that can audibly mark a work/break transition.
///
/// Playback is best-effort. Callers log errors and carry on.
pub trait AudioCue: Send + Sync {
    /// Fire the two-tone transition cue without blocking the caller
    fn play_transition_cue(&self) -> Result<(), AudioCueError>;
}

/// Cue that makes no sound
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play_transition_cue(&self) -> Result<(), AudioCueError> {
        tracing::debug!("Transition cue muted");
        Ok(())
    }
}
