//! Session controller owning the timer and its side effects

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, trace, warn};

use crate::services::AudioCue;
use super::{TickOutcome, TimerState};

/// What the ticker task needs to know to own the one-second interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunControl {
    /// Whether the countdown should currently be ticking
    pub running: bool,
    /// Bumped by every user operation so pending ticks get cancelled
    pub epoch: u64,
}

/// Session state shared between the ticker, the HTTP API and the terminal
pub struct AppState {
    /// The single timer of this session
    pub timer_state: Mutex<TimerState>,
    /// Injected cue played on every phase transition
    pub audio: Arc<dyn AudioCue>,
    /// Number of phase transitions (and cue attempts) so far
    pub transitions: AtomicU64,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel driving the ticker task
    pub control_tx: watch::Sender<RunControl>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receivers alive to prevent channel closure
    pub _control_rx: watch::Receiver<RunControl>,
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a session with an idle timer at the start of a work phase
    pub fn new(port: u16, host: String, audio: Arc<dyn AudioCue>) -> Self {
        let (control_tx, control_rx) = watch::channel(RunControl { running: false, epoch: 0 });
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerState::new());

        Self {
            timer_state: Mutex::new(TimerState::new()),
            audio,
            transitions: AtomicU64::new(0),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            control_tx,
            timer_update_tx,
            _control_rx: control_rx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Apply a user operation, then notify the ticker and watchers
    fn apply_user_action<F>(&self, action: &str, updater: F) -> Result<TimerState, String>
    where
        F: FnOnce(&mut TimerState),
    {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        updater(&mut timer);
        let new_state = timer.clone();

        // Still under the lock, so a racing tick sees the new control value
        // only together with the new timer state.
        self.control_tx.send_modify(|control| {
            control.running = new_state.is_running;
            control.epoch = control.epoch.wrapping_add(1);
        });
        drop(timer);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.publish(new_state.clone());
        Ok(new_state)
    }

    /// Start or pause the countdown
    pub fn toggle_run(&self) -> Result<TimerState, String> {
        let new_state = self.apply_user_action("toggle", TimerState::toggle_run)?;
        info!(
            "Timer {} with {} left in {} phase",
            if new_state.is_running { "started" } else { "paused" },
            new_state.clock(),
            new_state.phase,
        );
        Ok(new_state)
    }

    /// Stop the countdown and return to a full work phase
    pub fn reset(&self) -> Result<TimerState, String> {
        let new_state = self.apply_user_action("reset", TimerState::reset)?;
        info!("Timer reset to {}", new_state.clock());
        Ok(new_state)
    }

    /// Advance the timer by one second, playing the cue on a phase change
    pub fn tick(&self) -> Result<TickOutcome, String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let outcome = timer.tick();
        let new_state = timer.clone();
        drop(timer);

        match outcome {
            TickOutcome::Idle => return Ok(outcome),
            TickOutcome::Counted => trace!("Tick: {} left", new_state.clock()),
            TickOutcome::PhaseChanged(phase) => {
                info!("Entering {} phase for {}s", phase, new_state.remaining_seconds);
                self.play_cue();
            }
        }

        self.publish(new_state);
        Ok(outcome)
    }

    /// Fire the transition cue, never letting a failure reach the timer
    fn play_cue(&self) {
        self.transitions.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = self.audio.play_transition_cue() {
            warn!("Audio not supported: {}", e);
        }
    }

    fn publish(&self, new_state: TimerState) {
        if let Err(e) = self.timer_update_tx.send(new_state) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Number of phase transitions so far
    pub fn transition_count(&self) -> u64 {
        self.transitions.load(Ordering::Relaxed)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
