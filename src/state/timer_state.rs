//! Timer state structure and the work/break state machine

use std::{f64::consts::PI, fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Length of the work phase in seconds (20 minutes)
pub const WORK_SECONDS: u64 = 20 * 60;
/// Length of the break phase in seconds
pub const BREAK_SECONDS: u64 = 20;
/// Interval between two ticks of a running timer
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Radius of the progress ring drawn by front ends
pub const RING_RADIUS: f64 = 90.0;
/// Circumference of the progress ring
pub const RING_CIRCUMFERENCE: f64 = 2.0 * PI * RING_RADIUS;

/// The two alternating phases of the 20-20-20 rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Fixed duration of this phase in seconds
    pub fn duration_secs(self) -> u64 {
        match self {
            Phase::Work => WORK_SECONDS,
            Phase::Break => BREAK_SECONDS,
        }
    }

    /// The phase that follows this one
    pub fn next(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    /// Label shown next to the clock
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work Time",
            Phase::Break => "Look 20 feet away",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Work => write!(f, "work"),
            Phase::Break => write!(f, "break"),
        }
    }
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is paused, nothing changed
    Idle,
    /// One second was taken off the current phase
    Counted,
    /// The current phase expired and the given phase started
    PhaseChanged(Phase),
}

/// Countdown state of the eye-care timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub is_running: bool,
    pub phase: Phase,
}

impl TimerState {
    /// Create an idle timer at the start of a work phase
    pub fn new() -> Self {
        Self {
            remaining_seconds: WORK_SECONDS,
            is_running: false,
            phase: Phase::Work,
        }
    }

    /// Start or pause the countdown, keeping the remaining time
    pub fn toggle_run(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Stop the countdown and go back to a full work phase
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the countdown by one second.
    ///
    /// A phase expires on the tick that would take it from one second to
    /// zero, so the next phase starts at its full length straight away.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }

        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            return TickOutcome::Counted;
        }

        self.phase = self.phase.next();
        self.remaining_seconds = self.phase.duration_secs();
        TickOutcome::PhaseChanged(self.phase)
    }

    /// Check if the timer is in the break phase
    pub fn is_break(&self) -> bool {
        self.phase == Phase::Break
    }

    /// Full length of the current phase
    pub fn total_seconds(&self) -> u64 {
        self.phase.duration_secs()
    }

    /// Fraction of the current phase still left, from 1.0 down towards 0.0
    pub fn progress(&self) -> f64 {
        self.remaining_seconds as f64 / self.total_seconds() as f64
    }

    /// Dash offset of the progress ring for the current progress
    pub fn ring_offset(&self) -> f64 {
        RING_CIRCUMFERENCE * (1.0 - self.progress())
    }

    pub fn minutes(&self) -> u64 {
        self.remaining_seconds / 60
    }

    pub fn seconds(&self) -> u64 {
        self.remaining_seconds % 60
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds())
    }

    /// Short status line for the current state
    pub fn status_text(&self) -> &'static str {
        match (self.is_running, self.phase) {
            (false, _) => "Ready to start",
            (true, Phase::Work) => "Working...",
            (true, Phase::Break) => "Look away!",
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
