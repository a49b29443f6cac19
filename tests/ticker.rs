use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::time::sleep;
use twenty_twenty::{
    services::{AudioCue, AudioCueError},
    state::{AppState, Phase, TimerState, BREAK_SECONDS, WORK_SECONDS},
    tasks::ticker_task,
};

#[derive(Default)]
struct CountingCue(AtomicUsize);

impl AudioCue for CountingCue {
    fn play_transition_cue(&self) -> Result<(), AudioCueError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn start_session() -> (Arc<AppState>, Arc<CountingCue>) {
    let cue = Arc::new(CountingCue::default());
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), cue.clone()));
    tokio::spawn(ticker_task(Arc::clone(&state)));
    (state, cue)
}

fn secs(seconds: f64) -> Duration {
    Duration::from_secs_f64(seconds)
}

fn remaining(state: &AppState) -> u64 {
    state.get_timer_state().unwrap().remaining_seconds
}

#[tokio::test(start_paused = true)]
async fn runs_a_full_work_and_break_cycle() {
    let (state, cue) = start_session();
    state.toggle_run().unwrap();

    sleep(secs(WORK_SECONDS as f64 + 0.5)).await;
    assert_eq!(
        state.get_timer_state().unwrap(),
        TimerState { remaining_seconds: BREAK_SECONDS, is_running: true, phase: Phase::Break }
    );
    assert_eq!(cue.0.load(Ordering::SeqCst), 1);

    sleep(secs(BREAK_SECONDS as f64)).await;
    assert_eq!(
        state.get_timer_state().unwrap(),
        TimerState { remaining_seconds: WORK_SECONDS, is_running: true, phase: Phase::Work }
    );
    assert_eq!(cue.0.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn idle_timer_does_not_tick() {
    let (state, cue) = start_session();
    sleep(secs(3600.0)).await;
    assert_eq!(state.get_timer_state().unwrap(), TimerState::new());
    assert_eq!(cue.0.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn pause_stops_ticks_and_resume_keeps_progress() {
    let (state, _cue) = start_session();
    state.toggle_run().unwrap();
    sleep(secs(5.5)).await;
    assert_eq!(remaining(&state), WORK_SECONDS - 5);

    state.toggle_run().unwrap();
    sleep(secs(100.0)).await;
    assert_eq!(remaining(&state), WORK_SECONDS - 5);

    state.toggle_run().unwrap();
    sleep(secs(0.5)).await;
    assert_eq!(remaining(&state), WORK_SECONDS - 5);
    sleep(secs(1.0)).await;
    assert_eq!(remaining(&state), WORK_SECONDS - 6);
}

#[tokio::test(start_paused = true)]
async fn rapid_toggles_keep_one_tick_per_second() {
    let (state, _cue) = start_session();
    for _ in 0..5 {
        state.toggle_run().unwrap();
        tokio::task::yield_now().await;
    }
    assert!(state.get_timer_state().unwrap().is_running);

    sleep(secs(10.5)).await;
    assert_eq!(remaining(&state), WORK_SECONDS - 10);
}

#[tokio::test(start_paused = true)]
async fn reset_cancels_pending_ticks() {
    let (state, cue) = start_session();
    state.toggle_run().unwrap();
    sleep(secs(3.5)).await;
    assert_eq!(remaining(&state), WORK_SECONDS - 3);

    state.reset().unwrap();
    sleep(secs(60.0)).await;
    assert_eq!(state.get_timer_state().unwrap(), TimerState::new());
    assert_eq!(cue.0.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn resume_on_a_tick_boundary_drops_the_old_interval() {
    let (state, _cue) = start_session();
    state.toggle_run().unwrap();

    for _ in 0..20 {
        // Wake up exactly when the running interval is due
        sleep(secs(1.0)).await;
        state.toggle_run().unwrap();
        state.toggle_run().unwrap();
        let resumed_at = remaining(&state);

        sleep(secs(0.5)).await;
        assert_eq!(remaining(&state), resumed_at);
        sleep(secs(0.5)).await;
    }
}
