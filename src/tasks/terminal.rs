//! Interactive terminal session: keystrokes in, one status line out

use std::{
    io::{self, Write},
    sync::Arc,
};
use crossterm::{
    cursor,
    event::{Event, EventStream},
    execute,
    style::Print,
    terminal::{self, ClearType},
};
use futures::StreamExt;
use tracing::{error, info};

use crate::{
    input::{key_command, KeyCommand},
    state::{AppState, TimerState},
};

/// Keeps the terminal in raw mode for as long as it lives
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), Print("\r\n"), cursor::Show);
    }
}

/// Format the status line for a timer snapshot
pub fn status_line(timer: &TimerState) -> String {
    format!("{}  {}  {}", timer.status_text(), timer.clock(), timer.phase.label())
}

fn draw(out: &mut impl Write, timer: &TimerState) -> io::Result<()> {
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(status_line(timer)),
    )
}

/// Run the interactive session until the user quits or input ends
pub async fn terminal_task(state: Arc<AppState>) -> io::Result<()> {
    info!("Starting interactive terminal (space: start/pause, r: reset, q: quit)");

    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let mut events = EventStream::new();
    let mut updates = state.timer_update_tx.subscribe();
    draw(&mut stdout, &updates.borrow_and_update())?;

    loop {
        tokio::select! {
            event = events.next() => {
                let key = match event {
                    Some(Ok(Event::Key(key))) => key,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e),
                    None => break,
                };

                let result = match key_command(key) {
                    Some(KeyCommand::ToggleRun) => state.toggle_run(),
                    Some(KeyCommand::Reset) => state.reset(),
                    Some(KeyCommand::Quit) => break,
                    None => continue,
                };
                if let Err(e) = result {
                    error!("Failed to apply key command: {}", e);
                }
            }

            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let timer = updates.borrow_and_update().clone();
                draw(&mut stdout, &timer)?;
            }
        }
    }

    info!("Interactive terminal closed");
    Ok(())
}
