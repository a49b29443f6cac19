//! twenty-twenty - 20-20-20 eye-care timer
//!
//! Starts the ticker, the HTTP control server and, on request, the
//! interactive terminal.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use twenty_twenty::{
    config::Config,
    services::{AudioCue, SilentCue, ToneCue},
    state::{AppState, BREAK_SECONDS, WORK_SECONDS},
    api::create_router,
    tasks::{terminal_task, ticker_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("twenty_twenty={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting twenty-twenty v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}s, break={}s, mute={}",
          config.host, config.port, WORK_SECONDS, BREAK_SECONDS, config.mute);

    let audio: Arc<dyn AudioCue> = if config.mute {
        Arc::new(SilentCue)
    } else {
        Arc::new(ToneCue)
    };

    let state = Arc::new(AppState::new(config.port, config.host.clone(), audio));

    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle - Start or pause the timer");
    info!("  POST /reset  - Stop and return to a full work phase");
    info!("  GET  /status - Current phase, remaining time and progress");
    info!("  GET  /health - Health check");

    let server = axum::serve(listener, app);

    let interactive = async {
        if config.keys {
            terminal_task(Arc::clone(&state)).await
        } else {
            std::future::pending().await
        }
    };

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = interactive => {
            if let Err(e) = result {
                tracing::error!("Terminal error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
