//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "twenty-twenty")]
#[command(about = "A 20-20-20 eye-care timer: 20 minutes of work, 20 seconds looking away")]
#[command(version)]
pub struct Config {
    /// Port to bind the control server to
    #[arg(short, long, default_value = "20020")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not play the transition cue
    #[arg(short, long)]
    pub mute: bool,

    /// Control the timer from this terminal (space: start/pause, r: reset, q: quit)
    #[arg(short, long)]
    pub keys: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the log level for the flags given.
    ///
    /// The interactive terminal keeps quiet unless asked otherwise, since
    /// log lines would overwrite the status line.
    pub fn log_level(&self) -> &'static str {
        match (self.verbose, self.keys) {
            (true, _) => "debug",
            (false, true) => "warn",
            (false, false) => "info",
        }
    }
}
