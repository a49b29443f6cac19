//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP server.

pub mod terminal;
pub mod ticker;

// Re-export main functions
pub use terminal::terminal_task;
pub use ticker::ticker_task;
