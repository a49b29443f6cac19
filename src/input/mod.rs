//! Keyboard input module
//!
//! This module maps terminal keystrokes to timer operations.

pub mod keys;

// Re-export main types
pub use keys::{key_command, KeyCommand};
