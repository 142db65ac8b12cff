//! rsvp-reader - rapid serial visual presentation in the terminal
//!
//! Flashes a text one word at a time at a controlled pace. The reading
//! engine (`reading`, `app`) is independent of the terminal; `ui` adapts
//! it to crossterm and ratatui.

pub mod app;
pub mod engine;
pub mod reading;
pub mod ui;

pub use engine::{ReaderError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "rsvp-reader";
