pub mod config;
pub mod error;

pub use config::{Config, DisplayConfig, TimingConfig};
pub use error::{load_file_safe, InputError, ReaderError, Result};
