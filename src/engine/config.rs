// Configuration for the reader engine and UI components.
// Defaults suit English prose read at a moderate pace.

use crate::reading::timing::{CLAUSE_PAUSE_SECS, PERIOD_PAUSE_SECS, SYLLABLE_DIVISOR};
use std::time::Duration;

/// Pacing and navigation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Words per minute at session start (default 300)
    pub wpm: u32,

    /// Lowest reachable speed (default 1)
    pub min_wpm: u32,

    /// Speed change per `s`/`d` press (default 10)
    pub wpm_step: u32,

    /// Speed `d` restores when pressed at the floor (default 10)
    pub floor_reset_wpm: u32,

    /// Words skipped by `h`/`l` (default 5)
    pub short_jump: usize,

    /// Words skipped by `H`/`L` (default 20)
    pub long_jump: usize,

    /// Extra time for a word containing a period (default 0.2s)
    pub period_pause_secs: f64,

    /// Extra time for a word containing a clause mark (default 0.1s)
    pub clause_pause_secs: f64,

    /// Dead time after a jump before input is polled again (default 0.3s)
    pub settle_pause_secs: f64,

    /// Divisor of the squared syllable count in the word penalty (default 100)
    pub syllable_divisor: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 1,
            wpm_step: 10,
            floor_reset_wpm: 10,
            short_jump: 5,
            long_jump: 20,
            period_pause_secs: PERIOD_PAUSE_SECS,
            clause_pause_secs: CLAUSE_PAUSE_SECS,
            settle_pause_secs: 0.3,
            syllable_divisor: SYLLABLE_DIVISOR,
        }
    }
}

impl TimingConfig {
    pub fn settle_pause(&self) -> Duration {
        Duration::from_secs_f64(self.settle_pause_secs)
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayConfig {
    /// Start in distraction-free mode
    pub distraction_free: bool,
}

/// Master configuration combining all reader settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub timing: TimingConfig,
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_defaults() {
        let config = TimingConfig::default();
        assert_eq!(config.wpm, 300);
        assert_eq!(config.min_wpm, 1);
        assert_eq!(config.wpm_step, 10);
        assert_eq!(config.floor_reset_wpm, 10);
        assert_eq!(config.short_jump, 5);
        assert_eq!(config.long_jump, 20);
    }

    #[test]
    fn test_settle_pause_duration() {
        let config = TimingConfig::default();
        assert_eq!(config.settle_pause(), Duration::from_secs_f64(0.3));
    }

    #[test]
    fn test_display_default_shows_context() {
        assert!(!Config::default().display.distraction_free);
    }
}
