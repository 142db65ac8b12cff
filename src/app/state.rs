use super::mode::{DisplayMode, PollMode};
use crate::engine::config::Config;
use crate::reading::ReadingPosition;

/// Reading speed in words per minute, never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedState {
    wpm: u32,
}

impl SpeedState {
    pub const MIN_WPM: u32 = 1;

    pub fn new(wpm: u32) -> Self {
        Self {
            wpm: wpm.max(Self::MIN_WPM),
        }
    }

    pub fn wpm(self) -> u32 {
        self.wpm
    }

    pub fn slower(self, step: u32, floor: u32) -> Self {
        Self::new(self.wpm.saturating_sub(step).max(floor))
    }

    /// Steps up by `step`. From the floor it jumps to `reset` instead, so
    /// 1 goes to 10 rather than 11 with the defaults. A `reset` at or below
    /// the floor falls back to one step above it.
    pub fn faster(self, step: u32, floor: u32, reset: u32) -> Self {
        if self.wpm > floor {
            Self::new(self.wpm.saturating_add(step))
        } else if reset > floor {
            Self::new(reset)
        } else {
            Self::new(floor.saturating_add(step.max(1)))
        }
    }
}

/// Everything the session loop mutates, threaded through by value.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub position: ReadingPosition,
    pub speed: SpeedState,
    pub display: DisplayMode,
    pub poll: PollMode,
    /// A jump happened; hold still briefly before the next poll.
    pub settle_pending: bool,
}

impl SessionState {
    pub fn new(start_line: usize, config: &Config) -> Self {
        Self {
            position: ReadingPosition::line_start(start_line),
            speed: SpeedState::new(config.timing.wpm),
            display: DisplayMode::from_flag(config.display.distraction_free),
            poll: PollMode::default(),
            settle_pending: false,
        }
    }
}
