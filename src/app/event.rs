use super::state::SpeedState;
use crate::reading::ReadingPosition;

/// Result of interpreting one reading key
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Quit,
    PositionChanged(ReadingPosition),
    SpeedChanged(SpeedState),
    ModeToggled,
}

/// Key event as delivered by the input adapter
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyInput {
    Char(char),
    /// A key with no character, such as an arrow or function key.
    Other,
    /// Ctrl-C; routes to the speed re-prompt.
    Interrupt,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WaitOutcome {
    Elapsed,
    Interrupted,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PromptReply {
    Entered(String),
    /// Escape, or an interrupt while the prompt was open.
    Cancelled,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EndReason {
    Quit,
    /// The speed re-prompt was cancelled or got an unusable answer.
    Abandoned,
    Finished,
}

/// Where and why a session stopped
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SessionEnd {
    pub line: usize,
    pub reason: EndReason,
}
