//! The reading loop: flash a word, wait, poll a key, apply it.
//!
//! The loop owns all mutable state in a [`SessionState`] and talks to the
//! terminal only through [`ReaderSurface`], so it runs the same against a
//! real terminal and against a scripted surface in tests.

use super::command::{interpret_with, POLL_TOGGLE_KEY};
use super::event::{EndReason, KeyInput, Operation, PromptReply, SessionEnd, WaitOutcome};
use super::mode::PollMode;
use super::render_state::RenderState;
use super::state::{SessionState, SpeedState};
use crate::engine::config::{Config, TimingConfig};
use crate::engine::error::{ReaderError, Result};
use crate::reading::{Document, SyllableEstimator, WordTiming};
use log::{debug, info};
use std::time::Duration;

/// Display and input collaborator of a reading session.
pub trait ReaderSurface {
    fn present(&mut self, frame: &RenderState<'_>) -> Result<()>;

    /// Sleeps for `duration`. Returns early only when interrupted; keys
    /// pressed meanwhile stay queued for the next poll.
    fn wait(&mut self, duration: Duration) -> Result<WaitOutcome>;

    /// `None` means no key was pending (non-blocking) or the blocking read
    /// was woken by something other than a key.
    fn poll_key(&mut self, mode: PollMode) -> Result<Option<KeyInput>>;

    fn prompt_speed(&mut self, prompt: &str) -> Result<PromptReply>;
}

enum Step {
    Advance,
    Stay,
    Interrupted,
    Quit,
}

pub struct Session<'a, S> {
    document: &'a Document,
    config: &'a TimingConfig,
    syllables: S,
    state: SessionState,
}

impl<'a, S: SyllableEstimator> Session<'a, S> {
    pub fn new(
        document: &'a Document,
        config: &'a Config,
        syllables: S,
        start_line: usize,
    ) -> Result<Self> {
        if !document.is_empty() && start_line >= document.len() {
            return Err(ReaderError::StartLineOutOfRange {
                line: start_line,
                total: document.len(),
            });
        }

        Ok(Self {
            document,
            config: &config.timing,
            syllables,
            state: SessionState::new(start_line, config),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs until the reader quits, abandons a speed re-prompt, or reaches
    /// the end of the document.
    pub fn run<R: ReaderSurface + ?Sized>(&mut self, surface: &mut R) -> Result<SessionEnd> {
        info!(
            "Session started at line {} of {} ({} wpm)",
            self.state.position.line,
            self.document.len(),
            self.state.speed.wpm()
        );

        loop {
            if self.document.word(self.state.position).is_none() {
                if !self.next_line() {
                    return Ok(self.finish(EndReason::Finished));
                }
                continue;
            }

            match self.step(surface)? {
                Step::Advance => {
                    if !self.next_word() {
                        return Ok(self.finish(EndReason::Finished));
                    }
                }
                Step::Stay => {}
                Step::Quit => return Ok(self.finish(EndReason::Quit)),
                Step::Interrupted => {
                    if !self.reprompt(surface)? {
                        return Ok(self.finish(EndReason::Abandoned));
                    }
                }
            }
        }
    }

    fn step<R: ReaderSurface + ?Sized>(&mut self, surface: &mut R) -> Result<Step> {
        let Some(word) = self.document.word(self.state.position) else {
            return Ok(Step::Advance);
        };
        let timing =
            WordTiming::compute(word, self.state.speed.wpm(), &self.syllables, self.config);
        let Some(frame) = RenderState::build(self.document, &self.state, timing) else {
            return Ok(Step::Advance);
        };

        surface.present(&frame)?;
        for phase in timing.phases() {
            if phase.is_zero() {
                continue;
            }
            if surface.wait(phase)? == WaitOutcome::Interrupted {
                return Ok(Step::Interrupted);
            }
        }

        if self.state.settle_pending {
            self.state.settle_pending = false;
            if surface.wait(self.config.settle_pause())? == WaitOutcome::Interrupted {
                return Ok(Step::Interrupted);
            }
        }

        let key = match surface.poll_key(self.state.poll)? {
            None => return Ok(Step::Advance),
            Some(KeyInput::Interrupt) => return Ok(Step::Interrupted),
            Some(KeyInput::Other) => {
                debug!("Ignoring non-character key");
                return Ok(Step::Stay);
            }
            Some(KeyInput::Char(POLL_TOGGLE_KEY)) => {
                self.state.poll = self.state.poll.toggled();
                debug!("Key poll is now {:?}", self.state.poll);
                return Ok(Step::Stay);
            }
            Some(KeyInput::Char(c)) => c,
        };

        let operation = match interpret_with(
            self.config,
            key,
            self.document,
            self.state.position,
            self.state.speed,
        ) {
            Ok(operation) => operation,
            Err(err) => {
                debug!("{}", err);
                return Ok(Step::Stay);
            }
        };

        match operation {
            Operation::Quit => Ok(Step::Quit),
            Operation::ModeToggled => {
                self.state.display = self.state.display.toggled();
                debug!("Display mode is now {:?}", self.state.display);
                Ok(Step::Stay)
            }
            Operation::PositionChanged(position) => {
                debug!("Jumped from {} to {}", self.state.position, position);
                self.state.position = position;
                self.state.settle_pending = true;
                Ok(Step::Stay)
            }
            Operation::SpeedChanged(speed) => {
                debug!("Speed {} -> {} wpm", self.state.speed.wpm(), speed.wpm());
                self.state.speed = speed;
                Ok(Step::Advance)
            }
        }
    }

    /// Asks for a new speed. `false` means the session should end.
    fn reprompt<R: ReaderSurface + ?Sized>(&mut self, surface: &mut R) -> Result<bool> {
        let prompt = format!("Current wpm: {} Enter new wpm: ", self.state.speed.wpm());
        info!("Interrupted at {}, prompting for speed", self.state.position);

        let speed = match surface.prompt_speed(&prompt)? {
            PromptReply::Entered(text) => parse_wpm(&text),
            PromptReply::Cancelled => None,
        };

        match speed {
            Some(speed) => {
                info!("Speed set to {} wpm", speed.wpm());
                self.state.speed = speed;
                self.state.poll = PollMode::NonBlocking;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn next_word(&mut self) -> bool {
        let position = self.state.position;
        if position.word + 1 < self.document.line_len(position.line) {
            self.state.position.word += 1;
            true
        } else {
            self.next_line()
        }
    }

    fn next_line(&mut self) -> bool {
        let line = self.state.position.line + 1;
        if line < self.document.len() {
            self.state.position.line = line;
            self.state.position.word = 0;
            true
        } else {
            false
        }
    }

    fn finish(&self, reason: EndReason) -> SessionEnd {
        // Reading off the end reports one past the last line.
        let line = match reason {
            EndReason::Finished => self.document.len(),
            EndReason::Quit | EndReason::Abandoned => self.state.position.line,
        };
        info!("Session ended at line {} ({:?})", line, reason);
        SessionEnd { line, reason }
    }
}

/// Parses a typed speed; anything that is not a whole number of at least
/// one word per minute is rejected.
pub fn parse_wpm(text: &str) -> Option<SpeedState> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|&wpm| wpm >= SpeedState::MIN_WPM)
        .map(SpeedState::new)
}
