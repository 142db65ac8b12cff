use crate::app::event::{KeyInput, PromptReply, WaitOutcome};
use crate::app::mode::PollMode;
use crate::app::render_state::RenderState;
use crate::app::session::ReaderSurface;
use crate::engine::error::Result;
use crate::ui::prompt::{draw_prompt, PromptStep, SpeedPrompt};
use crate::ui::reader::view::draw_reader;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Terminal implementation of the reading surface.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    // Keys that arrived during a pacing wait, replayed by the next polls
    pending: VecDeque<KeyInput>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme: Theme::default(),
            pending: VecDeque::new(),
            _guard: guard,
        })
    }

    fn read_key(&mut self) -> Result<Option<KeyInput>> {
        Ok(translate_event(event::read()?))
    }
}

/// Maps a terminal event to reader input; non-key events and key releases
/// map to `None`.
pub fn translate_event(event: Event) -> Option<KeyInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(translate_key(key)),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> KeyInput {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Interrupt,
        KeyCode::Char(c) => KeyInput::Char(c),
        _ => KeyInput::Other,
    }
}

impl ReaderSurface for TuiManager {
    fn present(&mut self, frame: &RenderState<'_>) -> Result<()> {
        let theme = self.theme;
        self.terminal.draw(|f| draw_reader(f, frame, &theme))?;
        Ok(())
    }

    fn wait(&mut self, duration: Duration) -> Result<WaitOutcome> {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(WaitOutcome::Elapsed);
            }
            if !event::poll(remaining)? {
                continue;
            }
            match self.read_key()? {
                Some(KeyInput::Interrupt) => return Ok(WaitOutcome::Interrupted),
                Some(key) => self.pending.push_back(key),
                None => {}
            }
        }
    }

    fn poll_key(&mut self, mode: PollMode) -> Result<Option<KeyInput>> {
        if let Some(key) = self.pending.pop_front() {
            return Ok(Some(key));
        }
        match mode {
            PollMode::NonBlocking => {
                if event::poll(Duration::ZERO)? {
                    self.read_key()
                } else {
                    Ok(None)
                }
            }
            PollMode::Blocking => loop {
                if let Some(key) = self.read_key()? {
                    return Ok(Some(key));
                }
            },
        }
    }

    fn prompt_speed(&mut self, prompt: &str) -> Result<PromptReply> {
        if !self.pending.is_empty() {
            debug!("Dropping {} queued keys for the speed prompt", self.pending.len());
            self.pending.clear();
        }

        let theme = self.theme;
        let mut entry = SpeedPrompt::new();
        loop {
            self.terminal
                .draw(|f| draw_prompt(f, prompt, entry.entry(), &theme))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match entry.handle_key(key) {
                PromptStep::Editing => {}
                PromptStep::Submitted(text) => return Ok(PromptReply::Entered(text)),
                PromptStep::Cancelled => return Ok(PromptReply::Cancelled),
            }
        }
    }
}
