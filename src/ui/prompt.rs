//! Single-line speed entry shown at the bottom of the screen
//!
//! Enter submits, Escape or Ctrl-C cancels, Backspace deletes the last
//! character. Long entries scroll so the tail stays visible.

use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Editing,
    Submitted(String),
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct SpeedPrompt {
    entry: String,
}

impl SpeedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptStep::Cancelled
            }
            KeyCode::Esc => PromptStep::Cancelled,
            KeyCode::Enter => PromptStep::Submitted(std::mem::take(&mut self.entry)),
            KeyCode::Backspace => {
                self.entry.pop();
                PromptStep::Editing
            }
            KeyCode::Char(c) => {
                self.entry.push(c);
                PromptStep::Editing
            }
            _ => PromptStep::Editing,
        }
    }
}

/// Visible part of the entry: all of it when it fits after the prompt,
/// otherwise `...` followed by as much of the tail as fits.
pub fn fit_entry(prompt: &str, entry: &str, width: u16) -> String {
    let available = (width as usize).saturating_sub(prompt.width());
    if entry.width() < available {
        return entry.to_string();
    }

    let budget = available.saturating_sub(ELLIPSIS.width() + 1);
    let mut used = 0;
    let mut tail: Vec<&str> = Vec::new();
    for grapheme in entry.graphemes(true).rev() {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        used += w;
        tail.push(grapheme);
    }
    tail.reverse();
    format!("{}{}", ELLIPSIS, tail.concat())
}

pub fn draw_prompt(frame: &mut Frame, prompt: &str, entry: &str, theme: &Theme) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let shown = fit_entry(prompt, entry, area.width);
    let cursor_x = (prompt.width() + shown.width()).min(area.width as usize - 1) as u16;

    let line = Line::from(vec![
        Span::styled(prompt.to_string(), theme.prompt()),
        Span::styled(shown, theme.base()),
    ]);
    frame.render_widget(line, row);
    frame.set_cursor_position((row.x + cursor_x, row.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(prompt: &mut SpeedPrompt, text: &str) {
        for c in text.chars() {
            assert_eq!(prompt.handle_key(press(KeyCode::Char(c))), PromptStep::Editing);
        }
    }

    #[test]
    fn test_enter_submits_entry() {
        let mut prompt = SpeedPrompt::new();
        type_text(&mut prompt, "450");
        assert_eq!(
            prompt.handle_key(press(KeyCode::Enter)),
            PromptStep::Submitted("450".to_string())
        );
    }

    #[test]
    fn test_backspace_edits() {
        let mut prompt = SpeedPrompt::new();
        type_text(&mut prompt, "459");
        prompt.handle_key(press(KeyCode::Backspace));
        type_text(&mut prompt, "0");
        assert_eq!(prompt.entry(), "450");
    }

    #[test]
    fn test_backspace_on_empty_entry() {
        let mut prompt = SpeedPrompt::new();
        assert_eq!(prompt.handle_key(press(KeyCode::Backspace)), PromptStep::Editing);
        assert_eq!(prompt.entry(), "");
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = SpeedPrompt::new();
        type_text(&mut prompt, "12");
        assert_eq!(prompt.handle_key(press(KeyCode::Esc)), PromptStep::Cancelled);
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let mut prompt = SpeedPrompt::new();
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert_eq!(prompt.handle_key(key), PromptStep::Cancelled);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut prompt = SpeedPrompt::new();
        assert_eq!(prompt.handle_key(press(KeyCode::Left)), PromptStep::Editing);
        assert_eq!(prompt.entry(), "");
    }

    #[test]
    fn test_fit_entry_short() {
        assert_eq!(fit_entry("wpm: ", "300", 40), "300");
    }

    #[test]
    fn test_fit_entry_scrolls_long_entry() {
        let shown = fit_entry("wpm: ", "1234567890", 12);
        // 7 cells after the prompt: "..." plus the last 3 characters
        assert_eq!(shown, "...890");
    }
}
