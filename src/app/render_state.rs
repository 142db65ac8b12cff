use super::state::SessionState;
use crate::reading::{highlight_index, Document, ReadingPosition, WordTiming};
use std::fmt;

/// Position and speed summary shown on the top line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingStats {
    pub line: usize,
    pub total_lines: usize,
    pub word: usize,
    pub words_in_line: usize,
    pub wpm: u32,
}

impl fmt::Display for ReadingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading Stats:  Line: {:05}/{:05}  Word: {:02}/{:02}  WPM: {:04}",
            self.line, self.total_lines, self.word, self.words_in_line, self.wpm
        )
    }
}

/// Everything around the word that distraction-free mode hides
#[derive(Debug, Clone, PartialEq)]
pub struct ContextView<'a> {
    pub stats: ReadingStats,
    /// Words read so far and total words.
    pub progress: (usize, usize),
    pub previous: Option<&'a str>,
    pub current: &'a [String],
    pub active_word: usize,
    pub next: Option<&'a str>,
}

/// Render state for one flashed word
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState<'a> {
    pub word: &'a str,
    pub highlight: usize,
    pub position: ReadingPosition,
    pub wpm: u32,
    pub timing: WordTiming,
    pub context: Option<ContextView<'a>>,
}

impl<'a> RenderState<'a> {
    /// Builds the frame for the word under the session position, or `None`
    /// when the position has no word (blank line).
    pub fn build(document: &'a Document, state: &SessionState, timing: WordTiming) -> Option<Self> {
        let position = state.position;
        let word = document.word(position)?;

        let context = (!state.display.is_distraction_free()).then(|| {
            let current = document.line(position.line);
            ContextView {
                stats: ReadingStats {
                    line: position.line,
                    total_lines: document.len(),
                    word: position.word,
                    words_in_line: current.len(),
                    wpm: state.speed.wpm(),
                },
                progress: (document.words_before(position), document.word_count()),
                previous: position
                    .line
                    .checked_sub(1)
                    .and_then(|line| document.line_text(line)),
                current,
                active_word: position.word,
                next: document.line_text(position.line + 1),
            }
        });

        Some(Self {
            word,
            highlight: highlight_index(word),
            position,
            wpm: state.speed.wpm(),
            timing,
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mode::DisplayMode;
    use crate::engine::config::Config;

    fn doc() -> Document {
        Document::from_lines(["first line here", "the quick brown fox", "last"])
    }

    fn state_at(line: usize, word: usize) -> SessionState {
        let mut state = SessionState::new(line, &Config::default());
        state.position = ReadingPosition::new(line, word);
        state
    }

    #[test]
    fn test_stats_format() {
        let stats = ReadingStats {
            line: 12,
            total_lines: 345,
            word: 3,
            words_in_line: 11,
            wpm: 300,
        };
        assert_eq!(
            stats.to_string(),
            "Reading Stats:  Line: 00012/00345  Word: 03/11  WPM: 0300"
        );
    }

    #[test]
    fn test_build_with_context() {
        let doc = doc();
        let state = state_at(1, 2);
        let render = RenderState::build(&doc, &state, WordTiming::default()).unwrap();

        assert_eq!(render.word, "brown");
        assert_eq!(render.highlight, 2);
        let context = render.context.unwrap();
        assert_eq!(context.previous, Some("first line here"));
        assert_eq!(context.current, ["the", "quick", "brown", "fox"]);
        assert_eq!(context.active_word, 2);
        assert_eq!(context.next, Some("last"));
        assert_eq!(context.progress, (5, 8));
        assert_eq!(context.stats.words_in_line, 4);
    }

    #[test]
    fn test_build_edges_have_no_neighbours() {
        let doc = doc();
        let first = RenderState::build(&doc, &state_at(0, 0), WordTiming::default()).unwrap();
        assert_eq!(first.context.unwrap().previous, None);

        let last = RenderState::build(&doc, &state_at(2, 0), WordTiming::default()).unwrap();
        assert_eq!(last.context.unwrap().next, None);
    }

    #[test]
    fn test_build_distraction_free_hides_context() {
        let doc = doc();
        let mut state = state_at(1, 0);
        state.display = DisplayMode::DistractionFree;

        let render = RenderState::build(&doc, &state, WordTiming::default()).unwrap();
        assert_eq!(render.word, "the");
        assert!(render.context.is_none());
    }

    #[test]
    fn test_build_blank_line_is_none() {
        let doc = Document::from_lines(["a", ""]);
        assert!(RenderState::build(&doc, &state_at(1, 0), WordTiming::default()).is_none());
    }
}
