use std::fmt;

/// Reader coordinate: a line of the document and a word within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReadingPosition {
    pub line: usize,
    pub word: usize,
}

impl ReadingPosition {
    pub fn new(line: usize, word: usize) -> Self {
        Self { line, word }
    }

    /// First word of the first line.
    pub fn start() -> Self {
        Self::default()
    }

    pub fn line_start(line: usize) -> Self {
        Self { line, word: 0 }
    }
}

impl fmt::Display for ReadingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.word)
    }
}

/// Immutable text split into lines, each line split into words.
///
/// The raw line text is kept alongside the words so the context view can
/// show the line exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    words: Vec<String>,
}

impl Line {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl Document {
    /// Splits text into lines, then each line on whitespace.
    /// Blank lines are kept and hold zero words.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(Line::new).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|l| Line::new(l.as_ref())).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Words of a line; empty for blank lines and out-of-range indices.
    pub fn line(&self, index: usize) -> &[String] {
        self.lines
            .get(index)
            .map(|l| l.words.as_slice())
            .unwrap_or(&[])
    }

    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).len()
    }

    pub fn line_text(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.text.as_str())
    }

    pub fn word(&self, position: ReadingPosition) -> Option<&str> {
        self.line(position.line)
            .get(position.word)
            .map(String::as_str)
    }

    pub fn last_line(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Position of the last word, skipping trailing blank lines.
    pub fn last_word(&self) -> Option<ReadingPosition> {
        let last = self.last_line()?;
        (0..=last)
            .rev()
            .find(|&line| self.line_len(line) > 0)
            .map(|line| ReadingPosition::new(line, self.line_len(line) - 1))
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Words that come before `position` in reading order.
    pub fn words_before(&self, position: ReadingPosition) -> usize {
        let earlier: usize = self
            .lines
            .iter()
            .take(position.line)
            .map(|l| l.words.len())
            .sum();
        earlier + position.word.min(self.line_len(position.line))
    }
}
