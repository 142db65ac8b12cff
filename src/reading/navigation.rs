//! Bounded word jumps across line boundaries.
//!
//! Both jumps are total: any count from any position yields a clamped
//! position whose line index is inside the document. Line crossing is a
//! loop over the line index, which moves one step toward a fixed bound
//! (the first or the last line) per iteration, so both always terminate.

use super::document::{Document, ReadingPosition};

/// Moves back `n` words, crossing into previous lines as needed.
///
/// Stops at the first word of the document instead of going past it.
pub fn jump_backward(n: usize, document: &Document, position: ReadingPosition) -> ReadingPosition {
    let mut line = position.line;
    let mut word = position.word;
    let mut remaining = n;

    loop {
        if word >= remaining {
            return ReadingPosition::new(line, word - remaining);
        }
        if line == 0 {
            return ReadingPosition::start();
        }
        remaining -= word;
        line -= 1;
        // One past the last word of the previous line
        word = document.line_len(line);
    }
}

/// Moves forward `n` words, crossing into following lines as needed.
///
/// Past the end the result is clamped to the last word of the document,
/// skipping trailing blank lines, and any overshoot is discarded.
pub fn jump_forward(n: usize, document: &Document, position: ReadingPosition) -> ReadingPosition {
    let mut line = position.line;
    let mut target = position.word.saturating_add(n);

    loop {
        let len = document.line_len(line);
        if target < len {
            return ReadingPosition::new(line, target);
        }
        if line + 1 >= document.len() {
            // A document without words has nowhere better to land
            return document
                .last_word()
                .unwrap_or_else(|| ReadingPosition::line_start(line));
        }
        target -= len;
        line += 1;
    }
}
