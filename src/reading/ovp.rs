//! Anchor (highlight) letter for RSVP display.
//!
//! The anchor sits near the middle of the word and never further than the
//! fifth letter, so the reader's eye can stay on one column:
//! - 1 char word → position 0
//! - 2-3 char words → position 1 or 2
//! - 4-6 char words → position 2 or 3
//! - 7+ char words → position 4
//!
//! Half lengths ending in .5 round to the even neighbour, so 5 letters
//! anchor on the third letter while 7 letters anchor on the fifth.
//! Length counts user-perceived characters (grapheme clusters).

use unicode_segmentation::UnicodeSegmentation;

pub const MAX_HIGHLIGHT_INDEX: usize = 4;

pub fn highlight_index(word: &str) -> usize {
    let len = word.graphemes(true).count();
    let half = (len as f64 / 2.0).round_ties_even() as usize;
    half.min(MAX_HIGHLIGHT_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_single_char() {
        assert_eq!(highlight_index("I"), 0);
    }

    #[test]
    fn test_highlight_short_words() {
        assert_eq!(highlight_index("am"), 1);
        assert_eq!(highlight_index("the"), 2);
        assert_eq!(highlight_index("over"), 2);
        assert_eq!(highlight_index("quick"), 2);
        assert_eq!(highlight_index("worlds"), 3);
    }

    #[test]
    fn test_highlight_capped() {
        assert_eq!(highlight_index("running"), 4);
        assert_eq!(highlight_index("extraordinarily"), 4);
    }

    #[test]
    fn test_highlight_empty_string() {
        assert_eq!(highlight_index(""), 0);
    }

    #[test]
    fn test_highlight_counts_graphemes() {
        // "é" written as e + combining acute is one letter
        assert_eq!(highlight_index("cafe\u{301}"), 2);
    }

    #[test]
    fn test_highlight_always_inside_word() {
        for word in ["a", "ab", "abc", "abcd", "abcde", "abcdefghij"] {
            assert!(highlight_index(word) < word.len());
        }
    }
}
