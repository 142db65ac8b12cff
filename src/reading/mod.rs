pub mod document;
pub mod navigation;
pub mod ovp;
pub mod syllables;
pub mod timing;

pub use document::{Document, ReadingPosition};
pub use navigation::{jump_backward, jump_forward};
pub use ovp::highlight_index;
pub use syllables::{HeuristicSyllables, SyllableEstimator};
pub use timing::{punctuation_pause_seconds, word_display_seconds, words_per_second, WordTiming};
