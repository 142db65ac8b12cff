// Reader screen: the flashed word and its surroundings
pub mod view;

pub use view::{draw_reader, render_progress_bar, render_word_display};
