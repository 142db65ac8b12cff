pub mod prompt;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use reader::view::{draw_reader, render_progress_bar, render_word_display};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
