pub mod command;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod session;
pub mod state;

pub use command::{interpret, interpret_with, Command};
pub use event::{EndReason, KeyInput, Operation, PromptReply, SessionEnd, WaitOutcome};
pub use mode::{DisplayMode, PollMode};
pub use render_state::{ContextView, ReadingStats, RenderState};
pub use session::{ReaderSurface, Session};
pub use state::{SessionState, SpeedState};
