/// The check-then-save dialog
pub mod app;

pub use app::{CheckState, PromptApp, WINDOW_TITLE};
