/// Error types
pub mod errors;

/// Logging setup
pub mod logging;

pub use errors::PromptError;
pub use logging::init_logger;
