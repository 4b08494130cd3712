use thiserror::Error;

/// Errors surfaced by the prompt. Every variant renders as a short status
/// line in the dialog; nothing propagates past the UI boundary.
#[derive(Debug, Error, Clone)]
pub enum PromptError {
    #[error("Missing OWM_API_KEY")]
    MissingApiKey,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Enter a ZIP or city")]
    EmptyQuery,

    #[error("No result")]
    NoResult,

    #[error("Request error: {0}")]
    Transport(String),

    #[error("File error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for PromptError {
    fn from(err: reqwest::Error) -> Self {
        PromptError::Transport(err.to_string())
    }
}
