use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("theme \"{name}\" not found")]
    NotFound { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale \"{code}\"")]
    Unsupported { code: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color \"{input}\"")]
pub struct ParseColorError {
    pub input: String,
}

/// Failure raised by a command action. Caught at the dispatch boundary and
/// turned into a text result; it never leaves the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preferences i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences format: {0}")]
    Json(#[from] serde_json::Error),
}
