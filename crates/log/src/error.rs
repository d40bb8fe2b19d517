//! Logging errors

use thiserror::Error;

/// Failures while installing the global subscriber
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The level directive string did not parse as an `EnvFilter`
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed
    #[error("Logger initialization failed: {0}")]
    Init(String),
}

impl LogError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Filter(_) => "LOG_FILTER",
            Self::Init(_) => "LOG_INIT",
        }
    }
}

/// Result alias for logging setup
pub type LogResult<T> = Result<T, LogError>;
