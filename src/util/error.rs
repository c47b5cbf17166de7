//! Unified error types for Spotlight.
//!
//! All fallible operations throughout the codebase return `Result<T, SpotlightError>`.
//! User-facing validation failures are variants too, so the panel can turn
//! them into notices through the same path it logs everything else.

use std::fmt;

/// The user action a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Adding computers from the source list to the spotlight.
    Add,
    /// Removing computers from the spotlight.
    Remove,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => f.write_str("add"),
            Action::Remove => f.write_str("remove"),
        }
    }
}

/// Unified error type used throughout Spotlight.
#[derive(Debug, thiserror::Error)]
pub enum SpotlightError {
    /// The user triggered an action without selecting any computer.
    #[error("Please select at least one computer to {0}.")]
    EmptySelection(Action),

    /// The user configuration file could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The computer list file contained invalid entries.
    #[error("Computer list error: {0}")]
    ComputerList(String),

    /// JSON (de)serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for I/O errors (file reads and writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpotlightError {
    /// `true` for errors caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, SpotlightError::EmptySelection(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpotlightError>;
