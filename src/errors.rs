//! Unified application error type.
//! Every module (store, core, cli, config) returns AppError so that the
//! command boundary can decide what is a user message and what is fatal.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp on line {line}: '{text}' (expected YYYY-MM-DD HH:MM:SS, run `tstamp edit` to fix)")]
    Format { line: u64, text: String },

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Recoverable, reported at the command boundary
    // ---------------------------
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Editor
    // ---------------------------
    #[error("Editor error: {0}")]
    Editor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Missing series and rejected renames are answered with a message,
    /// not an error exit.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
