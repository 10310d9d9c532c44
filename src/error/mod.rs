// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for msgcheck.
//!
//! Policy violations found in a commit message are not errors in this
//! sense: they are collected into a [`ValidationResult`](crate::rules::ValidationResult)
//! and reported together. The types here cover failures that stop a run
//! before any check has executed.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for msgcheck operations.
#[derive(Error, Debug)]
pub enum MsgCheckError {
    // Message retrieval errors
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Errors raised while fetching the pending commit message.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Failed to run {program}: {message}")]
    SpawnFailed { program: PathBuf, message: String },

    #[error("Failed to read message for {repository} ({transaction}): {message}")]
    Unavailable {
        repository: String,
        transaction: String,
        message: String,
    },
}

/// Result type alias for msgcheck operations.
pub type Result<T> = std::result::Result<T, MsgCheckError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MsgCheckError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
