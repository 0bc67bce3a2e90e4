//! Error types for Vigil
//!
//! This module defines `VigilError`, the application-specific error enum.
//! Persistence operations return `anyhow::Result`; callers downcast to
//! `VigilError` when they need to tell invalid input apart from store
//! failures.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum VigilError {
    /// The caller supplied input that can never resolve, e.g. an empty
    /// namespace name. No I/O was attempted.
    #[error("caused: {0}")]
    IllegalArgument(String),

    /// The store failed while executing the named operation.
    #[error("database error in '{operation}': {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    #[error("namespace '{0}' not exist")]
    NamespaceNotExist(String),
}
