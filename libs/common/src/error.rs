//! Custom error types for the common library
//!
//! This module defines the failures the user registry can report. All of
//! them are detected before any state is touched, so a failed call never
//! leaves a partially applied change behind.

use thiserror::Error;

/// Custom error type for user registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// A required field was missing or blank
    #[error("{0}")]
    Validation(String),

    /// The email is already claimed by another user
    #[error("Email {0} is already in use")]
    DuplicateEmail(String),

    /// No user is stored under the requested id
    #[error("User with id = {0} not found")]
    NotFound(u64),
}

/// Type alias for Result with UserError
pub type UserResult<T> = Result<T, UserError>;
