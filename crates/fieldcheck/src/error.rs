//! Hard-failure types for the validation contract.
//!
//! A [`ValidationError`] means the validator could not produce an answer at
//! all. Ordinary "input does not satisfy the rule" outcomes are not errors;
//! they are `Ok(false)` results with a recorded message.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a validator could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required configuration was missing at validate time.
    Misconfigured,
    /// A supplied string could not be parsed into the required shape.
    Unparseable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Misconfigured => write!(f, "misconfigured"),
            ErrorKind::Unparseable => write!(f, "unparseable"),
        }
    }
}

/// Error raised when a validator cannot execute.
///
/// Callers should treat this as a programming or setup defect and not present
/// it directly as a field error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct ValidationError {
    /// Failure category
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl ValidationError {
    /// Create an error for missing or inconsistent configuration.
    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Misconfigured,
            message: message.into(),
        }
    }

    /// Create an error for input that could not be parsed.
    pub fn unparseable(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unparseable,
            message: message.into(),
        }
    }
}
