//! Error taxonomy for rule computations

use thiserror::Error;

/// Errors raised by the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Malformed input, e.g. an unparseable dice formula
    #[error("Validation error: {0}")]
    Validation(String),
    /// The action is not allowed in the current state; nothing was changed
    #[error("Precondition failed: {0}")]
    Precondition(String),
    /// Internal data reached a state the parser or engine should have prevented
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl RulesError {
    pub fn validation(msg: impl Into<String>) -> Self {
        RulesError::Validation(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        RulesError::Precondition(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        RulesError::InvariantViolation(msg.into())
    }
}

pub type RulesResult<T> = Result<T, RulesError>;
