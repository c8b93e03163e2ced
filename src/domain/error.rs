//! Error types for command-blocker.

use thiserror::Error;

/// Error raised by the filtering core.
///
/// The core only knows one failure kind: a caller handed it something it
/// cannot work with. These are programming or configuration errors, never
/// runtime outcomes of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A required argument was missing or malformed.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl FilterError {
    /// Shorthand for building an [`FilterError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

