//! Criterion trait definition.

use crate::domain::{CommandLine, Opinion};

/// A single matching rule inside a [`super::CriteriaList`].
pub trait Criterion: Send + Sync {
    /// Check if this criterion applies to the given command line.
    fn matches(&self, line: &CommandLine) -> bool;

    /// Opinion rendered when this criterion matches.
    fn opinion(&self) -> Opinion;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
