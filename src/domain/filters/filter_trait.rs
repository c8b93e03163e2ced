//! Filter trait definition.

use crate::domain::{CommandLine, Completable, Opinion, SenderAdapter};

/// A command filter deciding about executions and tab-completions.
pub trait Filter: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Decide about a command the sender is executing.
    fn process_execution(&self, line: &CommandLine, sender: &dyn SenderAdapter) -> Opinion;

    /// Decide about a command the sender is tab-completing.
    fn process_tab_complete(&self, completable: &dyn Completable) -> Opinion;

    /// Opinion used when no criterion matches.
    fn default_opinion(&self) -> Opinion;

    fn set_default_opinion(&mut self, opinion: Opinion);
}
