//! Logging action.

use tracing::info;

use super::FilterAction;
use crate::domain::{CommandLine, SenderAdapter};

/// Writes denials and bypasses to the log.
pub struct LogAction {
    filter: String,
}

impl LogAction {
    /// Create a new LogAction for the named filter.
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }
}

impl FilterAction for LogAction {
    fn on_denial(&self, line: &CommandLine, sender: &dyn SenderAdapter) {
        info!(
            "[{}] denied {} for {}",
            self.filter,
            line,
            sender.name()
        );
    }

    fn on_bypass(&self, line: &CommandLine, sender: &dyn SenderAdapter) {
        info!(
            "[{}] {} bypassed filter for {}",
            self.filter,
            sender.name(),
            line
        );
    }
}
