//! FilterAction trait definition.

use crate::domain::{CommandLine, SenderAdapter};

/// Side effects a filter triggers after deciding.
///
/// Implementations handle their own failures; nothing they do can change the
/// opinion the filter returns.
pub trait FilterAction: Send + Sync {
    /// Called when the filter denies `line` for `sender`.
    fn on_denial(&self, line: &CommandLine, sender: &dyn SenderAdapter);

    /// Called when `sender` holds the bypass permission.
    fn on_bypass(&self, line: &CommandLine, sender: &dyn SenderAdapter);
}

/// Action that does nothing.
pub struct SilentAction;

impl FilterAction for SilentAction {
    fn on_denial(&self, _line: &CommandLine, _sender: &dyn SenderAdapter) {}

    fn on_bypass(&self, _line: &CommandLine, _sender: &dyn SenderAdapter) {}
}
