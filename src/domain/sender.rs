//! Capabilities the filter needs from the host platform.

use super::CommandLine;

/// The originator of a command, as seen by the filter.
///
/// Borrowed for the duration of a single evaluation and never retained.
pub trait SenderAdapter: Send + Sync {
    /// Display name used in logs and messages.
    fn name(&self) -> &str;

    /// Whether the sender holds `permission`.
    fn has_permission(&self, permission: &str) -> bool;

    /// Deliver a chat message to the sender.
    fn send_message(&self, message: &str);
}

/// An in-progress command being tab-completed.
pub trait Completable {
    /// The full command being completed, merged from whatever pieces the
    /// host delivered. `None` if there is nothing that resolves to a command.
    fn find_merged_command(&self) -> Option<CommandLine>;

    /// Who is completing.
    fn sender(&self) -> &dyn SenderAdapter;
}
