//! Actions run by filters on denial and bypass.

mod action_trait;
mod composite_action;
mod log_action;
mod message_action;

pub use action_trait::{FilterAction, SilentAction};
pub use composite_action::CompositeAction;
pub use log_action::LogAction;
pub use message_action::MessageAction;

use crate::config::ActionSpec;

/// Build the action configured for one event kind of a filter.
pub fn build_action(filter: &str, spec: &ActionSpec) -> Box<dyn FilterAction> {
    let mut composite = CompositeAction::default();
    if spec.log {
        composite.push(Box::new(LogAction::new(filter)));
    }
    if spec.deny_message.is_some() || spec.bypass_message.is_some() {
        composite.push(Box::new(MessageAction::new(
            spec.deny_message.clone(),
            spec.bypass_message.clone(),
        )));
    }

    if composite.is_empty() {
        Box::new(SilentAction)
    } else {
        Box::new(composite)
    }
}
