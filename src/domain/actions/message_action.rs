//! Chat message action.

use super::FilterAction;
use crate::domain::{CommandLine, SenderAdapter};

/// Sends a message to the sender on denial and, optionally, on bypass.
///
/// Supported placeholders: `{command}`, `{root}` and `{sender}`.
pub struct MessageAction {
    deny_message: Option<String>,
    bypass_message: Option<String>,
}

impl MessageAction {
    /// Create a new MessageAction.
    pub fn new(deny_message: Option<String>, bypass_message: Option<String>) -> Self {
        Self {
            deny_message,
            bypass_message,
        }
    }

    fn render(template: &str, line: &CommandLine, sender: &dyn SenderAdapter) -> String {
        template
            .replace("{command}", &line.to_string())
            .replace("{root}", line.root_command())
            .replace("{sender}", sender.name())
    }
}

impl FilterAction for MessageAction {
    fn on_denial(&self, line: &CommandLine, sender: &dyn SenderAdapter) {
        if let Some(template) = &self.deny_message {
            sender.send_message(&Self::render(template, line, sender));
        }
    }

    fn on_bypass(&self, line: &CommandLine, sender: &dyn SenderAdapter) {
        if let Some(template) = &self.bypass_message {
            sender.send_message(&Self::render(template, line, sender));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::RecordingSender;

    #[test]
    fn test_message_action_renders_placeholders() {
        let action = MessageAction::new(
            Some("{sender}: /{root} is blocked ({command})".to_string()),
            None,
        );
        let sender = RecordingSender::new("Steve", &[]);
        let line = CommandLine::parse("/Essentials:Fly on").unwrap();

        action.on_denial(&line, &sender);
        action.on_bypass(&line, &sender);

        assert_eq!(
            sender.messages(),
            vec!["Steve: /fly is blocked (/Essentials:Fly on)".to_string()]
        );
    }

    #[test]
    fn test_message_action_bypass_message() {
        let action = MessageAction::new(None, Some("bypassed {root}".to_string()));
        let sender = RecordingSender::new("Alex", &[]);
        let line = CommandLine::parse("/op Alex").unwrap();

        action.on_denial(&line, &sender);
        assert!(sender.messages().is_empty());
        action.on_bypass(&line, &sender);
        assert_eq!(sender.messages(), vec!["bypassed op".to_string()]);
    }
}
