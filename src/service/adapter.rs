//! Host adapter types.
//!
//! A host process (server plugin, proxy) delivers one event as JSON on
//! stdin:
//!
//! ```json
//! {"event": "execution", "command": "/fly", "sender": {"name": "Steve", "permissions": []}}
//! ```
//!
//! and reads the verdict back from stdout.

use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use command_blocker::domain::{CommandLine, Completable, Opinion, SenderAdapter};

use crate::cli::Format;

/// Kind of event being filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The sender is executing a command
    Execution,
    /// The sender is tab-completing
    TabComplete,
}

/// Event received from the host.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub event: EventKind,

    /// Command text for executions, input buffer for tab-completions
    pub command: String,

    #[serde(default)]
    pub sender: SenderInput,
}

/// Sender description received from the host.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SenderInput {
    pub name: String,
    pub permissions: Vec<String>,
}

impl Default for SenderInput {
    fn default() -> Self {
        Self {
            name: "CONSOLE".to_string(),
            permissions: Vec::new(),
        }
    }
}

/// Verdict written back to the host.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutput {
    pub opinion: Opinion,

    /// Messages the host should deliver to the sender
    pub messages: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationOutput {
    /// Fail-closed output for input that could not be processed.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            opinion: Opinion::Deny,
            messages: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.opinion.exit_code()
    }
}

/// Sender built from the event, collecting messages for the output.
pub struct EventSender {
    name: String,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl EventSender {
    pub fn new(input: &SenderInput) -> Self {
        Self {
            name: input.name.clone(),
            permissions: input.permissions.clone(),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Messages sent so far, leaving the sender empty.
    pub fn take_messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl SenderAdapter for EventSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == "*" || p.eq_ignore_ascii_case(permission))
    }

    fn send_message(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

/// An input buffer being tab-completed.
pub struct TabCompletion<'a> {
    buffer: &'a str,
    sender: &'a EventSender,
}

impl<'a> TabCompletion<'a> {
    pub fn new(buffer: &'a str, sender: &'a EventSender) -> Self {
        Self { buffer, sender }
    }
}

impl Completable for TabCompletion<'_> {
    /// Only buffers starting with `/` are commands; anything else is chat
    /// (player name completion) and resolves to nothing.
    fn find_merged_command(&self) -> Option<CommandLine> {
        if !self.buffer.trim_start().starts_with('/') {
            return None;
        }
        CommandLine::parse(self.buffer).ok()
    }

    fn sender(&self) -> &dyn SenderAdapter {
        self.sender
    }
}

/// Parse the event JSON.
pub fn parse_input(input: &str) -> Result<EventInput> {
    serde_json::from_str(input).context("Invalid event JSON")
}

/// Render the output in the requested format.
pub fn format_output(output: &EvaluationOutput, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string(output)?),
        Format::Text => {
            let mut lines = vec![output.opinion.to_string()];
            lines.extend(output.messages.iter().cloned());
            if let Some(error) = &output.error {
                lines.push(format!("error: {}", error));
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender(permissions: &[&str]) -> EventSender {
        EventSender::new(&SenderInput {
            name: "Steve".to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        })
    }

    #[test]
    fn test_parse_input() {
        let input = parse_input(
            r#"{"event":"tab_complete","command":"/tp St","sender":{"name":"Steve","permissions":["a.b"]}}"#,
        )
        .unwrap();
        assert_eq!(input.event, EventKind::TabComplete);
        assert_eq!(input.command, "/tp St");
        assert_eq!(input.sender.permissions, vec!["a.b"]);
    }

    #[test]
    fn test_parse_input_defaults_to_console() {
        let input = parse_input(r#"{"event":"execution","command":"stop"}"#).unwrap();
        assert_eq!(input.sender.name, "CONSOLE");
        assert!(input.sender.permissions.is_empty());
    }

    #[test]
    fn test_parse_input_rejects_unknown_event() {
        assert!(parse_input(r#"{"event":"chat","command":"/fly"}"#).is_err());
        assert!(parse_input("not json").is_err());
    }

    #[test]
    fn test_event_sender_permissions_and_messages() {
        let s = sender(&["CBU.Bypass"]);
        assert!(s.has_permission("cbu.bypass"));
        assert!(!s.has_permission("cbu.other"));
        assert!(sender(&["*"]).has_permission("anything"));

        s.send_message("one");
        s.send_message("two");
        assert_eq!(s.take_messages(), vec!["one", "two"]);
        assert!(s.take_messages().is_empty());
    }

    #[test]
    fn test_tab_completion_merged_command() {
        let s = sender(&[]);
        let line = TabCompletion::new("/minecraft:tp St", &s)
            .find_merged_command()
            .unwrap();
        assert_eq!(line.root_command(), "tp");
        assert_eq!(line.arguments(), &["St"]);

        assert!(TabCompletion::new("hello St", &s).find_merged_command().is_none());
        assert!(TabCompletion::new("/", &s).find_merged_command().is_none());
        assert!(TabCompletion::new("", &s).find_merged_command().is_none());
    }

    #[test]
    fn test_format_output() {
        let output = EvaluationOutput {
            opinion: Opinion::Deny,
            messages: vec!["No /fly".to_string()],
            error: None,
        };
        assert_eq!(
            format_output(&output, Format::Json).unwrap(),
            r#"{"opinion":"deny","messages":["No /fly"]}"#
        );
        assert_eq!(format_output(&output, Format::Text).unwrap(), "deny\nNo /fly");

        let error = EvaluationOutput::error("bad input");
        assert_eq!(error.exit_code(), 2);
        assert!(format_output(&error, Format::Json)
            .unwrap()
            .contains(r#""error":"bad input""#));
    }
}
