//! Core domain types: opinions and parsed command lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FilterError;
use super::parser;

/// Verdict a criterion or filter renders about a command.
///
/// `None` means "no opinion": it never overrides an earlier decision and is
/// always overridden by a later `Allow` or `Deny`.
///
/// Deserialization goes through [`FromStr`], so configuration files and
/// callers accept the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Opinion {
    /// Let the command through
    Allow,
    /// Block the command
    Deny,
    /// No opinion
    #[default]
    None,
}

impl Opinion {
    /// Lowercase name used in configuration and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Opinion::Allow => "allow",
            Opinion::Deny => "deny",
            Opinion::None => "none",
        }
    }

    /// Whether this is the "no opinion" value.
    pub fn is_none(self) -> bool {
        self == Opinion::None
    }

    /// Combine with a later opinion: the first non-`None` value sticks.
    pub fn or(self, later: Opinion) -> Opinion {
        if self.is_none() {
            later
        } else {
            self
        }
    }

    /// Exit code reported to the host: 2 blocks, everything else passes.
    pub fn exit_code(self) -> i32 {
        match self {
            Opinion::Deny => 2,
            Opinion::Allow | Opinion::None => 0,
        }
    }
}

impl fmt::Display for Opinion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Opinion {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Opinion::Allow),
            "deny" => Ok(Opinion::Deny),
            "none" => Ok(Opinion::None),
            other => Err(FilterError::invalid(
                "opinion",
                format!("expected one of allow, deny, none but got '{}'", other),
            )),
        }
    }
}

impl TryFrom<String> for Opinion {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A parsed command invocation.
///
/// Immutable once created. The raw text is kept exactly as received; the
/// root command is normalized for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    root: String,
    arguments: Vec<String>,
}

impl CommandLine {
    /// Parse raw command text such as `/tp Steve Alex`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidArgument`] if the text contains no command.
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let body = parser::strip_command_prefix(raw);
        let mut tokens = parser::tokenize(body).into_iter();
        let root = tokens
            .next()
            .map(|token| parser::normalize_root(&token))
            .filter(|root| !root.is_empty())
            .ok_or_else(|| FilterError::invalid("commandLine", "no command found"))?;

        Ok(Self {
            raw: raw.to_string(),
            root,
            arguments: tokens.collect(),
        })
    }

    /// The text as received from the host.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Command text without surrounding whitespace and leading slash.
    pub fn body(&self) -> &str {
        parser::strip_command_prefix(&self.raw)
    }

    /// Lowercase root command with any `namespace:` prefix removed.
    pub fn root_command(&self) -> &str {
        &self.root
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Argument at `index` (0 = first token after the root command).
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Arguments joined by single spaces.
    pub fn joined_arguments(&self) -> String {
        self.arguments.join(" ")
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let line = CommandLine::parse("/tp Steve Alex").unwrap();
        assert_eq!(line.raw(), "/tp Steve Alex");
        assert_eq!(line.root_command(), "tp");
        assert_eq!(line.arguments(), &["Steve", "Alex"]);
        assert_eq!(line.argument(1), Some("Alex"));
        assert_eq!(line.argument(2), None);
        assert_eq!(line.argument_count(), 2);
        assert_eq!(line.joined_arguments(), "Steve Alex");
    }

    #[test]
    fn test_parse_normalizes_root() {
        let line = CommandLine::parse("  /Minecraft:TP  a   b ").unwrap();
        assert_eq!(line.root_command(), "tp");
        assert_eq!(line.arguments(), &["a", "b"]);
        assert_eq!(line.body(), "Minecraft:TP  a   b");
        assert_eq!(line.to_string(), "/Minecraft:TP  a   b");
    }

    #[test]
    fn test_parse_without_slash() {
        let line = CommandLine::parse("home").unwrap();
        assert_eq!(line.root_command(), "home");
        assert!(line.arguments().is_empty());
    }

    #[test]
    fn test_parse_rejects_blank_text() {
        assert!(matches!(
            CommandLine::parse(""),
            Err(FilterError::InvalidArgument { .. })
        ));
        assert!(CommandLine::parse("   ").is_err());
        assert!(CommandLine::parse("/").is_err());
        assert!(CommandLine::parse("/ ").is_err());
    }

    #[test]
    fn test_opinion_from_str() {
        assert_eq!("allow".parse::<Opinion>().unwrap(), Opinion::Allow);
        assert_eq!(" DENY ".parse::<Opinion>().unwrap(), Opinion::Deny);
        assert_eq!("none".parse::<Opinion>().unwrap(), Opinion::None);
        assert!("maybe".parse::<Opinion>().is_err());
        assert!("".parse::<Opinion>().is_err());
    }

    #[test]
    fn test_opinion_serde_uses_from_str() {
        let opinion: Opinion = serde_json::from_str(r#"" DENY ""#).unwrap();
        assert_eq!(opinion, Opinion::Deny);
        assert!(serde_json::from_str::<Opinion>(r#""maybe""#).is_err());
        assert_eq!(serde_json::to_string(&Opinion::Allow).unwrap(), r#""allow""#);
    }

    #[test]
    fn test_opinion_or_keeps_first_decision() {
        assert_eq!(Opinion::None.or(Opinion::Deny), Opinion::Deny);
        assert_eq!(Opinion::Allow.or(Opinion::Deny), Opinion::Allow);
        assert_eq!(Opinion::Deny.or(Opinion::None), Opinion::Deny);
        assert_eq!(Opinion::None.or(Opinion::None), Opinion::None);
    }

    #[test]
    fn test_opinion_exit_code() {
        assert_eq!(Opinion::Deny.exit_code(), 2);
        assert_eq!(Opinion::Allow.exit_code(), 0);
        assert_eq!(Opinion::None.exit_code(), 0);
    }
}
