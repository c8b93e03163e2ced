//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::Opinion;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Write denials and bypasses to the log directory
    pub log_enabled: bool,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Filters, evaluated in file order
    pub filters: Vec<FilterSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_enabled: true,
            debug: false,
            log_path: default_log_path(),
            filters: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// One filter as written in the configuration file.
///
/// ```toml
/// [[filters]]
/// name = "default"
/// bypass_permission = "cbu.bypass"
/// execution_action = { log = true, deny_message = "You may not use /{root}." }
///
/// [[filters.criteria]]
/// type = "command"
/// names = ["fly", "efly"]
/// opinion = "deny"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Name used in logs
    pub name: String,

    /// Opinion when no criterion matches
    pub default_opinion: Opinion,

    /// Filter command execution
    pub prevent_execution: bool,

    /// Filter tab-completion
    pub prevent_tab_complete: bool,

    /// Senders holding this permission bypass the filter
    pub bypass_permission: String,

    /// What to do when an execution is denied or bypassed
    pub execution_action: ActionSpec,

    /// What to do when a tab-completion is denied or bypassed
    pub tab_complete_action: ActionSpec,

    /// Criteria, first match wins
    pub criteria: Vec<CriterionSpec>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            default_opinion: Opinion::None,
            prevent_execution: true,
            prevent_tab_complete: true,
            bypass_permission: "cbu.bypass".to_string(),
            execution_action: ActionSpec::default(),
            tab_complete_action: ActionSpec::default(),
            criteria: Vec::new(),
        }
    }
}

/// Side effects of a filter for one event kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActionSpec {
    /// Log denials and bypasses
    pub log: bool,

    /// Message sent to the sender on denial (`{command}`, `{root}`, `{sender}`)
    pub deny_message: Option<String>,

    /// Message sent to the sender on bypass
    pub bypass_message: Option<String>,
}

/// A single criterion as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CriterionSpec {
    /// Root command is one of `names` (aliases and `namespace:` forms included)
    Command {
        names: Vec<String>,
        #[serde(default = "default_criterion_opinion")]
        opinion: Opinion,
    },

    /// Command text without leading slash matches `pattern`
    Regex {
        pattern: String,
        #[serde(default = "default_criterion_opinion")]
        opinion: Opinion,
    },

    /// Command text starts with `prefix`, ignoring case
    Prefix {
        prefix: String,
        #[serde(default = "default_criterion_opinion")]
        opinion: Opinion,
    },

    /// Argument at `position` is one of `values`, optionally only for `command`
    Argument {
        #[serde(default)]
        command: Option<String>,
        position: usize,
        values: Vec<String>,
        #[serde(default = "default_criterion_opinion")]
        opinion: Opinion,
    },
}

/// Criteria without an explicit opinion block the command.
fn default_criterion_opinion() -> Opinion {
    Opinion::Deny
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("command-blocker")
        })
        .join("logs")
}
