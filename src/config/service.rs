//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/command-blocker/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("command-blocker")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Validates configuration after loading.
    /// Log path defaults to the same directory as config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config_dir = path.parent();

        if !path.exists() {
            // Create default config file
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // If log_path was not explicitly set in config, use config file directory
        // Check if log_path matches the general default (meaning it wasn't set in file)
        let general_default = default_log_path_for_config_dir(None);
        if config.log_path == general_default {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        // Validate configuration
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# command-blocker configuration file

# Write denials and bypasses to the log directory (default: true)
log_enabled = true

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# log_path = "~/.config/command-blocker/logs"

# Filters are evaluated in order. The first filter with an opinion
# (allow or deny) decides; filters answering "none" defer to the next one.
[[filters]]
name = "default"

# Opinion when no criterion matches: "allow", "deny" or "none"
default_opinion = "none"

# Filter command execution and tab-completion
prevent_execution = true
prevent_tab_complete = true

# Senders holding this permission are never filtered
bypass_permission = "cbu.bypass"

# Placeholders: {command}, {root}, {sender}
execution_action = { log = true, deny_message = "You are not allowed to use /{root}." }
tab_complete_action = { log = false }

# Criteria: the first matching criterion decides.
# type = "command"  - root command is one of `names` (aliases, namespace:name)
# type = "prefix"   - command text starts with `prefix`
# type = "regex"    - command text (without /) matches `pattern`
# type = "argument" - argument at `position` is one of `values`
[[filters.criteria]]
type = "prefix"
prefix = "/bukkit:"
opinion = "deny"

[[filters.criteria]]
type = "command"
names = ["pl", "plugins", "ver", "version", "about", "icanhasbukkit"]
opinion = "deny"

# [[filters.criteria]]
# type = "argument"
# command = "gamemode"
# position = 0
# values = ["creative", "1"]
# opinion = "deny"

# [[filters.criteria]]
# type = "regex"
# pattern = "^(?i)give \\S+ (bedrock|barrier)"
# opinion = "deny"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Opinion;
    use std::env;

    fn temp_config_path(tag: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("command-blocker-config-{}-{}", tag, std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_default_content_parses_and_validates() {
        let config: Config = toml::from_str(&ConfigService::default_config_content()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.filters.len(), 1);
        assert_eq!(config.filters[0].name, "default");
        assert_eq!(config.filters[0].default_opinion, Opinion::None);
        assert_eq!(config.filters[0].criteria.len(), 2);
    }

    #[test]
    fn test_load_creates_missing_file_and_sets_log_path() {
        let path = temp_config_path("load");
        let dir = path.parent().unwrap().to_path_buf();
        fs::remove_dir_all(&dir).ok();

        let config = ConfigService::load(Some(&path)).unwrap();

        assert!(path.exists());
        assert_eq!(config.log_path, dir.join("logs"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = temp_config_path("invalid");
        let dir = path.parent().unwrap().to_path_buf();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            &path,
            "[[filters]]\nname = \"x\"\n[[filters.criteria]]\ntype = \"regex\"\npattern = \"(\"\n",
        )
        .unwrap();

        let err = ConfigService::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid regex"));
        fs::remove_dir_all(&dir).ok();
    }
}
