//! Configuration validation.

use anyhow::{bail, Result};
use regex::Regex;
use std::collections::HashSet;

use super::{Config, CriterionSpec};

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if !config.log_path.as_os_str().is_empty() {
        // Path will be created if it doesn't exist, so just check it's valid
        if config.log_path.to_string_lossy().contains('\0') {
            bail!("Invalid log_path: contains null character");
        }
    }

    let mut names = HashSet::new();
    for (i, filter) in config.filters.iter().enumerate() {
        if filter.name.trim().is_empty() {
            bail!("filters[{}]: name cannot be empty", i);
        }
        if !names.insert(filter.name.as_str()) {
            bail!("filters[{}]: duplicate filter name '{}'", i, filter.name);
        }
        if filter.bypass_permission.trim().is_empty() {
            bail!("filters[{}]: bypass_permission cannot be empty", i);
        }

        for (j, criterion) in filter.criteria.iter().enumerate() {
            validate_criterion(criterion)
                .map_err(|e| anyhow::anyhow!("filters[{}].criteria[{}]: {}", i, j, e))?;
        }
    }

    Ok(())
}

fn validate_criterion(criterion: &CriterionSpec) -> Result<()> {
    match criterion {
        CriterionSpec::Command { names, .. } => {
            if names.iter().all(|n| n.trim().trim_start_matches('/').is_empty()) {
                bail!("names cannot be empty");
            }
        }
        CriterionSpec::Regex { pattern, .. } => {
            if pattern.is_empty() {
                bail!("pattern cannot be empty");
            }
            if let Err(e) = Regex::new(pattern) {
                bail!("invalid regex pattern '{}': {}", pattern, e);
            }
        }
        CriterionSpec::Prefix { prefix, .. } => {
            if prefix.trim().trim_start_matches('/').is_empty() {
                bail!("prefix cannot be empty");
            }
        }
        CriterionSpec::Argument {
            command, values, ..
        } => {
            if let Some(command) = command {
                if command.trim().trim_start_matches('/').is_empty() {
                    bail!("command cannot be empty when given");
                }
            }
            if values.iter().all(|v| v.trim().is_empty()) {
                bail!("values cannot be empty");
            }
        }
    }
    Ok(())
}
