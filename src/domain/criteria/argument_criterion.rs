//! Argument position criterion.

use super::Criterion;
use crate::domain::parser::normalize_root;
use crate::domain::{CommandLine, FilterError, Opinion};

/// Matches when the argument at a fixed position is one of a set of values.
///
/// Optionally restricted to a single root command, e.g. `gamemode` with
/// `creative` at position 0.
pub struct ArgumentCriterion {
    command: Option<String>,
    position: usize,
    values: Vec<String>,
    opinion: Opinion,
}

impl ArgumentCriterion {
    /// Create a new ArgumentCriterion.
    ///
    /// # Errors
    ///
    /// Returns error if `values` is empty or the command name is blank.
    pub fn new(
        command: Option<&str>,
        position: usize,
        values: Vec<String>,
        opinion: Opinion,
    ) -> Result<Self, FilterError> {
        let command = match command {
            Some(name) => {
                let name = normalize_root(name.trim().trim_start_matches('/'));
                if name.is_empty() {
                    return Err(FilterError::invalid("command", "command cannot be empty"));
                }
                Some(name)
            }
            None => None,
        };

        let values: Vec<String> = values
            .iter()
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return Err(FilterError::invalid(
                "values",
                "argument criterion needs at least one value",
            ));
        }

        Ok(Self {
            command,
            position,
            values,
            opinion,
        })
    }
}

impl Criterion for ArgumentCriterion {
    fn matches(&self, line: &CommandLine) -> bool {
        if let Some(command) = &self.command {
            if command != line.root_command() {
                return false;
            }
        }

        line.argument(self.position)
            .map(|arg| {
                let arg = arg.to_lowercase();
                self.values.iter().any(|v| *v == arg)
            })
            .unwrap_or(false)
    }

    fn opinion(&self) -> Opinion {
        self.opinion
    }

    fn describe(&self) -> String {
        format!(
            "argument {}[{}] in {} -> {}",
            self.command.as_deref().unwrap_or("*"),
            self.position,
            self.values.join("|"),
            self.opinion
        )
    }
}
