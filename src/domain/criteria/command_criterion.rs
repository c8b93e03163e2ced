//! Exact root command criterion.

use super::Criterion;
use crate::domain::parser::normalize_root;
use crate::domain::{CommandLine, FilterError, Opinion};

/// Matches when the root command is one of a set of names.
///
/// Names are normalized the same way the command line is, so `fly`,
/// `/FLY` and `essentials:fly` in the configuration all match `/fly`.
pub struct CommandCriterion {
    names: Vec<String>,
    opinion: Opinion,
}

impl CommandCriterion {
    /// Create a new CommandCriterion.
    ///
    /// # Errors
    ///
    /// Returns error if no non-empty name is given.
    pub fn new<I, S>(names: I, opinion: Opinion) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| normalize_root(n.as_ref().trim().trim_start_matches('/')))
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            return Err(FilterError::invalid(
                "names",
                "command criterion needs at least one command name",
            ));
        }

        Ok(Self { names, opinion })
    }
}

impl Criterion for CommandCriterion {
    fn matches(&self, line: &CommandLine) -> bool {
        self.names.iter().any(|n| n == line.root_command())
    }

    fn opinion(&self) -> Opinion {
        self.opinion
    }

    fn describe(&self) -> String {
        format!("command {} -> {}", self.names.join("|"), self.opinion)
    }
}
