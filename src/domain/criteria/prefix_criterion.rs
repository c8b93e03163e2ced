//! Command prefix criterion.

use super::Criterion;
use crate::domain::parser::strip_command_prefix;
use crate::domain::{CommandLine, FilterError, Opinion};

/// Matches when the command text starts with a prefix, ignoring case.
pub struct PrefixCriterion {
    prefix: String,
    opinion: Opinion,
}

impl PrefixCriterion {
    /// Create a new PrefixCriterion. A leading slash in `prefix` is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the prefix is empty.
    pub fn new(prefix: &str, opinion: Opinion) -> Result<Self, FilterError> {
        let prefix = strip_command_prefix(prefix).to_lowercase();
        if prefix.is_empty() {
            return Err(FilterError::invalid("prefix", "prefix cannot be empty"));
        }
        Ok(Self { prefix, opinion })
    }
}

impl Criterion for PrefixCriterion {
    fn matches(&self, line: &CommandLine) -> bool {
        line.body().to_lowercase().starts_with(&self.prefix)
    }

    fn opinion(&self) -> Opinion {
        self.opinion
    }

    fn describe(&self) -> String {
        format!("prefix '{}' -> {}", self.prefix, self.opinion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_criterion() {
        let c = PrefixCriterion::new("/bukkit:", Opinion::Deny).unwrap();
        assert!(c.matches(&CommandLine::parse("/bukkit:plugins").unwrap()));
        assert!(c.matches(&CommandLine::parse("/BUKKIT:ver").unwrap()));
        assert!(!c.matches(&CommandLine::parse("/plugins").unwrap()));
    }

    #[test]
    fn test_prefix_criterion_rejects_empty() {
        assert!(PrefixCriterion::new("", Opinion::Deny).is_err());
        assert!(PrefixCriterion::new(" / ", Opinion::Deny).is_err());
    }
}
