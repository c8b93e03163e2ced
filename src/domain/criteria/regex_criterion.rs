//! Regular expression criterion.

use regex::Regex;

use super::Criterion;
use crate::domain::{CommandLine, FilterError, Opinion};

/// Matches the command text (without leading slash) against a regex.
pub struct RegexCriterion {
    pattern: Regex,
    opinion: Opinion,
}

impl RegexCriterion {
    /// Create a new RegexCriterion.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regex.
    pub fn new(pattern: &str, opinion: Opinion) -> Result<Self, FilterError> {
        let pattern =
            Regex::new(pattern).map_err(|e| FilterError::invalid("pattern", e.to_string()))?;
        Ok(Self { pattern, opinion })
    }
}

impl Criterion for RegexCriterion {
    fn matches(&self, line: &CommandLine) -> bool {
        self.pattern.is_match(line.body())
    }

    fn opinion(&self) -> Opinion {
        self.opinion
    }

    fn describe(&self) -> String {
        format!("regex /{}/ -> {}", self.pattern.as_str(), self.opinion)
    }
}
