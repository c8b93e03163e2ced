//! Ordered criteria list.

use tracing::trace;

use super::{ArgumentCriterion, CommandCriterion, Criterion, PrefixCriterion, RegexCriterion};
use crate::config::CriterionSpec;
use crate::domain::{CommandLine, FilterError, Opinion};

/// Ordered set of criteria resolving a command line to one opinion.
///
/// The first matching criterion wins; later criteria are never consulted
/// once one matches.
pub struct CriteriaList {
    criteria: Vec<Box<dyn Criterion>>,
    default_opinion: Opinion,
}

impl CriteriaList {
    /// Create an empty list that resolves everything to `default_opinion`.
    pub fn new(default_opinion: Opinion) -> Self {
        Self {
            criteria: Vec::new(),
            default_opinion,
        }
    }

    /// Build a list from configuration, keeping file order.
    ///
    /// # Errors
    ///
    /// Returns the first criterion that fails to build.
    pub fn from_specs(
        specs: &[CriterionSpec],
        default_opinion: Opinion,
    ) -> Result<Self, FilterError> {
        let mut list = Self::new(default_opinion);
        for spec in specs {
            list.add(build_criterion(spec)?);
        }
        Ok(list)
    }

    /// Opinion of the first matching criterion, or the default opinion.
    pub fn process(&self, line: &CommandLine) -> Opinion {
        self.first_match(line).unwrap_or(self.default_opinion)
    }

    /// Opinion of the first matching criterion, if any matches.
    pub fn first_match(&self, line: &CommandLine) -> Option<Opinion> {
        let hit = self.criteria.iter().find(|c| c.matches(line))?;
        trace!("Criterion matched {}: {}", line, hit.describe());
        Some(hit.opinion())
    }

    pub fn default_opinion(&self) -> Opinion {
        self.default_opinion
    }

    pub fn set_default_opinion(&mut self, opinion: Opinion) {
        self.default_opinion = opinion;
    }

    /// Append a criterion at the end of the evaluation order.
    pub fn add(&mut self, criterion: Box<dyn Criterion>) {
        self.criteria.push(criterion);
    }

    /// Remove and return the criterion at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Criterion>> {
        if index < self.criteria.len() {
            Some(self.criteria.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Descriptions of all criteria in evaluation order.
    pub fn describe(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.describe()).collect()
    }
}

fn build_criterion(spec: &CriterionSpec) -> Result<Box<dyn Criterion>, FilterError> {
    let criterion: Box<dyn Criterion> = match spec {
        CriterionSpec::Command { names, opinion } => {
            Box::new(CommandCriterion::new(names, *opinion)?)
        }
        CriterionSpec::Regex { pattern, opinion } => {
            Box::new(RegexCriterion::new(pattern, *opinion)?)
        }
        CriterionSpec::Prefix { prefix, opinion } => {
            Box::new(PrefixCriterion::new(prefix, *opinion)?)
        }
        CriterionSpec::Argument {
            command,
            position,
            values,
            opinion,
        } => Box::new(ArgumentCriterion::new(
            command.as_deref(),
            *position,
            values.clone(),
            *opinion,
        )?),
    };
    Ok(criterion)
}
