//! Criteria-based filter implementation.

use tracing::debug;

use super::{Filter, FilterConfiguration};
use crate::config::FilterSpec;
use crate::domain::actions::FilterAction;
use crate::domain::criteria::CriteriaList;
use crate::domain::{CommandLine, Completable, FilterError, Opinion, SenderAdapter};

/// A filter with its own configuration and an ordered set of criteria.
pub struct SimpleFilter {
    name: String,
    configuration: FilterConfiguration,
    criteria: CriteriaList,
}

impl SimpleFilter {
    /// Create a new SimpleFilter.
    ///
    /// The default opinion always comes from `configuration`; the default
    /// held by `criteria` itself is never consulted.
    pub fn new(
        name: impl Into<String>,
        configuration: FilterConfiguration,
        criteria: CriteriaList,
    ) -> Self {
        Self {
            name: name.into(),
            configuration,
            criteria,
        }
    }

    /// Build a filter from its TOML representation.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration or any criterion is invalid.
    pub fn from_spec(spec: &FilterSpec) -> Result<Self, FilterError> {
        if spec.name.trim().is_empty() {
            return Err(FilterError::invalid("name", "filter name cannot be empty"));
        }
        let configuration = FilterConfiguration::from_spec(spec)?;
        let criteria = CriteriaList::from_specs(&spec.criteria, spec.default_opinion)?;
        Ok(Self::new(spec.name.clone(), configuration, criteria))
    }

    pub fn config(&self) -> &FilterConfiguration {
        &self.configuration
    }

    pub fn config_mut(&mut self) -> &mut FilterConfiguration {
        &mut self.configuration
    }

    pub fn criteria(&self) -> &CriteriaList {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut CriteriaList {
        &mut self.criteria
    }

    /// Shared decision for both event kinds.
    ///
    /// A sender holding the bypass permission always gets `None`, whatever
    /// the criteria say.
    fn evaluate(
        &self,
        action: &dyn FilterAction,
        line: &CommandLine,
        sender: &dyn SenderAdapter,
    ) -> Opinion {
        let result = self
            .criteria
            .first_match(line)
            .unwrap_or_else(|| self.configuration.default_opinion());

        if sender.has_permission(self.configuration.bypass_permission()) {
            debug!(
                "[{}] {} holds {}, bypassing ({} would have been {})",
                self.name,
                sender.name(),
                self.configuration.bypass_permission(),
                line,
                result
            );
            action.on_bypass(line, sender);
            return Opinion::None;
        }

        if result == Opinion::Deny {
            action.on_denial(line, sender);
        }

        debug!("[{}] {} -> {}", self.name, line, result);
        result
    }
}

impl Filter for SimpleFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn process_execution(&self, line: &CommandLine, sender: &dyn SenderAdapter) -> Opinion {
        if !self.configuration.does_prevent_execution() {
            return Opinion::None;
        }
        self.evaluate(self.configuration.execution_action(), line, sender)
    }

    fn process_tab_complete(&self, completable: &dyn Completable) -> Opinion {
        if !self.configuration.does_prevent_tab_complete() {
            return Opinion::None;
        }

        match completable.find_merged_command() {
            Some(line) => self.evaluate(
                self.configuration.tab_complete_action(),
                &line,
                completable.sender(),
            ),
            None => Opinion::None,
        }
    }

    fn default_opinion(&self) -> Opinion {
        self.configuration.default_opinion()
    }

    fn set_default_opinion(&mut self, opinion: Opinion) {
        self.configuration.set_default_opinion(opinion);
    }
}
