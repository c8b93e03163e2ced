//! Per-filter configuration.

use crate::config::FilterSpec;
use crate::domain::actions::{build_action, FilterAction, SilentAction};
use crate::domain::{FilterError, Opinion};

/// Settings of one filter: what it applies to, who bypasses it and what
/// happens after it decides.
///
/// This is the single owner of the filter's default opinion.
pub struct FilterConfiguration {
    default_opinion: Opinion,
    prevent_execution: bool,
    prevent_tab_complete: bool,
    bypass_permission: String,
    execution_action: Box<dyn FilterAction>,
    tab_complete_action: Box<dyn FilterAction>,
}

impl FilterConfiguration {
    /// Create a configuration that filters both execution and tab-completion
    /// and takes no action.
    ///
    /// # Errors
    ///
    /// Returns error if `bypass_permission` is blank.
    pub fn new(
        default_opinion: Opinion,
        bypass_permission: impl Into<String>,
    ) -> Result<Self, FilterError> {
        let bypass_permission = bypass_permission.into();
        if bypass_permission.trim().is_empty() {
            return Err(FilterError::invalid(
                "bypassPermission",
                "bypass permission cannot be empty",
            ));
        }

        Ok(Self {
            default_opinion,
            prevent_execution: true,
            prevent_tab_complete: true,
            bypass_permission,
            execution_action: Box::new(SilentAction),
            tab_complete_action: Box::new(SilentAction),
        })
    }

    /// Build from the TOML representation of a filter.
    pub fn from_spec(spec: &FilterSpec) -> Result<Self, FilterError> {
        Ok(Self::new(spec.default_opinion, spec.bypass_permission.clone())?
            .with_prevent_execution(spec.prevent_execution)
            .with_prevent_tab_complete(spec.prevent_tab_complete)
            .with_execution_action(build_action(&spec.name, &spec.execution_action))
            .with_tab_complete_action(build_action(&spec.name, &spec.tab_complete_action)))
    }

    pub fn with_prevent_execution(mut self, prevent: bool) -> Self {
        self.prevent_execution = prevent;
        self
    }

    pub fn with_prevent_tab_complete(mut self, prevent: bool) -> Self {
        self.prevent_tab_complete = prevent;
        self
    }

    pub fn with_execution_action(mut self, action: Box<dyn FilterAction>) -> Self {
        self.execution_action = action;
        self
    }

    pub fn with_tab_complete_action(mut self, action: Box<dyn FilterAction>) -> Self {
        self.tab_complete_action = action;
        self
    }

    pub fn does_prevent_execution(&self) -> bool {
        self.prevent_execution
    }

    pub fn does_prevent_tab_complete(&self) -> bool {
        self.prevent_tab_complete
    }

    pub fn execution_action(&self) -> &dyn FilterAction {
        self.execution_action.as_ref()
    }

    pub fn tab_complete_action(&self) -> &dyn FilterAction {
        self.tab_complete_action.as_ref()
    }

    pub fn bypass_permission(&self) -> &str {
        &self.bypass_permission
    }

    pub fn default_opinion(&self) -> Opinion {
        self.default_opinion
    }

    pub fn set_default_opinion(&mut self, opinion: Opinion) {
        self.default_opinion = opinion;
    }
}
