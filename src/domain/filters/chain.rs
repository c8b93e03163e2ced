//! Filter chain implementation.

use tracing::debug;

use crate::config::Config;
use crate::domain::{CommandLine, Completable, FilterError, Opinion, SenderAdapter};

use super::{Filter, SimpleFilter};

/// Chain of filters evaluated in configuration order.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Create a new FilterChain from configuration.
    ///
    /// # Errors
    ///
    /// Returns the first filter that fails to build.
    pub fn new(config: &Config) -> Result<Self, FilterError> {
        let mut filters: Vec<Box<dyn Filter>> = Vec::with_capacity(config.filters.len());
        for spec in &config.filters {
            filters.push(Box::new(SimpleFilter::from_spec(spec)?));
        }
        Ok(Self { filters })
    }

    pub fn from_filters(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }

    /// Run every filter on an execution and return the first opinion.
    ///
    /// Filters returning `None` are skipped; evaluation stops at the first
    /// filter that allows or denies.
    pub fn process_execution(&self, line: &CommandLine, sender: &dyn SenderAdapter) -> Opinion {
        for filter in &self.filters {
            let opinion = filter.process_execution(line, sender);
            if !opinion.is_none() {
                debug!("Filter '{}' decided {} for {}", filter.name(), opinion, line);
                return opinion;
            }
        }
        Opinion::None
    }

    /// Run every filter on a tab-completion and return the first opinion.
    pub fn process_tab_complete(&self, completable: &dyn Completable) -> Opinion {
        for filter in &self.filters {
            let opinion = filter.process_tab_complete(completable);
            if !opinion.is_none() {
                debug!("Filter '{}' decided {} for tab-complete", filter.name(), opinion);
                return opinion;
            }
        }
        Opinion::None
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}
