//! Configuration management module.
//!
//! Handles TOML configuration file loading, validation, and default generation.

mod service;
mod types;
mod validation;

pub use service::ConfigService;
pub use types::{ActionSpec, Config, CriterionSpec, FilterSpec};
pub use validation::validate;
