//! Domain layer containing the filtering core.
//!
//! This module contains:
//! - Opinions and parsed command lines
//! - Criteria and the ordered list evaluating them
//! - Filters, their configuration and the filter chain
//! - Actions triggered on denial and bypass
//! - Logger with rotation

pub mod actions;
pub mod criteria;
mod error;
pub mod filters;
pub mod logger;
pub mod parser;
mod sender;
mod types;

#[cfg(test)]
pub mod testing;

pub use error::FilterError;
pub use filters::{FilterChain, SharedFilterChain};
pub use sender::{Completable, SenderAdapter};
pub use types::{CommandLine, Opinion};
