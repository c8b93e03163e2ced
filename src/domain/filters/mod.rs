//! Command filters and the chain that runs them.

mod chain;
mod configuration;
mod filter_trait;
mod shared;
mod simple_filter;

pub use chain::FilterChain;
pub use configuration::FilterConfiguration;
pub use filter_trait::Filter;
pub use shared::SharedFilterChain;
pub use simple_filter::SimpleFilter;
