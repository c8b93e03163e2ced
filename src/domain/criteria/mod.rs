//! Criteria: matching rules and the ordered list that evaluates them.

mod argument_criterion;
mod command_criterion;
mod criterion_trait;
mod list;
mod prefix_criterion;
mod regex_criterion;

pub use argument_criterion::ArgumentCriterion;
pub use command_criterion::CommandCriterion;
pub use criterion_trait::Criterion;
pub use list::CriteriaList;
pub use prefix_criterion::PrefixCriterion;
pub use regex_criterion::RegexCriterion;
