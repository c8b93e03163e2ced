//! Service layer connecting the host to the filtering core.

mod adapter;
mod evaluation_service;

pub use evaluation_service::EvaluationService;
