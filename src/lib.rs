//! command-blocker: per-command permission filter
//!
//! The filtering core a host calls for each command execution or
//! tab-completion, plus the TOML configuration it is built from.

pub mod config;
pub mod domain;
