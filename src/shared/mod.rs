//! Shared components - configuration, errors, config types and display helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;
