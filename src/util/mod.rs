//! Shared utilities: constants, error types, and file locations.

pub mod constants;
pub mod error;
pub mod paths;
