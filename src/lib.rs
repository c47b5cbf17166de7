//! Spotlight library crate.
//!
//! Re-exports the core modules so that integration tests can drive the
//! spotlight panel without a window. The binary entry point is in `main.rs`.

pub mod core;
pub mod util;
