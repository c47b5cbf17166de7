//! UI sub-module re-exports for Spotlight.
//!
//! Each sub-module adds rendering methods to [`crate::app::SpotlightApp`]
//! via `impl` blocks, keeping UI code cleanly separated from state management.

pub mod computer_table;
pub mod input;
pub mod spotlight_view;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
