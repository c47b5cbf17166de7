//! Core domain modules for Spotlight.
//!
//! Contains the computer handles, the source monitoring model, the spotlight
//! model and panel controller, icon geometry, notifications, and persisted
//! user configuration. Nothing here depends on the UI toolkit.

pub mod computer;
pub mod computer_list;
pub mod geometry;
pub mod list_view;
pub mod monitoring_model;
pub mod signal;
pub mod spotlight_model;
pub mod spotlight_panel;
pub mod user_config;
