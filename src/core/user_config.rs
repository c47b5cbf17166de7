//! Persisted per-user preferences.
//!
//! Stored as a small JSON object. Unknown keys are ignored and missing keys
//! take their defaults, so older or newer config files still load.

use std::path::{Path, PathBuf};

use crate::util::error::{Result, SpotlightError};

/// Serialisable preference values.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UserConfigValues {
    /// Whether spotlight thumbnails refresh continuously.
    pub spotlight_realtime: bool,
}

/// User configuration backed by an optional JSON file.
///
/// Setters write through to the file immediately. A config without a path
/// (see [`UserConfig::in_memory`]) only keeps values for the session.
#[derive(Debug, Default)]
pub struct UserConfig {
    path: Option<PathBuf>,
    values: UserConfigValues,
}

impl UserConfig {
    /// A config that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file yields defaults bound to that path.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                SpotlightError::Config(format!("{}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                UserConfigValues::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// Load from `path`, falling back to defaults (still bound to `path`)
    /// if the file is unreadable or malformed.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load user config: {}", e);
                Self {
                    path: Some(path),
                    values: UserConfigValues::default(),
                }
            }
        }
    }

    /// Write the current values to the backing file, if any.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn spotlight_realtime(&self) -> bool {
        self.values.spotlight_realtime
    }

    /// Update the realtime preference and persist it. Write failures are
    /// logged; the in-memory value is updated regardless.
    pub fn set_spotlight_realtime(&mut self, enabled: bool) {
        self.values.spotlight_realtime = enabled;
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist spotlight realtime setting: {}", e);
        }
    }
}
