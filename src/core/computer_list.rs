//! Loading the set of monitored computers from a JSON file.
//!
//! The file is an array of `{ "name": ..., "host": ... }` objects. Ids are
//! assigned in file order starting at 1. Entries with an empty name or host
//! are rejected, duplicate hosts are skipped with a warning.

use std::collections::HashSet;
use std::path::Path;

use super::computer::{identity_key, ComputerControlInterface, ControlInterfacePointer};
use crate::util::constants;
use crate::util::error::{Result, SpotlightError};

/// One row of the computer list file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComputerEntry {
    pub name: String,
    pub host: String,
}

/// Parse computer list JSON into control-interface handles.
pub fn parse_computer_list(json: &str) -> Result<Vec<ControlInterfacePointer>> {
    let entries: Vec<ComputerEntry> = serde_json::from_str(json)?;

    if entries.len() > constants::MAX_COMPUTERS {
        return Err(SpotlightError::ComputerList(format!(
            "{} entries exceeds the limit of {}",
            entries.len(),
            constants::MAX_COMPUTERS
        )));
    }

    let mut seen_hosts = HashSet::new();
    let mut computers = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        let name = entry.name.trim();
        let host = entry.host.trim();
        if name.is_empty() || host.is_empty() {
            return Err(SpotlightError::ComputerList(format!(
                "entry {} needs a non-empty name and host",
                i + 1
            )));
        }
        if !seen_hosts.insert(identity_key(host)) {
            tracing::warn!("Skipping duplicate host {} ({})", host, name);
            continue;
        }
        let id = computers.len() as u64 + 1;
        computers.push(ComputerControlInterface::new(id, name, host));
    }

    Ok(computers)
}

/// Read and parse a computer list file.
pub fn load_computer_list(path: &Path) -> Result<Vec<ControlInterfacePointer>> {
    let text = std::fs::read_to_string(path)?;
    parse_computer_list(&text)
}

/// Built-in list used when no computer list file is available.
pub fn demo_computers() -> Vec<ControlInterfacePointer> {
    (1..=constants::DEMO_COMPUTER_COUNT as u64)
        .map(|i| ComputerControlInterface::new(i, format!("PC-{i:02}"), format!("192.168.10.{}", 100 + i)))
        .collect()
}

/// Load the computer list from `path`, or the demo list if the path is
/// absent, missing, or invalid.
pub fn load_or_demo(path: Option<&Path>) -> Vec<ControlInterfacePointer> {
    let Some(path) = path else {
        return demo_computers();
    };
    match load_computer_list(path) {
        Ok(computers) => {
            tracing::info!("Loaded {} computers from {}", computers.len(), path.display());
            computers
        }
        Err(SpotlightError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No computer list at {}, using demo computers", path.display());
            demo_computers()
        }
        Err(e) => {
            tracing::error!("Failed to load computer list {}: {}", path.display(), e);
            demo_computers()
        }
    }
}
