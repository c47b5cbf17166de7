//! Control-interface handles for monitored computers.
//!
//! A [`ComputerControlInterface`] identifies one remote target. Handles are
//! shared (`Rc`) between the source monitoring model and the spotlight model,
//! and both may adjust how the target's screen is captured, so the capture
//! settings use interior mutability. Everything runs on the UI thread.
//!
//! Identity is the host address (trimmed, case-insensitive), which stays
//! stable across computer list reloads. The numeric id is only a display
//! sequence number.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::geometry::IconSize;

/// Sequence number of a computer within its list file.
pub type ComputerId = u64;

/// Shared handle to a computer's control interface.
pub type ControlInterfacePointer = Rc<ComputerControlInterface>;

/// How often the computer's screen thumbnail is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Regular low-frequency monitoring cadence.
    #[default]
    Monitoring,
    /// Continuous refresh for the realtime spotlight view.
    Live,
}

impl UpdateMode {
    pub fn from_realtime(enabled: bool) -> Self {
        if enabled {
            UpdateMode::Live
        } else {
            UpdateMode::Monitoring
        }
    }
}

/// Control interface for one monitored computer.
#[derive(Debug)]
pub struct ComputerControlInterface {
    id: ComputerId,
    name: String,
    host: String,
    key: String,
    update_mode: Cell<UpdateMode>,
    scaled_screen_size: Cell<IconSize>,
}

impl ComputerControlInterface {
    /// Create a new shared handle.
    pub fn new(id: ComputerId, name: impl Into<String>, host: impl Into<String>) -> ControlInterfacePointer {
        let host = host.into();
        Rc::new(Self {
            id,
            name: name.into(),
            key: identity_key(&host),
            host,
            update_mode: Cell::new(UpdateMode::default()),
            scaled_screen_size: Cell::new(IconSize::default()),
        })
    }

    pub fn id(&self) -> ComputerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Stable identity: the normalised host.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `true` if both handles refer to the same computer.
    pub fn same_computer(&self, other: &Self) -> bool {
        self.key == other.key
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode.get()
    }

    pub fn set_update_mode(&self, mode: UpdateMode) {
        if self.update_mode.replace(mode) != mode {
            tracing::debug!("{}: update mode -> {:?}", self.name, mode);
        }
    }

    /// Resolution at which the screen thumbnail is captured.
    pub fn scaled_screen_size(&self) -> IconSize {
        self.scaled_screen_size.get()
    }

    pub fn set_scaled_screen_size(&self, size: IconSize) {
        self.scaled_screen_size.set(size);
    }
}

impl PartialEq for ComputerControlInterface {
    fn eq(&self, other: &Self) -> bool {
        self.same_computer(other)
    }
}

impl Eq for ComputerControlInterface {}

/// Normalise a host address into an identity key.
pub fn identity_key(host: &str) -> String {
    host.trim().to_ascii_lowercase()
}

impl fmt::Display for ComputerControlInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_id_case_and_whitespace() {
        let a = ComputerControlInterface::new(1, "Lab", "PC.local");
        let b = ComputerControlInterface::new(7, "Other name", " pc.LOCAL ");
        let c = ComputerControlInterface::new(1, "Lab", "pc2.local");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(b.key(), "pc.local");
    }
}
