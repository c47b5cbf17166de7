//! The spotlight list: an ordered, duplicate-free subset of monitored
//! computers pinned for focused viewing.
//!
//! Besides membership, the model owns two capture settings that it pushes
//! down to every pinned computer: the icon size (thumbnail resolution) and
//! the realtime flag (continuous vs. regular refresh). Computers leaving the
//! spotlight are returned to the regular monitoring cadence.

use std::rc::Rc;

use super::computer::{ControlInterfacePointer, UpdateMode};
use super::geometry::IconSize;
use super::monitoring_model::MonitoringModel;
use super::signal::{Signal, Subscription, SubscriptionId};

/// Notifications emitted by [`SpotlightModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// Rows `first..=last` were inserted.
    RowsInserted { first: usize, last: usize },
    /// Rows `first..=last` were removed.
    RowsRemoved { first: usize, last: usize },
}

/// Data roles exposed per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Display name of the computer.
    Display,
    /// Host address of the computer.
    ToolTip,
    /// The computer's control-interface handle.
    ControlInterface,
}

/// Value returned by [`SpotlightModel::data`].
#[derive(Debug, Clone)]
pub enum ModelData {
    Text(String),
    ControlInterface(ControlInterfacePointer),
}

impl ModelData {
    pub fn into_control_interface(self) -> Option<ControlInterfacePointer> {
        match self {
            ModelData::ControlInterface(ci) => Some(ci),
            ModelData::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ModelData::Text(s) => Some(s),
            ModelData::ControlInterface(_) => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct SpotlightModel {
    entries: Vec<ControlInterfacePointer>,
    icon_size: IconSize,
    update_in_realtime: bool,
    events: Signal<ModelEvent>,
}

impl SpotlightModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a computer. Returns `false` if it was already pinned.
    pub fn add(&mut self, control_interface: ControlInterfacePointer) -> bool {
        if self.position(&control_interface).is_some() {
            tracing::debug!("{} already in spotlight", control_interface);
            return false;
        }

        control_interface.set_scaled_screen_size(self.icon_size);
        control_interface.set_update_mode(UpdateMode::from_realtime(self.update_in_realtime));

        let row = self.entries.len();
        tracing::info!("Added {} to spotlight", control_interface);
        self.entries.push(control_interface);
        self.events.emit(ModelEvent::RowsInserted { first: row, last: row });
        true
    }

    /// Unpin a computer. Returns `false` if it was not pinned.
    pub fn remove(&mut self, control_interface: &ControlInterfacePointer) -> bool {
        match self.position(control_interface) {
            Some(row) => {
                self.remove_row(row);
                true
            }
            None => false,
        }
    }

    /// Reconcile the spotlight with a (possibly reloaded) source model.
    ///
    /// Entries whose computer is no longer monitored are dropped. Entries
    /// whose computer is monitored through a new handle are rebound to it,
    /// carrying the capture settings over. Returns the number dropped.
    pub fn retain_present(&mut self, source: &MonitoringModel) -> usize {
        let mut removed = 0;
        for row in (0..self.entries.len()).rev() {
            match source.find(&self.entries[row]) {
                None => {
                    self.remove_row(row);
                    removed += 1;
                }
                Some(current) if !Rc::ptr_eq(current, &self.entries[row]) => {
                    current.set_scaled_screen_size(self.icon_size);
                    current.set_update_mode(UpdateMode::from_realtime(self.update_in_realtime));
                    let stale = std::mem::replace(&mut self.entries[row], current.clone());
                    stale.set_update_mode(UpdateMode::Monitoring);
                    tracing::debug!("Rebound spotlight entry {}", current);
                }
                Some(_) => {}
            }
        }
        removed
    }

    fn remove_row(&mut self, row: usize) {
        let control_interface = self.entries.remove(row);
        control_interface.set_update_mode(UpdateMode::Monitoring);
        tracing::info!("Removed {} from spotlight", control_interface);
        self.events.emit(ModelEvent::RowsRemoved { first: row, last: row });
    }

    fn position(&self, control_interface: &ControlInterfacePointer) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.same_computer(control_interface))
    }

    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, control_interface: &ControlInterfacePointer) -> bool {
        self.position(control_interface).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlInterfacePointer> {
        self.entries.iter()
    }

    pub fn data(&self, row: usize, role: Role) -> Option<ModelData> {
        let entry = self.entries.get(row)?;
        Some(match role {
            Role::Display => ModelData::Text(entry.name().to_owned()),
            Role::ToolTip => ModelData::Text(entry.host().to_owned()),
            Role::ControlInterface => ModelData::ControlInterface(entry.clone()),
        })
    }

    pub fn icon_size(&self) -> IconSize {
        self.icon_size
    }

    /// Set the thumbnail resolution for every pinned computer.
    pub fn set_icon_size(&mut self, size: IconSize) {
        self.icon_size = size;
        for entry in &self.entries {
            entry.set_scaled_screen_size(size);
        }
    }

    pub fn update_in_realtime(&self) -> bool {
        self.update_in_realtime
    }

    /// Switch every pinned computer between live and regular refresh.
    pub fn set_update_in_realtime(&mut self, enabled: bool) {
        self.update_in_realtime = enabled;
        let mode = UpdateMode::from_realtime(enabled);
        for entry in &self.entries {
            entry.set_update_mode(mode);
        }
    }

    pub fn subscribe(&mut self) -> Subscription<ModelEvent> {
        self.events.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::computer::ComputerControlInterface;

    fn ci(id: u64) -> ControlInterfacePointer {
        ComputerControlInterface::new(id, format!("PC-{id:02}"), format!("10.0.0.{id}"))
    }

    #[test]
    fn add_ignores_duplicates() {
        let mut m = SpotlightModel::new();
        let a = ci(1);
        assert!(m.add(a.clone()));
        assert!(!m.add(a.clone()));
        // A distinct handle with the same identity is also a duplicate.
        assert!(!m.add(ci(1)));
        assert_eq!(m.row_count(), 1);
    }

    #[test]
    fn add_applies_capture_settings() {
        let mut m = SpotlightModel::new();
        m.set_icon_size(IconSize::new(320, 200));
        m.set_update_in_realtime(true);

        let a = ci(1);
        m.add(a.clone());

        assert_eq!(a.scaled_screen_size(), IconSize::new(320, 200));
        assert_eq!(a.update_mode(), UpdateMode::Live);
    }

    #[test]
    fn settings_propagate_to_existing_entries() {
        let mut m = SpotlightModel::new();
        let a = ci(1);
        m.add(a.clone());

        m.set_update_in_realtime(true);
        m.set_icon_size(IconSize::new(64, 48));
        assert_eq!(a.update_mode(), UpdateMode::Live);
        assert_eq!(a.scaled_screen_size(), IconSize::new(64, 48));

        m.set_update_in_realtime(false);
        assert_eq!(a.update_mode(), UpdateMode::Monitoring);
    }

    #[test]
    fn remove_restores_monitoring_and_notifies() {
        let mut m = SpotlightModel::new();
        let sub = m.subscribe();
        m.set_update_in_realtime(true);

        let (a, b) = (ci(1), ci(2));
        m.add(a.clone());
        m.add(b.clone());
        assert!(m.remove(&a));
        assert!(!m.remove(&a));

        assert_eq!(a.update_mode(), UpdateMode::Monitoring);
        assert_eq!(b.update_mode(), UpdateMode::Live);

        let events: Vec<_> = sub.receiver.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ModelEvent::RowsInserted { first: 0, last: 0 },
                ModelEvent::RowsInserted { first: 1, last: 1 },
                ModelEvent::RowsRemoved { first: 0, last: 0 },
            ]
        );
    }

    #[test]
    fn data_roles() {
        let mut m = SpotlightModel::new();
        m.add(ci(3));

        let name = m.data(0, Role::Display).unwrap();
        assert_eq!(name.as_text(), Some("PC-03"));
        let host = m.data(0, Role::ToolTip).unwrap();
        assert_eq!(host.as_text(), Some("10.0.0.3"));
        let handle = m.data(0, Role::ControlInterface).unwrap().into_control_interface();
        assert_eq!(handle.map(|h| h.id()), Some(3));
        assert!(m.data(1, Role::Display).is_none());
    }

    #[test]
    fn retain_present_drops_vanished_computers() {
        let (a, b, c) = (ci(1), ci(2), ci(3));
        let source = MonitoringModel::new(vec![a.clone(), c.clone()]);

        let mut m = SpotlightModel::new();
        m.add(a);
        m.add(b);
        m.add(c);

        assert_eq!(m.retain_present(&source), 1);
        let ids: Vec<_> = m.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn retain_present_rebinds_reloaded_handles() {
        let old = ci(1);
        let mut m = SpotlightModel::new();
        m.set_update_in_realtime(true);
        m.set_icon_size(IconSize::new(100, 80));
        m.add(old.clone());

        let reloaded = ComputerControlInterface::new(9, "Renamed", "10.0.0.1");
        let source = MonitoringModel::new(vec![reloaded.clone()]);

        assert_eq!(m.retain_present(&source), 0);
        let pinned = m.data(0, Role::ControlInterface).and_then(|d| d.into_control_interface());
        assert!(pinned.is_some_and(|p| Rc::ptr_eq(&p, &reloaded)));
        assert_eq!(old.update_mode(), UpdateMode::Monitoring);
        assert_eq!(reloaded.update_mode(), UpdateMode::Live);
        assert_eq!(reloaded.scaled_screen_size(), IconSize::new(100, 80));
    }
}
