//! Source list of monitored computers and its selection.
//!
//! The spotlight panel reads targets from here: whatever rows the user has
//! selected in the main monitoring list are what "Add" pins.

use super::computer::ControlInterfacePointer;
use super::list_view::{ListSelection, SelectionMode};

/// Ordered list of monitored computers plus the user's selection.
#[derive(Debug, Default)]
pub struct MonitoringModel {
    computers: Vec<ControlInterfacePointer>,
    selection: ListSelection,
}

impl MonitoringModel {
    pub fn new(computers: Vec<ControlInterfacePointer>) -> Self {
        Self {
            computers,
            selection: ListSelection::new(),
        }
    }

    /// Replace the computer list. Selection is cleared because row
    /// positions no longer refer to the same computers.
    pub fn set_computers(&mut self, computers: Vec<ControlInterfacePointer>) {
        tracing::info!("Monitoring {} computers", computers.len());
        self.computers = computers;
        self.selection.clear();
    }

    pub fn row_count(&self) -> usize {
        self.computers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&ControlInterfacePointer> {
        self.computers.get(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlInterfacePointer> {
        self.computers.iter()
    }

    /// The monitored handle for the same computer as `control_interface`.
    pub fn find(&self, control_interface: &ControlInterfacePointer) -> Option<&ControlInterfacePointer> {
        self.computers
            .iter()
            .find(|c| c.same_computer(control_interface))
    }

    /// `true` if the same computer is monitored.
    pub fn contains(&self, control_interface: &ControlInterfacePointer) -> bool {
        self.find(control_interface).is_some()
    }

    /// Apply a selection request. Rows outside the list are ignored.
    pub fn select(&mut self, row: usize, mode: SelectionMode) {
        if row < self.computers.len() {
            self.selection.select(row, mode);
        } else {
            tracing::debug!("Ignoring selection of out-of-range row {}", row);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &ListSelection {
        &self.selection
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selection.contains(row)
    }

    /// Handles of the selected computers, in row order.
    pub fn selected_control_interfaces(&self) -> Vec<ControlInterfacePointer> {
        self.selection
            .rows()
            .filter_map(|row| self.computers.get(row).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::computer::ComputerControlInterface;

    fn model(n: u64) -> MonitoringModel {
        MonitoringModel::new(
            (1..=n)
                .map(|i| ComputerControlInterface::new(i, format!("PC-{i:02}"), format!("10.0.0.{i}")))
                .collect(),
        )
    }

    #[test]
    fn selected_handles_follow_row_order() {
        let mut m = model(5);
        m.select(3, SelectionMode::Toggle);
        m.select(0, SelectionMode::Toggle);

        let ids: Vec<_> = m.selected_control_interfaces().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut m = model(2);
        m.select(7, SelectionMode::SelectCurrent);
        assert!(m.selected_control_interfaces().is_empty());
    }

    #[test]
    fn replacing_computers_clears_selection() {
        let mut m = model(3);
        m.select(1, SelectionMode::SelectCurrent);
        m.set_computers(Vec::new());
        assert!(m.selection().is_empty());
        assert!(m.is_empty());
    }
}
