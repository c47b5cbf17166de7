//! Toolkit-independent list-view state: row selection, geometry, icon size.

use std::collections::BTreeSet;

use super::geometry::{IconSize, ListViewMetrics};

/// Pointer button that triggered a press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Extra1,
    Extra2,
}

/// How a row selection request combines with the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Replace the selection with exactly this row.
    SelectCurrent,
    /// Flip this row's selection state, keeping the rest.
    Toggle,
}

/// Set of selected rows, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelection {
    rows: BTreeSet<usize>,
}

impl ListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selection request for `row`.
    pub fn select(&mut self, row: usize, mode: SelectionMode) {
        match mode {
            SelectionMode::SelectCurrent => {
                self.rows.clear();
                self.rows.insert(row);
            }
            SelectionMode::Toggle => {
                if !self.rows.remove(&row) {
                    self.rows.insert(row);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Selected rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Follow the removal of rows `first..=last`: those rows are deselected
    /// and selected rows after them move up.
    pub fn remove_rows(&mut self, first: usize, last: usize) {
        if last < first {
            return;
        }
        let count = last - first + 1;
        self.rows = self
            .rows
            .iter()
            .filter(|&&row| row < first || row > last)
            .map(|&row| if row > last { row - count } else { row })
            .collect();
    }

    /// Drop selected rows that no longer exist in a list of `row_count` rows.
    pub fn retain_below(&mut self, row_count: usize) {
        self.rows.retain(|&row| row < row_count);
    }
}

/// State of one list view widget as the panel sees it.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub selection: ListSelection,
    metrics: ListViewMetrics,
    icon_size: IconSize,
}

impl ListView {
    pub fn new(metrics: ListViewMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    pub fn metrics(&self) -> &ListViewMetrics {
        &self.metrics
    }

    pub fn set_metrics(&mut self, metrics: ListViewMetrics) {
        self.metrics = metrics;
    }

    pub fn icon_size(&self) -> IconSize {
        self.icon_size
    }

    pub fn set_icon_size(&mut self, size: IconSize) {
        self.icon_size = size;
    }
}
