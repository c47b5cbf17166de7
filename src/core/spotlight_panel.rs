//! Spotlight panel controller.
//!
//! Translates user input (button clicks, the realtime toggle, middle-button
//! presses on either list, resizes) into mutations of the owned
//! [`SpotlightModel`] and into transitions between the help page and the
//! view page. The controller is toolkit-independent: the UI feeds it
//! [`PanelEvent`]s and renders whatever state it exposes.
//!
//! Validation failures (nothing selected) are queued as [`Notice`]s, which
//! the UI must show as a blocking dialog.

use std::collections::VecDeque;

use crossbeam_channel::Receiver;

use super::geometry::{compute_icon_size, IconSize, ListViewMetrics};
use super::list_view::{ListView, MouseButton, SelectionMode};
use super::monitoring_model::MonitoringModel;
use super::signal::SubscriptionId;
use super::spotlight_model::{ModelEvent, Role, SpotlightModel};
use super::user_config::UserConfig;
use crate::util::constants;
use crate::util::error::{Action, Result, SpotlightError};

/// Which page of the panel's stacked area is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPage {
    /// Instructions, shown while the spotlight is empty.
    #[default]
    Help,
    /// The spotlight thumbnails.
    View,
}

/// Input delivered to the panel by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    AddClicked,
    RemoveClicked,
    RealtimeToggled(bool),
    /// A pointer button went down over a row of the source list.
    SourcePressed { row: usize, button: MouseButton },
    /// A pointer button went down over a row of the spotlight list.
    SpotlightPressed { row: usize, button: MouseButton },
    Resized(ListViewMetrics),
}

impl PanelEvent {
    /// `true` for direct user input, which an open notice blocks.
    /// Geometry changes are not user input and always go through.
    pub fn is_blocked_by_notice(&self) -> bool {
        !matches!(self, PanelEvent::Resized(_))
    }
}

/// An informational message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

pub struct SpotlightPanel {
    model: SpotlightModel,
    list_view: ListView,
    page: ViewPage,
    realtime_checked: bool,
    notices: VecDeque<Notice>,
    subscription: SubscriptionId,
    model_events: Receiver<ModelEvent>,
}

impl SpotlightPanel {
    /// Create the panel with an empty spotlight and apply the persisted
    /// realtime preference.
    pub fn new(config: &mut UserConfig) -> Self {
        let mut model = SpotlightModel::new();
        let subscription = model.subscribe();

        let mut panel = Self {
            model,
            list_view: ListView::default(),
            page: ViewPage::Help,
            realtime_checked: false,
            notices: VecDeque::new(),
            subscription: subscription.id,
            model_events: subscription.receiver,
        };

        let realtime = config.spotlight_realtime();
        panel.set_realtime_view(realtime, config);
        panel
    }

    /// Route one input event to the matching operation.
    ///
    /// Validation failures have already been turned into notices by the
    /// operation; they are only logged here.
    pub fn handle_event(
        &mut self,
        event: PanelEvent,
        source: &mut MonitoringModel,
        config: &mut UserConfig,
    ) {
        let result = match event {
            PanelEvent::AddClicked => self.add(source).map(|_| ()),
            PanelEvent::RemoveClicked => self.remove().map(|_| ()),
            PanelEvent::RealtimeToggled(enabled) => {
                self.set_realtime_view(enabled, config);
                Ok(())
            }
            PanelEvent::SourcePressed { row, button } => self.add_pressed_item(row, button, source),
            PanelEvent::SpotlightPressed { row, button } => self.remove_pressed_item(row, button),
            PanelEvent::Resized(metrics) => {
                self.resize(metrics);
                Ok(())
            }
        };

        match result {
            Err(e) if e.is_user_error() => tracing::debug!("{:?} rejected: {}", event, e),
            Err(e) => tracing::warn!("{:?} failed: {}", event, e),
            Ok(()) => {}
        }

        self.process_model_events();
    }

    /// Pin every computer selected in the source list.
    ///
    /// Returns the number of computers newly pinned.
    pub fn add(&mut self, source: &MonitoringModel) -> Result<usize> {
        let selected = source.selected_control_interfaces();
        if selected.is_empty() {
            return Err(self.report(SpotlightError::EmptySelection(Action::Add)));
        }

        let added = selected
            .into_iter()
            .filter(|control_interface| self.model.add(control_interface.clone()))
            .count();

        if self.page != ViewPage::View {
            self.page = ViewPage::View;
            // Thumbnails only get their decorations after a full relayout.
            self.update_icon_size();
        }

        Ok(added)
    }

    /// Unpin every computer selected in the spotlight list.
    ///
    /// Returns the number of computers removed.
    pub fn remove(&mut self) -> Result<usize> {
        if self.list_view.selection.is_empty() {
            return Err(self.report(SpotlightError::EmptySelection(Action::Remove)));
        }

        // Resolve all rows first; removing shifts the rows that follow.
        let targets: Vec<_> = self
            .list_view
            .selection
            .rows()
            .filter_map(|row| self.model.data(row, Role::ControlInterface))
            .filter_map(|data| data.into_control_interface())
            .collect();

        let removed = targets
            .iter()
            .filter(|control_interface| self.model.remove(control_interface))
            .count();

        self.process_model_events();
        Ok(removed)
    }

    /// Enable or disable continuous thumbnail refresh and persist the choice.
    pub fn set_realtime_view(&mut self, enabled: bool, config: &mut UserConfig) {
        self.model.set_update_in_realtime(enabled);
        config.set_spotlight_realtime(enabled);
        self.realtime_checked = enabled;
        tracing::info!("Spotlight realtime view {}", if enabled { "on" } else { "off" });
    }

    /// Record new list-view geometry and recompute the icon size.
    pub fn resize(&mut self, metrics: ListViewMetrics) {
        self.list_view.set_metrics(metrics);
        self.update_icon_size();
    }

    /// Size icons to fill the list view and match the capture resolution.
    pub fn update_icon_size(&mut self) {
        let size = compute_icon_size(self.list_view.metrics());
        self.list_view.set_icon_size(size);
        self.model.set_icon_size(self.list_view.icon_size());
    }

    /// Middle-button shortcut: pin the pressed source row.
    ///
    /// Presses on other buttons, or outside any row, do nothing.
    pub fn add_pressed_item(
        &mut self,
        row: usize,
        button: MouseButton,
        source: &mut MonitoringModel,
    ) -> Result<()> {
        if button != MouseButton::Middle || row >= source.row_count() {
            return Ok(());
        }
        source.select(row, SelectionMode::SelectCurrent);
        self.add(source).map(|_| ())
    }

    /// Middle-button shortcut: unpin the pressed spotlight row.
    ///
    /// Presses on other buttons, or outside any row, do nothing.
    pub fn remove_pressed_item(&mut self, row: usize, button: MouseButton) -> Result<()> {
        if button != MouseButton::Middle || row >= self.model.row_count() {
            return Ok(());
        }
        self.list_view.selection.select(row, SelectionMode::SelectCurrent);
        self.remove().map(|_| ())
    }

    /// Drop pinned computers that disappeared from the source model and
    /// rebind the rest to the source's current handles.
    pub fn sync_with_source(&mut self, source: &MonitoringModel) -> usize {
        let removed = self.model.retain_present(source);
        self.process_model_events();
        removed
    }

    /// Drain model notifications.
    ///
    /// Row removal moves the spotlight selection along with the remaining
    /// rows, and an empty model sends the view back to the help page.
    pub fn process_model_events(&mut self) {
        while let Ok(event) = self.model_events.try_recv() {
            match event {
                ModelEvent::RowsRemoved { first, last } => {
                    let selection = &mut self.list_view.selection;
                    selection.remove_rows(first, last);
                    selection.retain_below(self.model.row_count());
                    if self.model.row_count() == 0 {
                        self.page = ViewPage::Help;
                    }
                }
                ModelEvent::RowsInserted { .. } => {}
            }
        }
    }

    fn report(&mut self, error: SpotlightError) -> SpotlightError {
        if self.notices.len() < constants::MAX_PENDING_NOTICES {
            self.notices.push_back(Notice {
                title: constants::NOTICE_TITLE.to_owned(),
                text: error.to_string(),
            });
        } else {
            tracing::warn!("Notice queue full, dropping: {}", error);
        }
        error
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn page(&self) -> ViewPage {
        self.page
    }

    pub fn model(&self) -> &SpotlightModel {
        &self.model
    }

    pub fn list_view(&self) -> &ListView {
        &self.list_view
    }

    /// Mutable access for plain (non-shortcut) row selection in the UI.
    pub fn list_view_mut(&mut self) -> &mut ListView {
        &mut self.list_view
    }

    pub fn icon_size(&self) -> IconSize {
        self.list_view.icon_size()
    }

    /// State of the realtime toggle button.
    pub fn is_realtime_checked(&self) -> bool {
        self.realtime_checked
    }

    /// The notice the UI should currently display.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Dismiss the currently displayed notice.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    pub fn pending_notice_count(&self) -> usize {
        self.notices.len()
    }
}

impl Drop for SpotlightPanel {
    fn drop(&mut self) {
        self.model.unsubscribe(self.subscription);
    }
}
