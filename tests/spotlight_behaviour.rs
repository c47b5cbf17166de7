//! End-to-end behaviour of the spotlight panel driven through `PanelEvent`s.

use spotlight::core::computer::{ComputerControlInterface, UpdateMode};
use spotlight::core::computer_list::parse_computer_list;
use spotlight::core::geometry::{IconSize, ListViewMetrics};
use spotlight::core::list_view::{MouseButton, SelectionMode};
use spotlight::core::monitoring_model::MonitoringModel;
use spotlight::core::spotlight_panel::{PanelEvent, SpotlightPanel, ViewPage};
use spotlight::core::user_config::UserConfig;

struct Harness {
    source: MonitoringModel,
    config: UserConfig,
    panel: SpotlightPanel,
}

impl Harness {
    fn new(computers: u64) -> Self {
        let source = MonitoringModel::new(
            (1..=computers)
                .map(|i| ComputerControlInterface::new(i, format!("PC-{i:02}"), format!("10.1.0.{i}")))
                .collect(),
        );
        let mut config = UserConfig::in_memory();
        let panel = SpotlightPanel::new(&mut config);
        Self {
            source,
            config,
            panel,
        }
    }

    fn send(&mut self, event: PanelEvent) {
        self.panel
            .handle_event(event, &mut self.source, &mut self.config);
    }

    fn select_source(&mut self, rows: &[usize]) {
        self.source.clear_selection();
        for &row in rows {
            self.source.select(row, SelectionMode::Toggle);
        }
    }

    fn select_spotlight(&mut self, rows: &[usize]) {
        let selection = &mut self.panel.list_view_mut().selection;
        selection.clear();
        for &row in rows {
            selection.select(row, SelectionMode::Toggle);
        }
    }

    fn pinned_ids(&self) -> Vec<u64> {
        self.panel.model().iter().map(|c| c.id()).collect()
    }
}

#[test]
fn add_with_empty_selection_raises_one_notice() {
    let mut h = Harness::new(4);

    h.send(PanelEvent::AddClicked);

    assert!(h.panel.model().is_empty());
    assert_eq!(h.panel.page(), ViewPage::Help);
    assert_eq!(h.panel.pending_notice_count(), 1);
    let notice = h.panel.current_notice().unwrap();
    assert_eq!(notice.title, "Spotlight");
    assert_eq!(notice.text, "Please select at least one computer to add.");
}

#[test]
fn remove_with_empty_selection_raises_one_notice() {
    let mut h = Harness::new(4);
    h.select_source(&[0, 1]);
    h.send(PanelEvent::AddClicked);

    h.send(PanelEvent::RemoveClicked);

    assert_eq!(h.pinned_ids(), vec![1, 2]);
    assert_eq!(h.panel.pending_notice_count(), 1);
    assert_eq!(
        h.panel.current_notice().map(|n| n.text.as_str()),
        Some("Please select at least one computer to remove.")
    );
}

#[test]
fn dismissing_notices_empties_the_queue() {
    let mut h = Harness::new(1);
    h.send(PanelEvent::AddClicked);
    h.send(PanelEvent::RemoveClicked);
    assert_eq!(h.panel.pending_notice_count(), 2);

    assert!(h.panel.dismiss_notice().is_some());
    assert!(h.panel.dismiss_notice().is_some());
    assert!(h.panel.dismiss_notice().is_none());
    assert!(h.panel.current_notice().is_none());
}

#[test]
fn adding_preserves_selection_order_and_ignores_duplicates() {
    let mut h = Harness::new(6);

    h.select_source(&[4, 1]);
    h.send(PanelEvent::AddClicked);
    h.select_source(&[1, 2, 4]);
    h.send(PanelEvent::AddClicked);

    assert_eq!(h.pinned_ids(), vec![2, 5, 3]);
    assert_eq!(h.panel.pending_notice_count(), 0);
}

#[test]
fn list_length_equals_distinct_handles_added() {
    let mut h = Harness::new(8);
    let sequence: [&[usize]; 5] = [&[0], &[0, 3], &[7], &[3, 7], &[0, 5]];

    let mut distinct = std::collections::BTreeSet::new();
    for rows in sequence {
        h.select_source(rows);
        h.send(PanelEvent::AddClicked);
        distinct.extend(rows.iter().copied());
        assert_eq!(h.panel.model().row_count(), distinct.len());
    }
}

#[test]
fn page_follows_list_contents() {
    let mut h = Harness::new(3);
    assert_eq!(h.panel.page(), ViewPage::Help);

    h.select_source(&[0, 2]);
    h.send(PanelEvent::AddClicked);
    assert_eq!(h.panel.page(), ViewPage::View);

    h.select_spotlight(&[0]);
    h.send(PanelEvent::RemoveClicked);
    assert_eq!(h.panel.page(), ViewPage::View);
    assert_eq!(h.pinned_ids(), vec![3]);

    h.select_spotlight(&[0]);
    h.send(PanelEvent::RemoveClicked);
    assert_eq!(h.panel.page(), ViewPage::Help);
    assert!(h.panel.model().is_empty());
}

#[test]
fn removing_several_rows_resolves_handles_before_mutating() {
    let mut h = Harness::new(5);
    h.select_source(&[0, 1, 2, 3, 4]);
    h.send(PanelEvent::AddClicked);

    h.select_spotlight(&[1, 3, 4]);
    h.send(PanelEvent::RemoveClicked);

    assert_eq!(h.pinned_ids(), vec![1, 3]);
    assert!(h.panel.list_view().selection.is_empty());
}

#[test]
fn middle_press_on_source_pins_exactly_that_row() {
    let mut h = Harness::new(4);
    h.select_source(&[0, 1]);

    h.send(PanelEvent::SourcePressed {
        row: 3,
        button: MouseButton::Middle,
    });

    assert_eq!(h.pinned_ids(), vec![4]);
    assert_eq!(h.source.selection().rows().collect::<Vec<_>>(), vec![3]);
    assert_eq!(h.panel.page(), ViewPage::View);
}

#[test]
fn middle_press_on_spotlight_unpins_exactly_that_row() {
    let mut h = Harness::new(3);
    h.select_source(&[0, 1, 2]);
    h.send(PanelEvent::AddClicked);
    h.select_spotlight(&[0, 2]);

    h.send(PanelEvent::SpotlightPressed {
        row: 1,
        button: MouseButton::Middle,
    });

    assert_eq!(h.pinned_ids(), vec![1, 3]);
}

#[test]
fn other_buttons_are_ignored_by_press_shortcuts() {
    let mut h = Harness::new(2);
    for button in [
        MouseButton::Primary,
        MouseButton::Secondary,
        MouseButton::Extra1,
        MouseButton::Extra2,
    ] {
        h.send(PanelEvent::SourcePressed { row: 0, button });
        h.send(PanelEvent::SpotlightPressed { row: 0, button });
    }
    assert!(h.panel.model().is_empty());
    assert_eq!(h.panel.pending_notice_count(), 0);
}

#[test]
fn middle_press_outside_any_row_changes_nothing() {
    let mut h = Harness::new(3);
    h.select_source(&[0, 1, 2]);
    h.send(PanelEvent::AddClicked);
    h.select_spotlight(&[0]);

    h.send(PanelEvent::SpotlightPressed {
        row: 99,
        button: MouseButton::Middle,
    });
    assert_eq!(h.pinned_ids(), vec![1, 2, 3]);
    assert!(h.panel.list_view().selection.contains(0));

    h.select_source(&[0, 1]);
    h.send(PanelEvent::SourcePressed {
        row: 42,
        button: MouseButton::Middle,
    });
    assert_eq!(h.pinned_ids(), vec![1, 2, 3]);
    assert_eq!(h.source.selection().rows().collect::<Vec<_>>(), vec![0, 1]);

    assert_eq!(h.panel.pending_notice_count(), 0);
}

#[test]
fn middle_press_on_empty_spotlight_area_is_silent() {
    let mut h = Harness::new(2);
    h.send(PanelEvent::SpotlightPressed {
        row: 5,
        button: MouseButton::Middle,
    });
    assert_eq!(h.panel.pending_notice_count(), 0);
    assert_eq!(h.panel.page(), ViewPage::Help);
}

#[test]
fn realtime_toggle_persists_and_checks_button() {
    let mut h = Harness::new(2);
    assert!(!h.panel.is_realtime_checked());

    h.send(PanelEvent::RealtimeToggled(true));
    assert!(h.config.spotlight_realtime());
    assert!(h.panel.is_realtime_checked());
    assert!(h.panel.model().update_in_realtime());

    h.send(PanelEvent::RealtimeToggled(false));
    assert!(!h.config.spotlight_realtime());
    assert!(!h.panel.is_realtime_checked());
}

#[test]
fn persisted_realtime_preference_applies_at_construction() {
    let mut config = UserConfig::in_memory();
    config.set_spotlight_realtime(true);

    let mut source = MonitoringModel::new(vec![ComputerControlInterface::new(1, "PC-01", "10.1.0.1")]);
    let mut panel = SpotlightPanel::new(&mut config);
    assert!(panel.is_realtime_checked());

    source.select(0, SelectionMode::SelectCurrent);
    panel.handle_event(PanelEvent::AddClicked, &mut source, &mut config);
    assert_eq!(source.get(0).map(|c| c.update_mode()), Some(UpdateMode::Live));
}

#[test]
fn resize_updates_view_and_capture_size() {
    let mut h = Harness::new(1);
    h.select_source(&[0]);
    h.send(PanelEvent::AddClicked);

    h.send(PanelEvent::Resized(ListViewMetrics::new(300, 200, 2, 18)));

    assert_eq!(h.panel.icon_size(), IconSize::new(286, 168));
    assert_eq!(
        h.source.get(0).map(|c| c.scaled_screen_size()),
        Some(IconSize::new(286, 168))
    );

    h.send(PanelEvent::Resized(ListViewMetrics::new(8, 8, 2, 18)));
    assert_eq!(h.panel.icon_size(), IconSize::new(0, 0));
}

#[test]
fn computers_leaving_the_source_leave_the_spotlight() {
    let mut h = Harness::new(3);
    h.select_source(&[0, 1, 2]);
    h.send(PanelEvent::AddClicked);

    h.source.set_computers(Vec::new());
    assert_eq!(h.panel.sync_with_source(&h.source), 3);

    assert!(h.panel.model().is_empty());
    assert_eq!(h.panel.page(), ViewPage::Help);
}

#[test]
fn reloaded_list_drops_computers_by_host_not_position() {
    let mut source = MonitoringModel::new(
        parse_computer_list(r#"[{"name":"A","host":"a"},{"name":"B","host":"b"}]"#).unwrap(),
    );
    let mut config = UserConfig::in_memory();
    let mut panel = SpotlightPanel::new(&mut config);
    source.select(0, SelectionMode::SelectCurrent);
    panel.handle_event(PanelEvent::AddClicked, &mut source, &mut config);

    // B now sits at the first position and gets A's old sequence number.
    source.set_computers(parse_computer_list(r#"[{"name":"B","host":"b"}]"#).unwrap());
    assert_eq!(panel.sync_with_source(&source), 1);
    assert!(panel.model().is_empty());
    assert_eq!(panel.page(), ViewPage::Help);

    source.select(0, SelectionMode::SelectCurrent);
    panel.handle_event(PanelEvent::AddClicked, &mut source, &mut config);
    let hosts: Vec<_> = panel.model().iter().map(|c| c.host().to_owned()).collect();
    assert_eq!(hosts, vec!["b"]);
}

#[test]
fn reloaded_list_keeps_surviving_computers_pinned() {
    let mut source = MonitoringModel::new(
        parse_computer_list(r#"[{"name":"A","host":"a"},{"name":"B","host":"b"}]"#).unwrap(),
    );
    let mut config = UserConfig::in_memory();
    let mut panel = SpotlightPanel::new(&mut config);
    source.select(1, SelectionMode::SelectCurrent);
    panel.handle_event(PanelEvent::AddClicked, &mut source, &mut config);
    panel.handle_event(PanelEvent::RealtimeToggled(true), &mut source, &mut config);

    source.set_computers(parse_computer_list(r#"[{"name":"B (lab 2)","host":"B"}]"#).unwrap());
    assert_eq!(panel.sync_with_source(&source), 0);

    let names: Vec<_> = panel.model().iter().map(|c| c.name().to_owned()).collect();
    assert_eq!(names, vec!["B (lab 2)"]);
    assert_eq!(source.get(0).map(|c| c.update_mode()), Some(UpdateMode::Live));
}

#[test]
fn selection_follows_rows_when_earlier_computers_leave() {
    let mut h = Harness::new(3);
    h.select_source(&[0, 1, 2]);
    h.send(PanelEvent::AddClicked);
    h.select_spotlight(&[2]);

    let survivors: Vec<_> = h.source.iter().skip(1).cloned().collect();
    h.source.set_computers(survivors);
    assert_eq!(h.panel.sync_with_source(&h.source), 1);

    assert_eq!(h.pinned_ids(), vec![2, 3]);
    let selected: Vec<_> = h.panel.list_view().selection.rows().collect();
    assert_eq!(selected, vec![1]);

    h.send(PanelEvent::RemoveClicked);
    assert_eq!(h.pinned_ids(), vec![2]);
    assert_eq!(h.panel.pending_notice_count(), 0);
}
