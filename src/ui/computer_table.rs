//! Source list of monitored computers.
//!
//! Uses `egui_extras::TableBuilder` for column layout and virtual scrolling.
//! Clicking a row selects it (Ctrl/Cmd-click extends the selection); a
//! middle-button press is forwarded to the spotlight panel as a shortcut.

use egui_extras::{Column, TableBuilder};

use spotlight::core::computer::UpdateMode;
use spotlight::core::list_view::MouseButton;
use spotlight::core::spotlight_panel::PanelEvent;
use spotlight::util::constants::TABLE_ROW_HEIGHT;
use crate::app::SpotlightApp;
use crate::ui::{input, theme};

impl SpotlightApp {
    /// Render the computer table in the left side panel.
    pub fn render_computer_table(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Computers")
                .color(theme::accent(dark))
                .strong(),
        );
        ui.label(
            egui::RichText::new("Select computers, then click “Add”. Middle-click adds one directly.")
                .color(theme::text_dim(dark))
                .small(),
        );
        ui.add_space(4.0);

        let mut clicked: Option<usize> = None;
        let mut pressed: Option<(usize, MouseButton)> = None;
        let row_count = self.monitoring.row_count();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(110.0).clip(true)) // Name
            .column(Column::remainder().clip(true)) // Host
            .sense(egui::Sense::click())
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Host");
                });
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, row_count, |mut row| {
                    let idx = row.index();
                    let Some(computer) = self.monitoring.get(idx) else {
                        return;
                    };
                    let pinned = self.spotlight.model().contains(computer);
                    row.set_selected(self.monitoring.is_selected(idx));

                    row.col(|ui| {
                        let mut name = egui::RichText::new(computer.name());
                        if pinned {
                            name = name.color(theme::accent(dark));
                        }
                        ui.label(name);
                        if computer.update_mode() == UpdateMode::Live {
                            ui.label(egui::RichText::new("●").color(theme::LIVE_BADGE).small());
                        }
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(computer.host()).color(theme::text_secondary(dark)),
                        );
                    });

                    let response = row.response();
                    if let Some(button) = input::pressed_button(&response) {
                        pressed = Some((idx, button));
                    }
                    if response.clicked() {
                        clicked = Some(idx);
                    }
                });
            });

        if let Some(idx) = clicked {
            let mode = input::click_selection_mode(ui.ctx());
            self.monitoring.select(idx, mode);
        }
        if let Some((row, button)) = pressed {
            self.push_event(PanelEvent::SourcePressed { row, button });
        }
    }
}
