//! The spotlight panel: Add/Remove/Realtime controls above a two-page area
//! showing either usage help or the pinned computers' thumbnails.

use spotlight::core::computer::UpdateMode;
use spotlight::core::geometry::ListViewMetrics;
use spotlight::core::list_view::MouseButton;
use spotlight::core::spotlight_model::Role;
use spotlight::core::spotlight_panel::{PanelEvent, ViewPage};
use spotlight::util::constants::DEFAULT_LIST_SPACING;
use crate::app::SpotlightApp;
use crate::ui::{input, theme};

impl SpotlightApp {
    /// Render the spotlight panel in the central area.
    pub fn render_spotlight_panel(&mut self, ui: &mut egui::Ui) {
        self.render_spotlight_header(ui);
        ui.separator();

        self.report_view_geometry(ui);

        match self.spotlight.page() {
            ViewPage::Help => self.render_spotlight_help(ui),
            ViewPage::View => self.render_spotlight_list(ui),
        }
    }

    fn render_spotlight_header(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            ui.label(
                egui::RichText::new("Spotlight")
                    .color(theme::accent(dark))
                    .strong()
                    .size(16.0),
            );
            ui.separator();

            if ui
                .button("➕ Add")
                .on_hover_text("Add the selected computers (Insert)")
                .clicked()
            {
                self.push_event(PanelEvent::AddClicked);
            }
            if ui
                .button("➖ Remove")
                .on_hover_text("Remove the selected spotlight entries (Delete)")
                .clicked()
            {
                self.push_event(PanelEvent::RemoveClicked);
            }

            let mut realtime = self.spotlight.is_realtime_checked();
            if ui
                .toggle_value(&mut realtime, "⏵ Realtime view")
                .on_hover_text("Refresh thumbnails continuously (Ctrl+R)")
                .changed()
            {
                self.push_event(PanelEvent::RealtimeToggled(realtime));
            }
        });
    }

    /// Report the list area's geometry to the controller when it changes.
    fn report_view_geometry(&mut self, ui: &egui::Ui) {
        let available = ui.available_size();
        let label_height = ui.text_style_height(&egui::TextStyle::Body).ceil() as i32;
        let metrics = ListViewMetrics::new(
            available.x.floor() as i32,
            available.y.floor() as i32,
            DEFAULT_LIST_SPACING,
            label_height,
        );

        if self.last_view_metrics != Some(metrics) {
            self.last_view_metrics = Some(metrics);
            self.push_event(PanelEvent::Resized(metrics));
        }
    }

    fn render_spotlight_help(&self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(
                egui::RichText::new("No computers in the spotlight")
                    .color(theme::text_primary(dark))
                    .size(18.0),
            );
            ui.add_space(8.0);
            for line in [
                "Select one or more computers on the left and click “Add”,",
                "or middle-click a computer to add it directly.",
                "Middle-click a spotlight entry to remove it again.",
            ] {
                ui.label(egui::RichText::new(line).color(theme::text_secondary(dark)));
            }
        });
    }

    fn render_spotlight_list(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let icon = self.spotlight.icon_size();
        let spacing = DEFAULT_LIST_SPACING as f32;
        let label_height = ui.text_style_height(&egui::TextStyle::Body);
        let tile_size = egui::vec2(
            icon.width as f32 + 2.0 * spacing,
            icon.height as f32 + label_height + 2.0 * spacing,
        );

        let mut clicked: Option<usize> = None;
        let mut pressed: Option<(usize, MouseButton)> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let model = self.spotlight.model();
                for (row, computer) in model.iter().enumerate() {
                    let text = |role| {
                        model
                            .data(row, role)
                            .and_then(|d| d.as_text().map(str::to_owned))
                            .unwrap_or_default()
                    };
                    let (rect, response) = ui.allocate_exact_size(tile_size, egui::Sense::click());
                    let selected = self.spotlight.list_view().selection.contains(row);
                    let painter = ui.painter_at(rect);

                    if selected {
                        painter.rect_filled(rect, 4.0, ui.visuals().selection.bg_fill);
                    }

                    let thumb = egui::Rect::from_min_size(
                        rect.min + egui::vec2(spacing, spacing),
                        egui::vec2(icon.width as f32, icon.height as f32),
                    );
                    painter.rect_filled(thumb, 2.0, theme::tile_fill(dark));
                    painter.text(
                        thumb.center(),
                        egui::Align2::CENTER_CENTER,
                        computer.host(),
                        egui::FontId::proportional(14.0),
                        theme::text_dim(dark),
                    );
                    if computer.update_mode() == UpdateMode::Live {
                        painter.text(
                            thumb.right_top() + egui::vec2(-6.0, 6.0),
                            egui::Align2::RIGHT_TOP,
                            "● LIVE",
                            egui::FontId::proportional(12.0),
                            theme::LIVE_BADGE,
                        );
                    }
                    painter.text(
                        egui::pos2(rect.center().x, thumb.bottom() + label_height / 2.0),
                        egui::Align2::CENTER_CENTER,
                        text(Role::Display),
                        egui::FontId::proportional(label_height * 0.8),
                        theme::text_primary(dark),
                    );

                    let response = response.on_hover_text(text(Role::ToolTip));
                    if let Some(button) = input::pressed_button(&response) {
                        pressed = Some((row, button));
                    }
                    if response.clicked() {
                        clicked = Some(row);
                    }
                }
            });

        if let Some(row) = clicked {
            let mode = input::click_selection_mode(ui.ctx());
            self.spotlight.list_view_mut().selection.select(row, mode);
        }
        if let Some((row, button)) = pressed {
            self.push_event(PanelEvent::SpotlightPressed { row, button });
        }
    }
}
