//! Bottom status bar: computer counts, spotlight state, and transient messages.

use spotlight::core::spotlight_panel::ViewPage;
use crate::app::SpotlightApp;
use crate::ui::theme;

impl SpotlightApp {
    /// Render the status bar at the bottom of the window.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{} computers", self.monitoring.row_count()))
                    .color(theme::text_secondary(dark)),
            );
            ui.separator();

            let pinned = self.spotlight.model().row_count();
            ui.label(
                egui::RichText::new(format!("{pinned} in spotlight"))
                    .color(theme::text_secondary(dark)),
            );
            let selected = self.spotlight.list_view().selection.len();
            if selected > 0 {
                ui.label(
                    egui::RichText::new(format!("({selected} selected)"))
                        .color(theme::text_dim(dark)),
                );
            }
            ui.separator();

            if self.spotlight.page() == ViewPage::View {
                let size = self.spotlight.icon_size();
                ui.label(
                    egui::RichText::new(format!("Thumbnail {}×{}", size.width, size.height))
                        .color(theme::text_dim(dark)),
                );
                ui.separator();
            }

            if self.spotlight.is_realtime_checked() {
                ui.label(egui::RichText::new("● Realtime").color(theme::LIVE_BADGE));
            } else {
                ui.label(egui::RichText::new("Ready").color(theme::ACCENT_DIM));
            }

            if let Some((text, _)) = &self.status_message {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(text).color(theme::text_secondary(dark)));
                });
            }
        });
    }
}
