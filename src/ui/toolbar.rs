//! Top toolbar: computer list source, theme toggle, and About.

use crate::app::SpotlightApp;
use crate::ui::theme;

impl SpotlightApp {
    /// Render the top toolbar within the given `Ui` region.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            if ui
                .button("📂 Open computer list…")
                .on_hover_text("Load monitored computers from a JSON file (Ctrl+O)")
                .clicked()
            {
                self.open_computer_list();
            }

            if ui
                .button("🔄 Reload")
                .on_hover_text("Re-read the computer list (F5)")
                .clicked()
            {
                self.reload_computer_list();
            }

            if let Some(path) = &self.computers_path {
                ui.label(
                    egui::RichText::new(path.display().to_string())
                        .color(theme::text_dim(self.dark_mode))
                        .small(),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("ℹ About").clicked() {
                    self.show_about = !self.show_about;
                }

                let theme_label = if self.dark_mode { "☀ Light" } else { "🌙 Dark" };
                if ui.button(theme_label).clicked() {
                    self.dark_mode = !self.dark_mode;
                    theme::apply_theme(ui.ctx(), self.dark_mode);
                }
            });
        });
    }
}
