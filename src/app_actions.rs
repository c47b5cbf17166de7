//! Extended actions for [`SpotlightApp`]: keyboard shortcuts, computer list
//! import/reload, the notice modal and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use spotlight::core::computer_list;
use spotlight::core::spotlight_panel::PanelEvent;
use spotlight::util::constants;
use crate::app::SpotlightApp;

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl SpotlightApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - `Insert`: add the selected computers to the spotlight
    /// - `Delete`: remove the selected spotlight entries
    /// - `Ctrl+R`: toggle realtime view
    /// - `Ctrl+O`: open a computer list file
    /// - `F5`: reload the computer list
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Keys belong to the modal while a notice is open.
        if self.spotlight.current_notice().is_some() {
            return;
        }

        let (insert, delete, toggle, open, reload) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Insert),
                i.key_pressed(egui::Key::Delete),
                i.modifiers.command && i.key_pressed(egui::Key::R),
                i.modifiers.command && i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::F5),
            )
        });

        if insert {
            self.push_event(PanelEvent::AddClicked);
        }
        if delete {
            self.push_event(PanelEvent::RemoveClicked);
        }
        if toggle {
            let enabled = !self.spotlight.is_realtime_checked();
            self.push_event(PanelEvent::RealtimeToggled(enabled));
        }
        if open {
            self.open_computer_list();
        }
        if reload {
            self.reload_computer_list();
        }
    }
}

// ── Computer list import ────────────────────────────────────────────────

impl SpotlightApp {
    /// Open a native file dialog (on a background thread) to choose a
    /// computer list. The chosen path is sent back via `import_rx`.
    ///
    /// A second call while the dialog is open is a no-op.
    pub fn open_computer_list(&mut self) {
        if self.import_rx.is_some() {
            tracing::debug!("open_computer_list: dialog already open, ignoring duplicate call");
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<std::path::PathBuf>(1);
        self.import_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Computer list", &["json"])
                .pick_file()
            {
                let _ = tx.send(path);
            }
            // Dropping `tx` without sending tells the UI the dialog closed.
        });
    }

    /// Poll the import channel for a user-chosen path.
    pub(crate) fn process_import_selection(&mut self) {
        let path = {
            let Some(rx) = &self.import_rx else {
                return;
            };
            match rx.try_recv() {
                Ok(p) => p,
                Err(crossbeam_channel::TryRecvError::Empty) => return,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.import_rx = None;
                    return;
                }
            }
        };
        self.import_rx = None;
        self.load_computer_list_from(path);
    }

    /// Load computers from `path` and make it the reload source.
    pub fn load_computer_list_from(&mut self, path: std::path::PathBuf) {
        match computer_list::load_computer_list(&path) {
            Ok(computers) => {
                let count = computers.len();
                self.replace_computers(computers);
                self.set_status(format!("Loaded {count} computers from {}", path.display()));
                self.computers_path = Some(path);
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                self.set_status(format!("Could not load computer list: {e}"));
            }
        }
    }

    /// Re-read the current computer list file.
    pub fn reload_computer_list(&mut self) {
        match self.computers_path.clone() {
            Some(path) if path.exists() => self.load_computer_list_from(path),
            _ => {
                self.replace_computers(computer_list::demo_computers());
                self.set_status("No computer list file; showing demo computers");
            }
        }
    }
}

// ── Dialogs ─────────────────────────────────────────────────────────────

impl SpotlightApp {
    /// Show the oldest pending notice as a blocking modal.
    pub fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.spotlight.current_notice().cloned() else {
            return;
        };

        let dark = self.dark_mode;
        let mut dismissed = false;
        let response = egui::Modal::new(egui::Id::new("spotlight_notice")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(
                egui::RichText::new(&notice.title)
                    .color(crate::ui::theme::accent(dark))
                    .strong()
                    .size(16.0),
            );
            ui.add_space(8.0);
            ui.label(&notice.text);
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        let enter = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if dismissed || enter || response.should_close() {
            self.spotlight.dismiss_notice();
        }
    }

    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(constants::APP_NAME)
                            .color(crate::ui::theme::accent(self.dark_mode))
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                    ui.label("Pin monitored computers into a focused live view");
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new("Middle-click a computer to add or remove it.")
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}
