//! Top-level application state and `eframe::App` implementation.
//!
//! `SpotlightApp` owns the user configuration, the source monitoring model
//! and the spotlight panel controller. Rendering is delegated to panel
//! sub-modules in `ui/`; those only collect [`PanelEvent`]s, which are
//! dispatched to the controller once per frame after layout.

use std::path::PathBuf;

use crossbeam_channel::Receiver;

use spotlight::core::computer::ControlInterfacePointer;
use spotlight::core::computer_list;
use spotlight::core::geometry::ListViewMetrics;
use spotlight::core::monitoring_model::MonitoringModel;
use spotlight::core::spotlight_panel::{PanelEvent, SpotlightPanel};
use spotlight::core::user_config::UserConfig;
use spotlight::util::paths;

// ── Pre-init ────────────────────────────────────────────────────────────

/// Everything that touches the filesystem, prepared before the window
/// opens.
pub struct PreInitState {
    pub config: UserConfig,
    pub computers: Vec<ControlInterfacePointer>,
    pub computers_path: Option<PathBuf>,
}

impl PreInitState {
    pub fn build() -> Self {
        let config = match paths::config_file() {
            Some(path) => UserConfig::load_or_default(path),
            None => {
                tracing::warn!("No config directory available; settings will not persist");
                UserConfig::in_memory()
            }
        };

        match config.path() {
            Some(path) => tracing::info!("Settings file: {}", path.display()),
            None => tracing::info!("Settings are kept in memory only"),
        }

        let computers_path = paths::computers_file();
        let computers = computer_list::load_or_demo(computers_path.as_deref());

        Self {
            config,
            computers,
            computers_path,
        }
    }
}

// ── App state ───────────────────────────────────────────────────────────

pub struct SpotlightApp {
    // ── Models ──────────────────────────────────────────────────
    /// Persisted user preferences.
    pub config: UserConfig,
    /// All monitored computers and the source-list selection.
    pub monitoring: MonitoringModel,
    /// The spotlight panel controller.
    pub spotlight: SpotlightPanel,
    /// Where the computer list was loaded from, for reloads.
    pub computers_path: Option<PathBuf>,

    // ── Event dispatch ──────────────────────────────────────────
    /// Events collected while rendering this frame.
    pub pending_events: Vec<PanelEvent>,
    /// Spotlight list-view geometry reported on the previous frame.
    pub last_view_metrics: Option<ListViewMetrics>,

    // ── Status ──────────────────────────────────────────────────
    /// Transient status message (shown briefly in the status bar).
    pub status_message: Option<(String, std::time::Instant)>,

    // ── Dialogs ─────────────────────────────────────────────────
    pub show_about: bool,
    /// Receiver for a computer list path chosen in the open dialog.
    pub import_rx: Option<Receiver<PathBuf>>,

    // ── Theme ───────────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl SpotlightApp {
    /// Build the app from pre-loaded state and restore persisted UI
    /// preferences.
    pub fn from_pre_init(cc: &eframe::CreationContext<'_>, pre_init: PreInitState) -> Self {
        let PreInitState {
            mut config,
            computers,
            computers_path,
        } = pre_init;

        let spotlight = SpotlightPanel::new(&mut config);

        let mut app = Self {
            config,
            monitoring: MonitoringModel::new(computers),
            spotlight,
            computers_path,
            pending_events: Vec::new(),
            last_view_metrics: None,
            status_message: None,
            show_about: false,
            import_rx: None,
            dark_mode: true,
        };

        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, "dark_mode") {
                app.dark_mode = dark;
            }
        }
        crate::ui::theme::apply_theme(&cc.egui_ctx, app.dark_mode);

        app
    }

    /// Queue an event for dispatch at the end of the frame.
    pub fn push_event(&mut self, event: PanelEvent) {
        self.pending_events.push(event);
    }

    /// Hand queued events to the spotlight controller.
    ///
    /// While a notice is showing the panel is blocked, so input collected
    /// underneath the modal is discarded.
    fn dispatch_events(&mut self) {
        let events = std::mem::take(&mut self.pending_events);
        for event in events {
            if self.spotlight.current_notice().is_some() && event.is_blocked_by_notice() {
                tracing::debug!("Discarding {:?} while a notice is open", event);
                continue;
            }
            self.spotlight
                .handle_event(event, &mut self.monitoring, &mut self.config);
        }
    }

    /// Replace the monitored computers, dropping spotlight entries that
    /// are no longer present.
    pub fn replace_computers(&mut self, computers: Vec<ControlInterfacePointer>) {
        self.monitoring.set_computers(computers);
        let dropped = self.spotlight.sync_with_source(&self.monitoring);
        if dropped > 0 {
            tracing::info!("{} spotlight entries no longer monitored", dropped);
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some((text.into(), std::time::Instant::now()));
    }
}

// ── eframe::App implementation ──────────────────────────────────────────

impl eframe::App for SpotlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Computer list chosen in the open dialog
        self.process_import_selection();

        // 2. Model notifications
        self.spotlight.process_model_events();

        // 3. Keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(26.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Left source computer list ───────────────────────────────
        egui::SidePanel::left("computer_list")
            .resizable(true)
            .default_width(300.0)
            .min_width(200.0)
            .max_width(500.0)
            .show(ctx, |ui| {
                self.render_computer_table(ui);
            });

        // ── Central spotlight panel ─────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_spotlight_panel(ui);
        });

        // ── Floating popups ─────────────────────────────────────────
        self.render_notice(ctx);
        self.render_about_dialog(ctx);

        // 4. Apply this frame's input
        let notices_before = self.spotlight.pending_notice_count();
        let had_events = !self.pending_events.is_empty();
        self.dispatch_events();
        if had_events || self.spotlight.pending_notice_count() != notices_before {
            // State changed after layout; draw it now rather than on the
            // next input.
            ctx.request_repaint();
        }

        // 5. Expire transient status messages
        if let Some((_, shown)) = &self.status_message {
            let ttl = std::time::Duration::from_secs(spotlight::util::constants::STATUS_MESSAGE_SECS);
            if shown.elapsed() >= ttl {
                self.status_message = None;
            } else {
                ctx.request_repaint_after(ttl);
            }
        }
    }

    /// Persist UI preferences to eframe storage on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "dark_mode", &self.dark_mode);
    }
}
