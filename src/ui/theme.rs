//! Colour palette and style helpers for Spotlight's dark and light themes.

use egui::Color32;

// ── Background colours ──────────────────────────────────────────────────

/// Main window background.
pub const BG_DARK: Color32 = Color32::from_rgb(30, 30, 46);

/// Panel / sidebar background.
pub const BG_PANEL: Color32 = Color32::from_rgb(36, 36, 54);

/// Even rows in the computer table.
pub const BG_TABLE_ROW_EVEN: Color32 = Color32::from_rgb(32, 32, 48);

/// Currently selected / highlighted row.
pub const BG_SELECTED: Color32 = Color32::from_rgb(55, 55, 95);

/// Thumbnail placeholder fill.
pub const BG_TILE: Color32 = Color32::from_rgb(22, 22, 34);

// ── Text colours ────────────────────────────────────────────────────────

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(205, 205, 215);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(140, 140, 160);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 100, 120);

// ── Accent colours ──────────────────────────────────────────────────────

/// Primary accent (teal).
pub const ACCENT: Color32 = Color32::from_rgb(80, 200, 220);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(60, 150, 170);

/// Badge colour for computers refreshing in realtime.
pub const LIVE_BADGE: Color32 = Color32::from_rgb(224, 108, 96);

// ── Mode-aware helpers ──────────────────────────────────────────────────

pub fn accent(dark: bool) -> Color32 {
    if dark {
        ACCENT
    } else {
        Color32::from_rgb(20, 130, 150)
    }
}

pub fn text_primary(dark: bool) -> Color32 {
    if dark {
        TEXT_PRIMARY
    } else {
        Color32::from_rgb(40, 40, 50)
    }
}

pub fn text_secondary(dark: bool) -> Color32 {
    if dark {
        TEXT_SECONDARY
    } else {
        Color32::from_rgb(90, 90, 110)
    }
}

pub fn text_dim(dark: bool) -> Color32 {
    if dark {
        TEXT_DIM
    } else {
        Color32::from_rgb(130, 130, 145)
    }
}

pub fn tile_fill(dark: bool) -> Color32 {
    if dark {
        BG_TILE
    } else {
        Color32::from_rgb(228, 228, 236)
    }
}

/// Apply the dark or light theme to the given egui context.
pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    if dark {
        apply_dark_theme(ctx);
    } else {
        apply_light_theme(ctx);
    }
}

/// Apply the Spotlight dark theme.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_TABLE_ROW_EVEN;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(45, 45, 65);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(40, 40, 60);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 55, 80);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_fill = Color32::from_rgb(65, 65, 95);
    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(50, 50, 70));

    ctx.set_visuals(visuals);
}

/// Apply the Spotlight light theme.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = Color32::from_rgb(245, 245, 248);
    visuals.window_fill = Color32::from_rgb(250, 250, 252);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(238, 238, 242);
    visuals.override_text_color = Some(Color32::from_rgb(40, 40, 50));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(225, 225, 232);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(230, 230, 236);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(210, 210, 220);
    visuals.widgets.active.bg_fill = Color32::from_rgb(195, 195, 210);

    visuals.selection.bg_fill = Color32::from_rgb(180, 215, 235);
    visuals.selection.stroke = egui::Stroke::new(1.0, Color32::from_rgb(40, 160, 180));

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(200, 200, 210));

    ctx.set_visuals(visuals);
}
