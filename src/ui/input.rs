//! Translating egui pointer input into toolkit-independent events.

use spotlight::core::list_view::{MouseButton, SelectionMode};

pub fn to_mouse_button(button: egui::PointerButton) -> MouseButton {
    match button {
        egui::PointerButton::Primary => MouseButton::Primary,
        egui::PointerButton::Secondary => MouseButton::Secondary,
        egui::PointerButton::Middle => MouseButton::Middle,
        egui::PointerButton::Extra1 => MouseButton::Extra1,
        egui::PointerButton::Extra2 => MouseButton::Extra2,
    }
}

const BUTTONS: [egui::PointerButton; 5] = [
    egui::PointerButton::Primary,
    egui::PointerButton::Secondary,
    egui::PointerButton::Middle,
    egui::PointerButton::Extra1,
    egui::PointerButton::Extra2,
];

/// The button that went down over `response` this frame, if any.
pub fn pressed_button(response: &egui::Response) -> Option<MouseButton> {
    if !response.hovered() {
        return None;
    }
    response.ctx.input(|i| {
        BUTTONS
            .into_iter()
            .find(|&b| i.pointer.button_pressed(b))
            .map(to_mouse_button)
    })
}

/// Selection mode for a plain click: Ctrl/Cmd extends, otherwise replaces.
pub fn click_selection_mode(ctx: &egui::Context) -> SelectionMode {
    if ctx.input(|i| i.modifiers.command) {
        SelectionMode::Toggle
    } else {
        SelectionMode::SelectCurrent
    }
}
