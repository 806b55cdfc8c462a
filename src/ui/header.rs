// src/ui/header.rs
use eframe::egui;
use tracing::info;
use crate::state::AppState;

pub fn show_header(ui: &mut egui::Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui| {
        ui.strong("Stock Rocket");

        if state.options.themable {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(state.theme.toggle_label()).clicked() {
                    let theme = state.toggle_theme();
                    info!(?theme, "theme changed");
                }
            });
        }
    });
}
