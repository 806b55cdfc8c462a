// src/ui/results.rs
use eframe::egui;
use crate::state::AnalysisRequestState;

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

pub fn show_results(ui: &mut egui::Ui, request: &AnalysisRequestState) {
    match request {
        AnalysisRequestState::Idle | AnalysisRequestState::Loading => {},
        AnalysisRequestState::Succeeded(_) => {
            ui.add_space(16.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(SUCCESS_COLOR, "Top Picks");
                ui.add_space(4.0);
                for line in request.result_lines() {
                    ui.label(format!("• {}", line));
                }
            });
        },
        AnalysisRequestState::Failed(message) => {
            ui.add_space(16.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, message.as_str());
            });
        },
    }
}
