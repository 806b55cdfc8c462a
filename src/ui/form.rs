// src/ui/form.rs
use eframe::egui;
use crate::state::AppState;
use crate::state::form::{step_sentiment, DATA_PLACEHOLDER, SENTIMENT_STEP};

/// Draw the search form. Returns true when "Run Analysis" was clicked.
pub fn show_form_view(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let loading = state.request.is_loading();
    let form = &mut state.form;

    ui.heading("📈 AI Stock Recommender");
    ui.add_space(12.0);

    text_field(
        ui,
        "Keywords",
        &mut form.params.keywords,
        "Comma separated keywords for Marketaux",
    );

    // Sentiment stays free text; only the stepper keeps to 0–1
    ui.label("Sentiment (0–1)");
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.params.sentiment)
                .desired_width(80.0)
        );
        if ui.small_button("−").clicked() {
            form.params.sentiment = step_sentiment(&form.params.sentiment, -SENTIMENT_STEP);
        }
        if ui.small_button("+").clicked() {
            form.params.sentiment = step_sentiment(&form.params.sentiment, SENTIMENT_STEP);
        }
    });
    ui.weak("Minimum sentiment score");
    ui.add_space(8.0);

    text_field(
        ui,
        "Industries",
        &mut form.params.industries,
        "Comma separated industries to filter",
    );

    ui.label("OpenAI Prompt Template");
    ui.add(
        egui::TextEdit::multiline(&mut form.prompt.text)
            .desired_rows(8)
            .desired_width(f32::INFINITY)
    );
    ui.weak(format!("Use '{}' where the news digest will be inserted", DATA_PLACEHOLDER));
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let clicked = ui
            .add_enabled(
                !loading,
                egui::Button::new("Run Analysis").min_size(egui::vec2(160.0, 32.0)),
            )
            .clicked();
        if loading {
            ui.add(egui::Spinner::new().size(24.0));
        }
        clicked
    })
    .inner
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, helper: &str) {
    ui.label(label);
    ui.add_sized(
        [ui.available_width(), 20.0],
        egui::TextEdit::singleline(value)
    );
    ui.weak(helper);
    ui.add_space(8.0);
}
