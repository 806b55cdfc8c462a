// src/config/theme.rs
use eframe::egui;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    /// Label for the toggle, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark mode",
            Theme::Dark => "☀ Light mode",
        }
    }
}
