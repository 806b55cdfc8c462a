// src/state/mod.rs
use crate::api::{AnalysisError, AnalyzeStocksRequest};
use crate::config::{Settings, Theme};

pub mod form;
pub mod request;

pub use form::SearchForm;
pub use request::AnalysisRequestState;

/// Options for the single form, replacing the plain and themed copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    pub themable: bool,
}

impl From<&Settings> for FormOptions {
    fn from(settings: &Settings) -> Self {
        Self { themable: settings.themable }
    }
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub form: SearchForm,
    pub request: AnalysisRequestState,
    pub theme: Theme,
    pub options: FormOptions,
}

impl AppState {
    pub fn new(options: FormOptions, theme: Theme) -> Self {
        Self {
            form: SearchForm::default(),
            request: AnalysisRequestState::default(),
            theme,
            options,
        }
    }

    /// Move to `Loading` and return the request to send, or `None` while
    /// one is already in flight.
    pub fn submit(&mut self) -> Option<AnalyzeStocksRequest> {
        if !self.request.begin() {
            return None;
        }
        Some(self.form.to_request())
    }

    pub fn resolve(&mut self, outcome: Result<String, AnalysisError>) {
        self.request.resolve(outcome);
    }

    /// Flip light/dark. Ignored when the form is not themable.
    pub fn toggle_theme(&mut self) -> Theme {
        if self.options.themable {
            self.theme = self.theme.toggled();
        }
        self.theme
    }
}
