// src/state/request.rs
use crate::api::AnalysisError;

/// Exactly one of these holds at a time, so a result and an error are
/// never shown together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisRequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl AnalysisRequestState {
    /// Enter `Loading`, dropping any previous result or error.
    /// Returns false if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Self::Loading;
        true
    }

    pub fn resolve(&mut self, outcome: Result<String, AnalysisError>) {
        *self = match outcome {
            Ok(top_picks) => Self::Succeeded(top_picks),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn result_lines(&self) -> Vec<&str> {
        match self {
            Self::Succeeded(text) => top_pick_lines(text),
            _ => Vec::new(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One list entry per non-blank line.
pub fn top_pick_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::TRANSPORT_FALLBACK;

    #[test]
    fn starts_idle() {
        let state = AnalysisRequestState::default();
        assert_eq!(state, AnalysisRequestState::Idle);
        assert!(state.result_lines().is_empty());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut state = AnalysisRequestState::Succeeded("1. AAPL".into());
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(state.result_lines().is_empty());

        let mut state = AnalysisRequestState::Failed("boom".into());
        assert!(state.begin());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn begin_is_refused_while_loading() {
        let mut state = AnalysisRequestState::Loading;
        assert!(!state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn success_renders_non_blank_lines() {
        let mut state = AnalysisRequestState::Loading;
        state.resolve(Ok("1. AAPL\n\n2. MSFT".into()));
        assert!(!state.is_loading());
        assert_eq!(state.result_lines(), vec!["1. AAPL", "2. MSFT"]);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        assert_eq!(top_pick_lines("a\r\n   \n\tb\n"), vec!["a", "\tb"]);
        assert!(top_pick_lines("").is_empty());
    }

    #[test]
    fn failures_show_only_the_message() {
        let mut state = AnalysisRequestState::Loading;
        state.resolve(Err(AnalysisError::application(Some("bad sentiment".into()))));
        assert_eq!(state.error_message(), Some("bad sentiment"));
        assert!(state.result_lines().is_empty());

        state.begin();
        state.resolve(Err(AnalysisError::transport(None, "connection reset")));
        assert_eq!(state.error_message(), Some(TRANSPORT_FALLBACK));
    }
}
