// src/api/error.rs
use thiserror::Error;

/// Shown when the server reports failure without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Shown when the request fails without a structured message.
pub const TRANSPORT_FALLBACK: &str = "Failed to run analysis";

/// Both kinds display only the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The server answered with a falsy `success` flag.
    #[error("{message}")]
    Application { message: String },

    /// Network failure, non-2xx status or malformed body. `cause` is for the log.
    #[error("{message}")]
    Transport { message: String, cause: String },
}

impl AnalysisError {
    pub fn application(message: Option<String>) -> Self {
        Self::Application {
            message: non_empty(message).unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        }
    }

    pub fn transport(message: Option<String>, cause: impl Into<String>) -> Self {
        Self::Transport {
            message: non_empty(message).unwrap_or_else(|| TRANSPORT_FALLBACK.to_string()),
            cause: cause.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Application { .. } => "application",
            Self::Transport { .. } => "transport",
        }
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Application { .. } => None,
            Self::Transport { cause, .. } => Some(cause),
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_uses_server_message() {
        let err = AnalysisError::application(Some("bad sentiment".into()));
        assert_eq!(err.to_string(), "bad sentiment");
        assert_eq!(err.kind(), "application");
    }

    #[test]
    fn missing_or_empty_messages_fall_back() {
        assert_eq!(AnalysisError::application(None).to_string(), UNKNOWN_ERROR);
        assert_eq!(AnalysisError::application(Some(String::new())).to_string(), UNKNOWN_ERROR);
        assert_eq!(
            AnalysisError::transport(None, "connection refused").to_string(),
            TRANSPORT_FALLBACK
        );
    }

    #[test]
    fn transport_cause_stays_out_of_display() {
        let err = AnalysisError::transport(Some("rate limited".into()), "server returned 429");
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(err.cause(), Some("server returned 429"));
    }
}
