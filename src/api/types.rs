// src/api/types.rs
use serde::{Serialize, Deserialize};
use serde_json::Value;

/// Body of `POST /api/analyze-stocks`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeStocksRequest {
    pub search_params: SearchParams,
    pub open_ai_prompt_template: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchParams {
    pub keywords: String,
    pub sentiment_gte: String,
    pub industries: String,
}

// Unknown fields are ignored; the server may send more than this.
#[derive(Debug, Deserialize)]
pub struct AnalyzeStocksResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(default, rename = "topPicks")]
    pub top_picks: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl AnalyzeStocksResponse {
    pub fn succeeded(&self) -> bool {
        is_truthy(&self.success)
    }

    pub fn message_text(&self) -> Option<String> {
        message_text(self.message.as_ref())
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorEnvelope {
    pub fn message_text(&self) -> Option<String> {
        message_text(self.message.as_ref())
    }
}

/// JSON truthiness: `false`, `0`, `""` and `null` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_text(message: Option<&Value>) -> Option<String> {
    match message? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
