// src/state/form.rs
use crate::api::{AnalyzeStocksRequest, SearchParams};

pub const DEFAULT_KEYWORDS: &str = "undervalued";
pub const DEFAULT_SENTIMENT: &str = "0.7";
pub const DEFAULT_INDUSTRIES: &str = "Technology,Healthcare,Consumer,Energy,Financial";

/// Placeholder the server replaces with the news digest.
pub const DATA_PLACEHOLDER: &str = "{{DATA}}";

pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are an expert financial analyst.

Here are stock summaries from news articles. Each includes:
- Ticker
- Company name
- Summary

Pick the **top 3 undervalued stocks with big upside potential**.

Respond in this format:

1. Ticker – Company Name  
   Short reason

2. ...

Data:

{{DATA}}
";

const KEYWORD_SEPARATOR: &str = ", ";
const KEYWORD_JOINER: &str = " OR ";

const SENTIMENT_MIN: f64 = 0.0;
const SENTIMENT_MAX: f64 = 1.0;
pub const SENTIMENT_STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    pub keywords: String,
    pub sentiment: String,
    pub industries: String,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.to_string(),
            sentiment: DEFAULT_SENTIMENT.to_string(),
            industries: DEFAULT_INDUSTRIES.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    pub text: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self { text: DEFAULT_PROMPT_TEMPLATE.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchForm {
    pub params: SearchParameters,
    pub prompt: PromptTemplate,
}

impl SearchForm {
    /// Snapshot the form into a request body. Sentiment, industries and
    /// prompt go out exactly as typed.
    pub fn to_request(&self) -> AnalyzeStocksRequest {
        AnalyzeStocksRequest {
            search_params: SearchParams {
                keywords: keyword_expression(&self.params.keywords),
                sentiment_gte: self.params.sentiment.clone(),
                industries: self.params.industries.clone(),
            },
            open_ai_prompt_template: self.prompt.text.clone(),
        }
    }
}

/// Rewrite `a, b, c` as `a OR b OR c`. Only the exact `", "` separator splits.
pub fn keyword_expression(raw: &str) -> String {
    raw.split(KEYWORD_SEPARATOR)
        .collect::<Vec<_>>()
        .join(KEYWORD_JOINER)
}

/// Step the sentiment text like a numeric input would: clamp to 0–1 on a 0.1 grid.
/// Unparseable text steps from zero.
pub fn step_sentiment(raw: &str, delta: f64) -> String {
    let current = raw.trim().parse::<f64>().unwrap_or(SENTIMENT_MIN);
    let stepped = ((current + delta) / SENTIMENT_STEP).round() * SENTIMENT_STEP;
    format!("{:.1}", stepped.clamp(SENTIMENT_MIN, SENTIMENT_MAX))
}
