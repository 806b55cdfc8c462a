// src/api/mod.rs
pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::AnalysisClient;
pub use error::AnalysisError;
pub use types::{AnalyzeStocksRequest, SearchParams};
