// src/config/mod.rs
pub mod settings;
pub mod theme;

// Re-export commonly used types
pub use settings::Settings;
pub use theme::Theme;
