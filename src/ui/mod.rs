// src/ui/mod.rs
pub mod form;
pub mod header;
pub mod results;
