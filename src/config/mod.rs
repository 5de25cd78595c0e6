// src/config/mod.rs
pub mod keywords;
pub mod panels;
pub mod presets;
pub mod search;
