//! Strassen-rs library: application logic for the multiplication CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
