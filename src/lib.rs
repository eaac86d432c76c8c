//! Library exports for reuse in integration tests.
/// Persisted dashboard configuration.
pub mod config;
/// Controller, UI state, and egui renderer.
pub mod dashboard;
/// Log file setup for the UI process.
pub mod logging;
/// Requests to the federation coordinator.
pub mod training_gateway;

mod app_dirs;
mod http_client;
