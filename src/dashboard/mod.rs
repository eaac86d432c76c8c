//! Native dashboard: controller, UI state, and egui renderer.

pub mod controller;
pub mod state;
pub mod ui;

pub use controller::DashboardController;
pub use ui::DashboardApp;
