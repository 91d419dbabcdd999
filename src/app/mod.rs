//! Application-level modules for the Aurora desktop shell.
//!
//! This module contains the shell state and the coordinators that connect egui to the
//! page layer.

mod app_state;
mod page_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use page_coordinator::PageCoordinator;
pub use theme_coordinator::{SitePalette, ThemeCoordinator};
