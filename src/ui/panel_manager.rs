//! Panel orchestration and layout management.
//!
//! Lays out the header, footer and scrolling page body, and gathers the page events
//! each panel produced this frame.

use aurora_page::PageEvent;
use eframe::egui;

use crate::app::{AppState, SitePalette};
use crate::ui::{footer, header, sections};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        palette: &SitePalette,
    ) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let narrow = state.page.nav().is_narrow(state.page.surface());

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            events.extend(header::render_header(ui, state, narrow));
        });

        // Footer at the very bottom
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::render_footer(ui, state, palette);
        });

        // Page body
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let frame = egui::Frame::default().inner_margin(16.0);
                    frame.show(ui, |ui| {
                        events.extend(sections::render_sections(ui, state, palette));
                    });
                });
        });

        events
    }
}
