//! Footer UI rendering

use aurora_page::UiSurface;
use eframe::egui;
use egui::RichText;

use crate::app::{AppState, SitePalette};

/// Renders the footer line with the stamped year.
pub fn render_footer(ui: &mut egui::Ui, state: &AppState, palette: &SitePalette) {
    let doc = state.page.surface();
    let year_slot = state.page.elements().year;
    let prefix = doc
        .element(year_slot)
        .and_then(|el| el.parent())
        .map(|parent| doc.text(parent))
        .unwrap_or_default();

    ui.horizontal_centered(|ui| {
        ui.label(RichText::new(format!("{} {}", prefix, doc.text(year_slot))).color(palette.muted));
    });
}
