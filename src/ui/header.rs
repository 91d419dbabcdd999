//! Header panel UI rendering
//!
//! Brand link, navigation links, the mobile menu toggle and the theme toggle. On a
//! narrow viewport the links collapse behind the toggle and are shown below the bar
//! while the page keeps the list displayed.

use aurora_page::{Document, NodeId, PageEvent, UiSurface};
use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the header bar.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Shell state holding the page
/// * `narrow` - Whether the viewport is below the mobile breakpoint
///
/// # Returns
/// Click events for the page
pub fn render_header(ui: &mut egui::Ui, state: &AppState, narrow: bool) -> Vec<PageEvent> {
    let doc = state.page.surface();
    let elements = state.page.elements();
    let mut events = Vec::new();

    let brand = doc.query_selector(".brand").ok().flatten();
    let links = doc.query_within(elements.nav_list, "a").unwrap_or_default();
    let menu_open = state.page.nav().is_open(doc);

    ui.horizontal(|ui| {
        if let Some(brand) = brand {
            if ui.link(RichText::new(doc.text(brand)).strong().size(18.0)).clicked() {
                events.push(PageEvent::Click(brand));
            }
        }

        if !narrow {
            ui.separator();
            render_links(ui, doc, &links, &mut events);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_button = ui
                .button(doc.text(elements.theme_toggle))
                .on_hover_text("Toggle color theme");
            if theme_button.clicked() {
                events.push(PageEvent::Click(elements.theme_toggle));
            }

            if narrow {
                let label = if menu_open { "✕".to_string() } else { doc.text(elements.nav_toggle) };
                if ui.button(label).on_hover_text("Menu").clicked() {
                    events.push(PageEvent::Click(elements.nav_toggle));
                }
            }
        });
    });

    // Mobile menu, shown while the page displays the list
    let list_shown = doc.style(elements.nav_list, "display").as_deref() == Some("flex");
    if narrow && list_shown {
        ui.separator();
        ui.vertical(|ui| render_links(ui, doc, &links, &mut events));
    }

    events
}

fn render_links(ui: &mut egui::Ui, doc: &Document, links: &[NodeId], events: &mut Vec<PageEvent>) {
    for link in links {
        if ui.link(doc.text(*link)).clicked() {
            events.push(PageEvent::Click(*link));
        }
    }
}
