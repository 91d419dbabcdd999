//! Page section rendering
//!
//! Walks the children of `main` and draws each element by tag. The carousel and the
//! contact form get dedicated renderers; everything else maps onto plain egui
//! headings, labels and links.

use aurora_page::controllers::carousel::{SLIDE_SELECTOR, VISIBLE_CLASS};
use aurora_page::{Document, NodeId, PageElements, PageEvent, UiSurface};
use eframe::egui;
use egui::RichText;

use crate::app::{AppState, SitePalette};
use crate::ui::contact_panel;

/// Height reserved for the visible carousel slide.
const SLIDE_HEIGHT: f32 = 160.0;

/// Renders every section of the page, scrolling to the pending target if there is one.
pub fn render_sections(ui: &mut egui::Ui, state: &mut AppState, palette: &SitePalette) -> Vec<PageEvent> {
    let mut events = Vec::new();
    let elements = *state.page.elements();
    let scroll_target = state.scroll_target();

    let sections = {
        let doc = state.page.surface();
        doc.query_selector("main")
            .ok()
            .flatten()
            .map(|main| doc.children(main).to_vec())
            .unwrap_or_default()
    };

    for section in sections {
        let doc = state.page.surface_mut();
        let response = ui
            .scope(|ui| render_node(ui, doc, section, &elements, palette, &mut events))
            .response;

        if scroll_target == Some(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
            state.clear_scroll_target();
        }
        ui.add_space(24.0);
    }

    events
}

fn render_node(
    ui: &mut egui::Ui,
    doc: &mut Document,
    node: NodeId,
    elements: &PageElements,
    palette: &SitePalette,
    events: &mut Vec<PageEvent>,
) {
    if Some(node) == elements.carousel {
        render_carousel(ui, doc, node, palette);
        return;
    }
    if node == elements.form {
        contact_panel::render_form(ui, doc, elements, palette, events);
        return;
    }

    let Some(element) = doc.element(node) else {
        return;
    };
    let tag = element.tag.clone();
    let text = element.text.clone();
    let children = element.children().to_vec();

    match tag.as_str() {
        "h1" => {
            ui.label(RichText::new(text).size(30.0).strong());
        }
        "h2" => {
            ui.heading(text);
        }
        "h3" => {
            ui.label(RichText::new(text).strong());
        }
        "p" => {
            ui.label(text);
        }
        "a" => {
            if ui.link(text).clicked() {
                events.push(PageEvent::Click(node));
            }
        }
        "li" => {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                for child in &children {
                    render_node(ui, doc, *child, elements, palette, events);
                }
            });
        }
        _ => {
            for child in &children {
                render_node(ui, doc, *child, elements, palette, events);
            }
        }
    }
}

fn render_carousel(ui: &mut egui::Ui, doc: &Document, carousel: NodeId, palette: &SitePalette) {
    let slides = doc.query_within(carousel, SLIDE_SELECTOR).unwrap_or_default();
    let visible = slides.iter().position(|slide| doc.has_class(*slide, VISIBLE_CLASS));

    egui::Frame::NONE
        .fill(palette.slide_background)
        .inner_margin(12.0)
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(SLIDE_HEIGHT);
            ui.vertical_centered(|ui| {
                ui.add_space(SLIDE_HEIGHT / 2.0 - 12.0);
                match visible {
                    Some(index) => {
                        ui.label(RichText::new(doc.text(slides[index])).size(18.0));
                    }
                    None => {
                        ui.label(RichText::new("No slides").color(palette.muted));
                    }
                }
            });
        });

    // Position dots
    ui.horizontal(|ui| {
        for i in 0..slides.len() {
            let (dot, color) = if Some(i) == visible {
                ("●", palette.accent)
            } else {
                ("○", palette.muted)
            };
            ui.label(RichText::new(dot).color(color));
        }
    });
}
