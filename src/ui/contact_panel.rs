//! Contact form UI rendering
//!
//! Text edits write straight into the document's field values, so the page reads what
//! the user typed when the form is submitted. Pressing Enter in a single-line field
//! submits, as it would in a browser.

use aurora_page::{Document, Field, PageElements, PageEvent, UiSurface};
use eframe::egui;

use crate::app::SitePalette;

/// Renders the contact form and returns submit/clear events.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `doc` - The page document (field values are edited in place)
/// * `elements` - Bound page elements
/// * `palette` - Theme colors for errors and status text
/// * `events` - Output list of page events
pub fn render_form(
    ui: &mut egui::Ui,
    doc: &mut Document,
    elements: &PageElements,
    palette: &SitePalette,
    events: &mut Vec<PageEvent>,
) {
    let fields = [
        (Field::Name, "Name", elements.err_name, false),
        (Field::Email, "Email", elements.err_email, false),
        (Field::Message, "Message", elements.err_message, true),
    ];

    for (field, label, error_slot, multiline) in fields {
        ui.label(label);

        if let Some(node) = doc.form_field(elements.form, field.name()) {
            if let Some(element) = doc.element_mut(node) {
                let edit = if multiline {
                    egui::TextEdit::multiline(&mut element.value).desired_rows(4)
                } else {
                    egui::TextEdit::singleline(&mut element.value)
                };
                let response = ui.add(edit.desired_width(f32::INFINITY));

                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if !multiline && response.lost_focus() && enter_pressed {
                    events.push(PageEvent::Submit(elements.form));
                }
            }
        }

        let error = doc.text(error_slot);
        if !error.is_empty() {
            ui.colored_label(palette.error, error);
        }
        ui.add_space(6.0);
    }

    ui.horizontal(|ui| {
        if ui.button("Send").clicked() {
            events.push(PageEvent::Submit(elements.form));
        }
        if ui.button(doc.text(elements.clear_button)).clicked() {
            events.push(PageEvent::Click(elements.clear_button));
        }
    });

    let status = doc.text(elements.form_status);
    if !status.is_empty() {
        ui.colored_label(palette.accent, status);
    }
}
