//! The stock Aurora landing page.
//!
//! Builds the document the shell renders: header navigation, hero, features, a
//! three-slide gallery carousel, the contact form and the footer year slot. Element ids
//! and classes match the ones in [`crate::page::ids`].

use super::{Document, Element};
use crate::page::ids;
use crate::surface::UiSurface;

/// Default viewport width for a freshly built page.
const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

/// Section anchors shown in the navigation list, in order.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

const FEATURES: [(&str, &str); 3] = [
    ("Fast by default", "Static pages served from the edge, no build step required."),
    ("Light or dark", "A theme switch that remembers your choice between visits."),
    ("Talk to us", "A contact form that checks your input before anything is sent."),
];

const SLIDES: [&str; 3] = [
    "Northern lights over the fjord",
    "Night sky above the ridge",
    "First light on the glacier",
];

/// Builds the landing page document.
pub fn landing_page() -> Document {
    let mut doc = Document::new(DEFAULT_VIEWPORT_WIDTH);
    let body = doc.body();

    // Header and navigation
    let header = doc.append(body, Element::new("header").with_class("site-header"));
    doc.append(header, Element::new("a").with_class("brand").with_attribute("href", "#").with_text("Aurora"));
    let nav = doc.append(header, Element::new("nav").with_id(ids::NAV));
    doc.append(
        nav,
        Element::new("button")
            .with_id(ids::NAV_TOGGLE)
            .with_attribute("aria-expanded", "false")
            .with_attribute("aria-controls", "primary-navigation")
            .with_text("☰"),
    );
    let list = doc.append(
        nav,
        Element::new("ul").with_id("primary-navigation").with_class(ids::NAV_LIST_CLASS),
    );
    for (href, label) in NAV_LINKS {
        let item = doc.append(list, Element::new("li"));
        doc.append(item, Element::new("a").with_attribute("href", href).with_text(label));
    }
    doc.append(
        header,
        Element::new("button")
            .with_id(ids::THEME_TOGGLE)
            .with_attribute("aria-pressed", "false")
            .with_attribute("aria-label", "Toggle color theme")
            .with_text("🌙"),
    );

    let main = doc.append(body, Element::new("main"));

    // Hero
    let hero = doc.append(main, Element::new("section").with_id("home").with_class("hero"));
    doc.append(hero, Element::new("h1").with_text("Build calmer websites"));
    doc.append(
        hero,
        Element::new("p").with_text("Aurora is a tiny landing page kit with just enough interaction."),
    );
    doc.append(
        hero,
        Element::new("a").with_class("button").with_attribute("href", "#contact").with_text("Get in touch"),
    );

    // Features
    let features = doc.append(main, Element::new("section").with_id("features"));
    doc.append(features, Element::new("h2").with_text("Features"));
    let feature_list = doc.append(features, Element::new("ul").with_class("feature-list"));
    for (title, blurb) in FEATURES {
        let item = doc.append(feature_list, Element::new("li").with_class("feature"));
        doc.append(item, Element::new("h3").with_text(title));
        doc.append(item, Element::new("p").with_text(blurb));
    }

    // Gallery
    let gallery = doc.append(main, Element::new("section").with_id("gallery"));
    doc.append(gallery, Element::new("h2").with_text("Gallery"));
    let carousel = doc.append(gallery, Element::new("div").with_id(ids::CAROUSEL).with_class("carousel"));
    for caption in SLIDES {
        doc.append(
            carousel,
            Element::new("figure").with_class(ids::SLIDE_CLASS).with_text(caption),
        );
    }

    // Contact
    let contact = doc.append(main, Element::new("section").with_id("contact"));
    doc.append(contact, Element::new("h2").with_text("Contact"));
    let form = doc.append(
        contact,
        Element::new("form").with_id(ids::CONTACT_FORM).with_attribute("novalidate", ""),
    );
    let fields = [
        ("input", "name", "Name", ids::ERR_NAME),
        ("input", "email", "Email", ids::ERR_EMAIL),
        ("textarea", "message", "Message", ids::ERR_MESSAGE),
    ];
    for (tag, name, label, error_id) in fields {
        let row = doc.append(form, Element::new("div").with_class("field"));
        doc.append(row, Element::new("label").with_attribute("for", name).with_text(label));
        doc.append(
            row,
            Element::new(tag)
                .with_id(name)
                .with_attribute("name", name)
                .with_value(""),
        );
        doc.append(
            row,
            Element::new("small")
                .with_id(error_id)
                .with_class("error")
                .with_attribute("aria-live", "polite"),
        );
    }
    let actions = doc.append(form, Element::new("div").with_class("actions"));
    doc.append(
        actions,
        Element::new("button").with_attribute("type", "submit").with_text("Send"),
    );
    doc.append(
        actions,
        Element::new("button")
            .with_id(ids::CLEAR_BUTTON)
            .with_attribute("type", "button")
            .with_text("Clear"),
    );
    doc.append(
        form,
        Element::new("p").with_id(ids::FORM_STATUS).with_attribute("role", "status"),
    );

    // Footer
    let footer = doc.append(body, Element::new("footer"));
    let line = doc.append(footer, Element::new("p").with_text("© Aurora"));
    doc.append(line, Element::new("span").with_id(ids::YEAR));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::UiSurface;

    #[test]
    fn test_landing_page_has_required_elements() {
        let doc = landing_page();
        for id in [
            ids::NAV,
            ids::NAV_TOGGLE,
            ids::THEME_TOGGLE,
            ids::CONTACT_FORM,
            ids::YEAR,
            ids::CLEAR_BUTTON,
            ids::ERR_NAME,
            ids::ERR_EMAIL,
            ids::ERR_MESSAGE,
            ids::FORM_STATUS,
            ids::CAROUSEL,
        ] {
            assert!(doc.element_by_id(id).is_some(), "missing #{}", id);
        }
    }

    #[test]
    fn test_landing_page_internal_links() {
        let doc = landing_page();
        let anchors = doc.query_selector_all(r##"a[href^="#"]"##).unwrap();
        // Brand link, four nav links and the hero call to action
        assert_eq!(anchors.len(), 6);

        let form = doc.element_by_id(ids::CONTACT_FORM).unwrap();
        for name in ["name", "email", "message"] {
            assert!(doc.form_field(form, name).is_some());
        }

        let carousel = doc.element_by_id(ids::CAROUSEL).unwrap();
        assert_eq!(doc.query_within(carousel, ".slide").unwrap().len(), 3);
    }
}
