//! Mobile navigation menu.
//!
//! The open/closed state lives in three places on the page: `aria-expanded` on the
//! toggle button, the `open` class on the nav container and the inline `display` of
//! the link list. Every transition here updates all three together.

use crate::page::PageElements;
use crate::surface::{NodeId, UiSurface};

pub const OPEN_CLASS: &str = "open";
pub const ESCAPE_KEY: &str = "Escape";

const ARIA_EXPANDED: &str = "aria-expanded";

/// Controls the collapsible navigation menu.
#[derive(Debug, Clone)]
pub struct NavController {
    nav: NodeId,
    toggle: NodeId,
    list: NodeId,
    breakpoint: f32,
}

impl NavController {
    pub fn new(elements: &PageElements, breakpoint: f32) -> Self {
        Self {
            nav: elements.nav,
            toggle: elements.nav_toggle,
            list: elements.nav_list,
            breakpoint,
        }
    }

    pub fn toggle_button(&self) -> NodeId {
        self.toggle
    }

    /// Whether the menu is currently expanded.
    pub fn is_open<S: UiSurface + ?Sized>(&self, surface: &S) -> bool {
        surface.attribute(self.toggle, ARIA_EXPANDED).as_deref() == Some("true")
    }

    /// Whether the viewport is narrow enough to use the collapsible menu.
    ///
    /// Evaluated at call time so it tracks the viewport as it is when an event arrives.
    pub fn is_narrow<S: UiSurface + ?Sized>(&self, surface: &S) -> bool {
        surface.viewport_width() < self.breakpoint
    }

    /// Flips the menu state and returns whether it is now open.
    pub fn toggle<S: UiSurface + ?Sized>(&self, surface: &mut S) -> bool {
        let open = !self.is_open(surface);
        self.set_open(surface, open);
        tracing::debug!(open, "nav menu toggled");
        open
    }

    /// Forces the menu closed. Idempotent.
    pub fn close<S: UiSurface + ?Sized>(&self, surface: &mut S) {
        self.set_open(surface, false);
    }

    /// Closes the menu if `key` is Escape. Returns whether the key was handled.
    pub fn close_on_escape<S: UiSurface + ?Sized>(&self, surface: &mut S, key: &str) -> bool {
        if key != ESCAPE_KEY {
            return false;
        }
        self.close(surface);
        true
    }

    /// Closes an open menu once the viewport has grown past the breakpoint.
    ///
    /// Returns true if the menu was closed.
    pub fn handle_resize<S: UiSurface + ?Sized>(&self, surface: &mut S) -> bool {
        if self.is_open(surface) && !self.is_narrow(surface) {
            self.close(surface);
            return true;
        }
        false
    }

    fn set_open<S: UiSurface + ?Sized>(&self, surface: &mut S, open: bool) {
        surface.set_attribute(self.toggle, ARIA_EXPANDED, if open { "true" } else { "false" });
        surface.toggle_class(self.nav, OPEN_CLASS, Some(open));
        surface.set_style(self.list, "display", if open { "flex" } else { "" });
    }
}
