//! The narrow UI surface the page components talk to.
//!
//! Components never reach for a global document or window. Everything they need
//! (element lookup, attribute/class/text/style mutation, form fields, scrolling and the
//! current viewport width) goes through [`UiSurface`], so the same controllers run
//! against the in-memory [`Document`](crate::Document) in tests and inside the egui
//! shell.

use crate::error::SelectorError;

/// Handle to an element owned by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// How a scroll should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    /// Animate the scroll.
    #[default]
    Smooth,
}

/// Which edge of the target is aligned with the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// Options for [`UiSurface::scroll_into_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scroll aligning the target's top edge with the viewport.
    pub const SMOOTH_TOP: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };
}

/// Capabilities a page needs from its host.
pub trait UiSurface {
    /// Root element that carries page-wide marker classes.
    fn body(&self) -> NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// First element in document order matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError>;

    /// Every element in document order matching `selector`.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Toggles `class` on `node`, or forces it on/off when `force` is set.
    ///
    /// Returns whether the class is present afterwards.
    fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool;

    fn text(&self, node: NodeId) -> String;
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Inline style property, `None` when unset.
    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Sets an inline style property. An empty value removes it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Looks up a field of `form` by its `name` attribute.
    fn form_field(&self, form: NodeId, name: &str) -> Option<NodeId>;

    fn value(&self, node: NodeId) -> String;
    fn set_value(&mut self, node: NodeId, value: &str);

    /// Restores every field of `form` to its default value.
    fn reset_form(&mut self, form: NodeId);

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollOptions);

    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> f32;

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.toggle_class(node, class, Some(true));
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.toggle_class(node, class, Some(false));
    }
}
