//! Smooth scrolling for in-page links.

use crate::controllers::NavController;
use crate::surface::{NodeId, ScrollOptions, UiSurface};

/// Selector for links that point into the current page.
pub const INTERNAL_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

/// What happened when an anchor was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The node is not a bound internal link.
    NotBound,
    /// `href` was `#` or empty; default behavior applies.
    Ignored,
    /// No element matches the link target; default behavior applies.
    Unresolved,
    /// Navigation was handled by scrolling to `target`.
    Scrolled { target: NodeId, closed_menu: bool },
}

impl ScrollOutcome {
    /// Whether default link navigation should be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, ScrollOutcome::Scrolled { .. })
    }
}

/// Routes clicks on internal links to smooth scrolls.
#[derive(Debug, Clone, Default)]
pub struct SmoothScrollRouter {
    anchors: Vec<NodeId>,
}

impl SmoothScrollRouter {
    /// Binds every link whose `href` starts with `#`.
    pub fn bind<S: UiSurface + ?Sized>(surface: &S) -> Self {
        let anchors = match surface.query_selector_all(INTERNAL_LINK_SELECTOR) {
            Ok(anchors) => anchors,
            Err(err) => {
                tracing::warn!(error = %err, "failed to bind internal links");
                Vec::new()
            }
        };
        tracing::debug!(count = anchors.len(), "bound internal links");
        Self { anchors }
    }

    pub fn anchors(&self) -> &[NodeId] {
        &self.anchors
    }

    pub fn is_bound(&self, node: NodeId) -> bool {
        self.anchors.contains(&node)
    }

    /// Handles a click on `anchor`.
    ///
    /// The menu is closed only when the viewport is narrow at the moment of the click.
    pub fn handle_click<S: UiSurface + ?Sized>(
        &self,
        surface: &mut S,
        nav: &NavController,
        anchor: NodeId,
    ) -> ScrollOutcome {
        if !self.is_bound(anchor) {
            return ScrollOutcome::NotBound;
        }

        let href = surface.attribute(anchor, "href").unwrap_or_default();
        if href.is_empty() || href == "#" {
            return ScrollOutcome::Ignored;
        }

        let target = match surface.query_selector(&href) {
            Ok(Some(target)) => target,
            Ok(None) => return ScrollOutcome::Unresolved,
            Err(err) => {
                tracing::debug!(%href, error = %err, "link target is not a valid selector");
                return ScrollOutcome::Unresolved;
            }
        };

        surface.scroll_into_view(target, ScrollOptions::SMOOTH_TOP);

        let closed_menu = nav.is_narrow(surface);
        if closed_menu {
            nav.close(surface);
        }

        tracing::debug!(%href, closed_menu, "smooth scroll");
        ScrollOutcome::Scrolled { target, closed_menu }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{landing_page, Element};
    use crate::page::PageElements;
    use crate::Document;

    struct Fixture {
        doc: Document,
        nav: NavController,
        router: SmoothScrollRouter,
        features_link: NodeId,
        brand_link: NodeId,
        missing_link: NodeId,
        bad_link: NodeId,
    }

    fn setup(width: f32) -> Fixture {
        let mut doc = landing_page();
        doc.set_viewport_width(width);
        let body = doc.body();
        let missing_link = doc.append(body, Element::new("a").with_attribute("href", "#pricing"));
        let bad_link = doc.append(body, Element::new("a").with_attribute("href", "#1-intro"));

        let elements = PageElements::bind(&doc).unwrap();
        let nav = NavController::new(&elements, 720.0);
        let router = SmoothScrollRouter::bind(&doc);

        let features_link = find_link(&doc, "#features");
        let brand_link = find_link(&doc, "#");

        Fixture { doc, nav, router, features_link, brand_link, missing_link, bad_link }
    }

    fn find_link(doc: &Document, href: &str) -> NodeId {
        doc.query_selector_all("a")
            .unwrap()
            .into_iter()
            .find(|node| doc.attribute(*node, "href").as_deref() == Some(href))
            .unwrap()
    }

    #[test]
    fn test_scrolls_to_target() {
        let mut f = setup(1280.0);
        let features = f.doc.element_by_id("features").unwrap();

        let outcome = f.router.handle_click(&mut f.doc, &f.nav, f.features_link);
        assert_eq!(outcome, ScrollOutcome::Scrolled { target: features, closed_menu: false });
        assert!(outcome.prevents_default());
        assert_eq!(f.doc.take_scroll_requests(), vec![(features, ScrollOptions::SMOOTH_TOP)]);
    }

    #[test]
    fn test_closes_menu_on_narrow_viewport() {
        let mut f = setup(480.0);
        f.nav.toggle(&mut f.doc);
        assert!(f.nav.is_open(&f.doc));

        let outcome = f.router.handle_click(&mut f.doc, &f.nav, f.features_link);
        assert!(matches!(outcome, ScrollOutcome::Scrolled { closed_menu: true, .. }));
        assert!(!f.nav.is_open(&f.doc));
    }

    #[test]
    fn test_wide_viewport_leaves_menu_alone() {
        let mut f = setup(800.0);
        f.nav.toggle(&mut f.doc);

        f.router.handle_click(&mut f.doc, &f.nav, f.features_link);
        assert!(f.nav.is_open(&f.doc));
    }

    #[test]
    fn test_hash_only_and_missing_targets_are_noops() {
        let mut f = setup(480.0);

        assert_eq!(f.router.handle_click(&mut f.doc, &f.nav, f.brand_link), ScrollOutcome::Ignored);
        assert_eq!(f.router.handle_click(&mut f.doc, &f.nav, f.missing_link), ScrollOutcome::Unresolved);
        assert_eq!(f.router.handle_click(&mut f.doc, &f.nav, f.bad_link), ScrollOutcome::Unresolved);
        assert!(f.doc.take_scroll_requests().is_empty());
    }

    #[test]
    fn test_unbound_nodes_are_ignored() {
        let mut f = setup(1280.0);
        let toggle = f.nav.toggle_button();
        assert_eq!(f.router.handle_click(&mut f.doc, &f.nav, toggle), ScrollOutcome::NotBound);
        assert_eq!(f.router.anchors().len(), 8);
    }
}
