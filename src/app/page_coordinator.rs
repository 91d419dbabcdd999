//! Page event coordination.
//!
//! Turns panel interactions and window-level input into page events, runs the page's
//! timers from frame time, and picks up scroll requests for the next render.

use std::time::{Duration, Instant};

use aurora_page::{EventOutcome, PageEvent};

use crate::app::AppState;

/// Upper bound on repaint delay while nothing is scheduled.
const IDLE_REPAINT: Duration = Duration::from_secs(1);

/// Coordinates page events, timers and scrolling.
pub struct PageCoordinator;

impl PageCoordinator {
    /// Advances page time to `now`. Returns the number of timers that fired.
    pub fn run_timers(state: &mut AppState, now: Instant) -> usize {
        let elapsed = state.frame_elapsed(now);
        state.page.advance(elapsed)
    }

    /// Collects window-level events: viewport resizes and the Escape key.
    pub fn collect_window_events(ctx: &egui::Context, state: &mut AppState) -> Vec<PageEvent> {
        let mut events = Vec::new();

        if state.update_viewport_width(ctx.content_rect().width()) {
            events.push(PageEvent::Resize);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(PageEvent::KeyDown("Escape".to_string()));
        }

        events
    }

    /// Dispatches one event, persisting through `storage` when the page asks to.
    pub fn dispatch(
        state: &mut AppState,
        event: PageEvent,
        storage: Option<&mut dyn eframe::Storage>,
    ) -> EventOutcome {
        let outcome = state.page.dispatch(event, storage);
        Self::take_scroll_request(state);
        outcome
    }

    /// Moves the most recent scroll request from the document into the shell state.
    fn take_scroll_request(state: &mut AppState) {
        if let Some((target, _options)) = state.page.surface_mut().take_scroll_requests().pop() {
            state.set_scroll_target(target);
        }
    }

    /// How long egui may sleep before the next timer needs a frame.
    pub fn repaint_delay(state: &AppState) -> Duration {
        state
            .page
            .time_until_next_timer()
            .map(|d| d.min(IDLE_REPAINT))
            .unwrap_or(IDLE_REPAINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_page::{landing_page, Page, SiteConfig, UiSurface};

    fn state() -> AppState {
        AppState::new(Page::start(landing_page(), SiteConfig::default(), None).unwrap())
    }

    #[test]
    fn test_first_frame_fires_nothing() {
        let mut state = state();
        let start = Instant::now();

        assert_eq!(PageCoordinator::run_timers(&mut state, start), 0);
        assert_eq!(
            PageCoordinator::run_timers(&mut state, start + Duration::from_millis(4500)),
            1
        );
        assert_eq!(state.page.carousel().index(), 1);
    }

    #[test]
    fn test_link_click_sets_scroll_target() {
        let mut state = state();
        let surface = state.page.surface();
        let link = surface
            .query_selector_all("a")
            .unwrap()
            .into_iter()
            .find(|a| surface.attribute(*a, "href").as_deref() == Some("#gallery"))
            .unwrap();
        let gallery = surface.element_by_id("gallery").unwrap();

        let outcome = PageCoordinator::dispatch(&mut state, PageEvent::Click(link), None);
        assert!(outcome.default_prevented);
        assert_eq!(state.scroll_target(), Some(gallery));
    }

    #[test]
    fn test_repaint_delay_is_capped_while_carousel_waits() {
        let state = state();
        assert_eq!(PageCoordinator::repaint_delay(&state), IDLE_REPAINT);
    }
}
