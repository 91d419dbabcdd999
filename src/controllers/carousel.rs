//! Auto-advancing image carousel.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId, TimerTask};
use crate::surface::{NodeId, UiSurface};

pub const SLIDE_SELECTOR: &str = ".slide";
pub const VISIBLE_CLASS: &str = "visible";

/// Cycles visibility through a fixed, ordered set of slides.
///
/// Exactly one slide carries the `visible` class at a time. Pages without a carousel,
/// or with an empty one, get an inert controller that never schedules a timer.
#[derive(Debug, Clone, Default)]
pub struct CarouselController {
    slides: Vec<NodeId>,
    index: usize,
    timer: Option<TimerId>,
}

impl CarouselController {
    /// Collects the slides of `container`, shows the first one and starts the timer.
    pub fn start<S: UiSurface + ?Sized>(
        surface: &mut S,
        container: Option<NodeId>,
        scheduler: &mut Scheduler,
        interval: Duration,
    ) -> Self {
        let Some(container) = container else {
            tracing::debug!("no carousel on page");
            return Self::default();
        };

        let slides = surface.query_within(container, SLIDE_SELECTOR).unwrap_or_default();
        if slides.is_empty() {
            tracing::debug!("carousel has no slides");
            return Self::default();
        }

        let mut carousel = Self {
            slides,
            index: 0,
            timer: None,
        };
        carousel.show(surface, 0);
        carousel.timer = Some(scheduler.set_interval(interval, TimerTask::CarouselAdvance));
        tracing::debug!(slides = carousel.slides.len(), ?interval, "carousel started");
        carousel
    }

    pub fn slides(&self) -> &[NodeId] {
        &self.slides
    }

    /// Index of the visible slide.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Moves to the next slide, wrapping around. No-op on an inert carousel.
    pub fn advance<S: UiSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.slides.is_empty() {
            return;
        }
        let next = (self.index + 1) % self.slides.len();
        self.show(surface, next);
    }

    fn show<S: UiSurface + ?Sized>(&mut self, surface: &mut S, index: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            surface.toggle_class(*slide, VISIBLE_CLASS, Some(i == index));
        }
        self.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{landing_page, Element};
    use crate::Document;

    fn visible(doc: &Document, carousel: &CarouselController) -> Vec<usize> {
        carousel
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, slide)| doc.has_class(**slide, VISIBLE_CLASS))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_cycles_through_slides() {
        let mut doc = landing_page();
        let mut scheduler = Scheduler::new();
        let container = doc.element_by_id("carousel");
        let mut carousel =
            CarouselController::start(&mut doc, container, &mut scheduler, Duration::from_millis(4500));

        assert!(carousel.is_running());
        assert_eq!(visible(&doc, &carousel), vec![0]);

        let mut seen = Vec::new();
        for _ in 0..6 {
            for _ in scheduler.advance(Duration::from_millis(4500)) {
                carousel.advance(&mut doc);
            }
            let shown = visible(&doc, &carousel);
            assert_eq!(shown.len(), 1);
            seen.push(shown[0]);
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_missing_container_is_inert() {
        let mut doc = Document::new(1280.0);
        let mut scheduler = Scheduler::new();
        let mut carousel =
            CarouselController::start(&mut doc, None, &mut scheduler, Duration::from_millis(4500));

        assert!(!carousel.is_running());
        assert_eq!(scheduler.pending_count(), 0);
        carousel.advance(&mut doc);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel_starts_no_timer() {
        let mut doc = Document::new(1280.0);
        let body = doc.body();
        let container = doc.append(body, Element::new("div").with_id("carousel"));
        let mut scheduler = Scheduler::new();

        let carousel =
            CarouselController::start(&mut doc, Some(container), &mut scheduler, Duration::from_millis(4500));
        assert!(!carousel.is_running());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_single_slide_stays_visible() {
        let mut doc = Document::new(1280.0);
        let body = doc.body();
        let container = doc.append(body, Element::new("div"));
        doc.append(container, Element::new("figure").with_class("slide"));
        let mut scheduler = Scheduler::new();

        let mut carousel =
            CarouselController::start(&mut doc, Some(container), &mut scheduler, Duration::from_millis(10));
        carousel.advance(&mut doc);
        carousel.advance(&mut doc);

        assert_eq!(carousel.index(), 0);
        assert_eq!(visible(&doc, &carousel), vec![0]);
    }
}
