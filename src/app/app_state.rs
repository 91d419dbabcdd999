//! Shell state for the Aurora desktop app.
//!
//! Owns the running page plus the few bits of frame bookkeeping egui needs: the time of
//! the previous frame, the last seen viewport width, and a scroll target waiting to be
//! honored by the next render.

use std::time::Instant;

use aurora_page::{Document, NodeId, Page};

/// Everything the shell keeps between frames.
pub struct AppState {
    /// The page and all of its components
    pub page: Page<Document>,

    /// When the previous frame started, `None` before the first frame
    last_frame: Option<Instant>,

    /// Viewport width the page was last told about
    viewport_width: Option<f32>,

    /// Section the central panel should scroll to
    scroll_target: Option<NodeId>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("viewport_width", &self.viewport_width)
            .field("scroll_target", &self.scroll_target)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(page: Page<Document>) -> Self {
        Self {
            page,
            last_frame: None,
            viewport_width: None,
            scroll_target: None,
        }
    }

    /// Returns the time since the previous call and records `now` as the new frame start.
    pub fn frame_elapsed(&mut self, now: Instant) -> std::time::Duration {
        let elapsed = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        elapsed
    }

    /// Records the current viewport width. Returns true when it changed.
    pub fn update_viewport_width(&mut self, width: f32) -> bool {
        if self.viewport_width == Some(width) {
            return false;
        }
        self.viewport_width = Some(width);
        self.page.surface_mut().set_viewport_width(width);
        true
    }

    // ===== Scroll Target =====

    pub fn scroll_target(&self) -> Option<NodeId> {
        self.scroll_target
    }

    pub fn set_scroll_target(&mut self, target: NodeId) {
        self.scroll_target = Some(target);
    }

    pub fn clear_scroll_target(&mut self) {
        self.scroll_target = None;
    }
}
