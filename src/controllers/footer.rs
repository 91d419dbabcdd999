//! Footer copyright year.

use crate::clock::Clock;
use crate::surface::{NodeId, UiSurface};

/// Writes the current calendar year into the footer once at startup.
pub struct FooterYearStamper;

impl FooterYearStamper {
    /// Sets the text of `node` to the four-digit current year and returns the year.
    pub fn stamp<S: UiSurface + ?Sized>(surface: &mut S, node: NodeId, clock: &dyn Clock) -> i32 {
        let year = clock.current_year();
        surface.set_text(node, &format!("{:04}", year));
        year
    }
}
