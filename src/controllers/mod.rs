//! Page components.
//!
//! Each controller owns the handles it bound at startup and mutates the page only
//! through [`UiSurface`](crate::surface::UiSurface):
//! - Navigation menu toggle and close triggers
//! - Smooth scrolling for in-page links
//! - Theme preference and toggle button
//! - Auto-advancing carousel
//! - Contact form validation and simulated submission
//! - Footer year

pub mod carousel;
pub mod contact;
pub mod footer;
pub mod nav;
pub mod scroll;
pub mod theme;

pub use carousel::CarouselController;
pub use contact::{ContactFormController, SubmissionStatus, SubmitOutcome};
pub use footer::FooterYearStamper;
pub use nav::NavController;
pub use scroll::{ScrollOutcome, SmoothScrollRouter};
pub use theme::{ThemePreference, ThemeStore, ThemeToggle};
