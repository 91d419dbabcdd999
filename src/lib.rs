//! Aurora landing page interaction layer.
//!
//! Mobile navigation, smooth scrolling for in-page links, a persisted light/dark theme,
//! an auto-advancing carousel, contact form validation with a simulated submit, and the
//! footer year, all written against the [`UiSurface`] trait so they run on the
//! in-memory [`Document`] as well as inside the egui shell.

pub mod clock;
pub mod config;
pub mod controllers;
pub mod document;
pub mod error;
pub mod page;
pub mod scheduler;
pub mod storage;
pub mod surface;

// Export page wiring
pub use page::{EventOutcome, Page, PageContext, PageElements, PageEvent};

// Export surface and its in-memory implementation
pub use document::{landing_page, Document, Element};
pub use surface::{NodeId, ScrollBehavior, ScrollBlock, ScrollOptions, UiSurface};

// Export components
pub use controllers::contact::{
    Field, FormInput, LogSink, RecordingSink, SubmissionPayload, SubmissionSink,
};
pub use controllers::{
    CarouselController, ContactFormController, FooterYearStamper, NavController, ScrollOutcome,
    SmoothScrollRouter, SubmissionStatus, SubmitOutcome, ThemePreference, ThemeStore, ThemeToggle,
};

// Export runtime support
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SiteConfig;
pub use error::{PageError, SelectorError};
pub use scheduler::{Scheduler, TimerId, TimerTask};
pub use storage::MemoryStorage;
