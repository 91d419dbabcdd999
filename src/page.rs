//! Page wiring.
//!
//! [`Page`] is built once per page load. It binds the elements every component needs,
//! runs the startup steps (theme, footer year, carousel) and from then on routes each
//! [`PageEvent`] to exactly one handler. Timers fire only from [`Page::advance`].

use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::SiteConfig;
use crate::controllers::contact::{LogSink, SubmissionSink};
use crate::controllers::{
    CarouselController, ContactFormController, FooterYearStamper, NavController, SmoothScrollRouter,
    ThemeStore, ThemeToggle,
};
use crate::error::PageError;
use crate::scheduler::{Scheduler, TimerTask};
use crate::surface::{NodeId, UiSurface};

/// Element ids and classes the page layer expects.
pub mod ids {
    pub const NAV: &str = "nav";
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const NAV_LIST_CLASS: &str = "nav-list";
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const CONTACT_FORM: &str = "contactForm";
    pub const YEAR: &str = "year";
    pub const CLEAR_BUTTON: &str = "clearBtn";
    pub const ERR_NAME: &str = "err-name";
    pub const ERR_EMAIL: &str = "err-email";
    pub const ERR_MESSAGE: &str = "err-message";
    pub const FORM_STATUS: &str = "formStatus";
    pub const CAROUSEL: &str = "carousel";
    pub const SLIDE_CLASS: &str = "slide";
}

/// Handles to every element the components bind at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageElements {
    pub body: NodeId,
    pub nav: NodeId,
    pub nav_toggle: NodeId,
    pub nav_list: NodeId,
    pub theme_toggle: NodeId,
    pub form: NodeId,
    pub year: NodeId,
    pub clear_button: NodeId,
    pub err_name: NodeId,
    pub err_email: NodeId,
    pub err_message: NodeId,
    pub form_status: NodeId,
    /// Optional: pages without a carousel are fine.
    pub carousel: Option<NodeId>,
}

impl PageElements {
    /// Resolves all required elements, failing on the first one that is missing.
    pub fn bind<S: UiSurface + ?Sized>(surface: &S) -> Result<Self, PageError> {
        let by_id = |id: &'static str| surface.element_by_id(id).ok_or(PageError::MissingElement(id));
        let nav_list = surface
            .query_selector(&format!(".{}", ids::NAV_LIST_CLASS))?
            .ok_or(PageError::MissingElement(ids::NAV_LIST_CLASS))?;

        Ok(Self {
            body: surface.body(),
            nav: by_id(ids::NAV)?,
            nav_toggle: by_id(ids::NAV_TOGGLE)?,
            nav_list,
            theme_toggle: by_id(ids::THEME_TOGGLE)?,
            form: by_id(ids::CONTACT_FORM)?,
            year: by_id(ids::YEAR)?,
            clear_button: by_id(ids::CLEAR_BUTTON)?,
            err_name: by_id(ids::ERR_NAME)?,
            err_email: by_id(ids::ERR_EMAIL)?,
            err_message: by_id(ids::ERR_MESSAGE)?,
            form_status: by_id(ids::FORM_STATUS)?,
            carousel: surface.element_by_id(ids::CAROUSEL),
        })
    }
}

/// Configuration and element handles shared by the components.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub config: SiteConfig,
    pub elements: PageElements,
}

/// A user or host event delivered to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// An element was clicked.
    Click(NodeId),
    /// A key was pressed anywhere on the page (DOM `key` name, e.g. `"Escape"`).
    KeyDown(String),
    /// A form was submitted.
    Submit(NodeId),
    /// The viewport changed size; the surface already reports the new width.
    Resize,
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The host must not perform the event's default action.
    pub default_prevented: bool,
}

impl EventOutcome {
    pub const PREVENTED: Self = Self {
        default_prevented: true,
    };
}

/// A running page: the surface plus every component bound to it.
pub struct Page<S: UiSurface> {
    surface: S,
    context: PageContext,
    scheduler: Scheduler,
    clock: Box<dyn Clock>,
    nav: NavController,
    router: SmoothScrollRouter,
    theme: ThemeToggle,
    carousel: CarouselController,
    contact: ContactFormController,
}

impl<S: UiSurface> Page<S> {
    /// Starts the page with the system clock and the logging submission sink.
    pub fn start(
        surface: S,
        config: SiteConfig,
        storage: Option<&dyn eframe::Storage>,
    ) -> Result<Self, PageError> {
        Self::start_with(surface, config, storage, Box::new(SystemClock), Box::new(LogSink))
    }

    /// Starts the page with an explicit clock and submission sink.
    pub fn start_with(
        mut surface: S,
        config: SiteConfig,
        storage: Option<&dyn eframe::Storage>,
        clock: Box<dyn Clock>,
        sink: Box<dyn SubmissionSink>,
    ) -> Result<Self, PageError> {
        config.validate()?;
        let elements = PageElements::bind(&surface)?;
        let mut scheduler = Scheduler::new();

        let nav = NavController::new(&elements, config.narrow_breakpoint);
        let router = SmoothScrollRouter::bind(&surface);

        let theme = ThemeToggle::new(&elements, ThemeStore::new(config.theme_key.clone()));
        theme.init(&mut surface, storage);

        FooterYearStamper::stamp(&mut surface, elements.year, clock.as_ref());

        let carousel = CarouselController::start(
            &mut surface,
            elements.carousel,
            &mut scheduler,
            config.carousel_interval(),
        );
        let contact = ContactFormController::new(&surface, &elements, config.submit_delay(), sink);

        tracing::info!(
            links = router.anchors().len(),
            slides = carousel.slides().len(),
            "page started"
        );

        Ok(Self {
            surface,
            context: PageContext { config, elements },
            scheduler,
            clock,
            nav,
            router,
            theme,
            carousel,
            contact,
        })
    }

    /// Routes `event` to its handler.
    ///
    /// `storage` is only touched by the theme toggle; without it the theme still flips
    /// but is not persisted.
    pub fn dispatch(
        &mut self,
        event: PageEvent,
        storage: Option<&mut dyn eframe::Storage>,
    ) -> EventOutcome {
        match event {
            PageEvent::Click(node) if node == self.nav.toggle_button() => {
                self.nav.toggle(&mut self.surface);
                EventOutcome::default()
            }
            PageEvent::Click(node) if node == self.theme.button() => {
                self.theme.toggle(&mut self.surface, storage);
                EventOutcome::default()
            }
            PageEvent::Click(node) if node == self.contact.clear_button() => {
                self.contact.clear(&mut self.surface, &mut self.scheduler);
                EventOutcome::default()
            }
            PageEvent::Click(node) => {
                let outcome = self.router.handle_click(&mut self.surface, &self.nav, node);
                EventOutcome {
                    default_prevented: outcome.prevents_default(),
                }
            }
            PageEvent::Submit(form) if form == self.contact.form() => {
                self.contact
                    .submit(&mut self.surface, &mut self.scheduler, self.clock.as_ref());
                EventOutcome::PREVENTED
            }
            PageEvent::Submit(_) => EventOutcome::default(),
            PageEvent::KeyDown(key) => {
                self.nav.close_on_escape(&mut self.surface, &key);
                EventOutcome::default()
            }
            PageEvent::Resize => {
                self.nav.handle_resize(&mut self.surface);
                EventOutcome::default()
            }
        }
    }

    /// Advances page time by `elapsed`, running every timer that comes due.
    ///
    /// Returns the number of timer firings.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let fired = self.scheduler.advance(elapsed);
        for (id, task) in &fired {
            match task {
                TimerTask::CarouselAdvance => self.carousel.advance(&mut self.surface),
                TimerTask::SubmissionComplete => {
                    self.contact.complete(&mut self.surface, *id);
                }
            }
        }
        fired.len()
    }

    /// Time until the next timer is due, `None` if nothing is scheduled.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    pub fn elements(&self) -> &PageElements {
        &self.context.elements
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn router(&self) -> &SmoothScrollRouter {
        &self.router
    }

    pub fn theme(&self) -> &ThemeToggle {
        &self.theme
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn contact(&self) -> &ContactFormController {
        &self.contact
    }
}
