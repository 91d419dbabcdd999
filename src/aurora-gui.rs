//! Aurora landing page desktop shell
//!
//! Renders the Aurora landing page with egui and drives its interaction layer:
//! - Collapsible navigation with smooth scrolling to page sections
//! - Light/dark theme toggle persisted across sessions
//! - Auto-advancing gallery carousel
//! - Contact form with inline validation and a simulated submit

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The shell is organized like the page it hosts:
//! - `app/` - Shell state and coordinators (page events, timers, theme)
//! - `ui/` - Panel rendering for header, sections, contact form and footer

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

mod app;
mod ui;

use app::{AppState, PageCoordinator, ThemeCoordinator};
use aurora_page::{landing_page, Page, PageError, SiteConfig};
use tracing_subscriber::EnvFilter;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the Aurora shell.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional path to a site config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SiteConfig::load_or_default(config_path.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Aurora"),
        ..Default::default()
    };

    eframe::run_native(
        "Aurora",
        options,
        Box::new(move |cc| Ok(Box::new(AuroraApp::new(cc, config.clone())?))),
    )
}

/// The Aurora shell application.
///
/// Delegates to coordinators:
/// - `PageCoordinator` runs timers and routes page events
/// - `ThemeCoordinator` applies and persists the theme
/// - `PanelManager` renders the panels
struct AuroraApp {
    /// Shell state, including the running page
    state: AppState,
}

impl AuroraApp {
    /// Starts the page with the theme preference from persistent storage.
    fn new(cc: &eframe::CreationContext, config: SiteConfig) -> Result<Self, PageError> {
        let page = Page::start(landing_page(), config, cc.storage)?;
        Ok(Self {
            state: AppState::new(page),
        })
    }
}

impl eframe::App for AuroraApp {
    /// Called when the app is being shut down - ensures the theme is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, &self.state);
    }

    /// Main update loop.
    ///
    /// 1. Run page timers for the time since the last frame
    /// 2. Apply theme
    /// 3. Collect window events (resize, Escape)
    /// 4. Render all panels
    /// 5. Dispatch collected events to the page
    /// 6. Schedule the next repaint for the next timer
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        PageCoordinator::run_timers(&mut self.state, Instant::now());

        let palette = ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let mut events = PageCoordinator::collect_window_events(ctx, &mut self.state);
        events.extend(PanelManager::render_all_panels(ctx, &mut self.state, &palette));

        for event in events {
            match frame.storage_mut() {
                Some(storage) => PageCoordinator::dispatch(&mut self.state, event, Some(storage)),
                None => PageCoordinator::dispatch(&mut self.state, event, None),
            };
        }

        ctx.request_repaint_after(PageCoordinator::repaint_delay(&self.state));
    }
}
