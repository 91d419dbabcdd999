//! Theme application and persistence coordination.
//!
//! The page decides the theme (the `light` class on its body); this coordinator turns
//! that into egui visuals and mirrors the preference into eframe storage on shutdown.

use aurora_page::{ThemePreference, ThemeStore};
use egui::Color32;

use crate::app::AppState;

/// Accent colors layered over egui's stock light and dark visuals.
#[derive(Debug, Clone, Copy)]
pub struct SitePalette {
    pub accent: Color32,
    pub error: Color32,
    pub muted: Color32,
    pub slide_background: Color32,
}

impl SitePalette {
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self {
                accent: Color32::from_rgb(0, 122, 204),
                error: Color32::from_rgb(196, 43, 28),
                muted: Color32::from_rgb(110, 110, 110),
                slide_background: Color32::from_rgb(225, 236, 246),
            },
            ThemePreference::Dark => Self {
                accent: Color32::from_rgb(139, 233, 253),
                error: Color32::from_rgb(255, 85, 85),
                muted: Color32::from_rgb(150, 150, 150),
                slide_background: Color32::from_rgb(40, 42, 54),
            },
        }
    }
}

/// Coordinates theme application and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// The preference currently applied to the page.
    pub fn current_preference(state: &AppState) -> ThemePreference {
        state.page.theme().current(state.page.surface())
    }

    /// Applies the page's theme to the egui context.
    ///
    /// Called every frame so a toggle is visible on the next repaint.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) -> SitePalette {
        let preference = Self::current_preference(state);
        let palette = SitePalette::for_preference(preference);

        let mut visuals = if preference.is_light() {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        visuals.hyperlink_color = palette.accent;
        visuals.selection.stroke.color = palette.accent;
        visuals.error_fg_color = palette.error;
        ctx.set_visuals(visuals);

        palette
    }

    /// Saves the current preference to persistent storage.
    ///
    /// The page already persists on every toggle; this covers shutdown.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, state: &AppState) {
        let store: &ThemeStore = state.page.theme().store();
        store.save(storage, Self::current_preference(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_page::{landing_page, MemoryStorage, Page, PageEvent, SiteConfig};
    use eframe::Storage;

    #[test]
    fn test_save_mirrors_page_theme() {
        let page = Page::start(landing_page(), SiteConfig::default(), None).unwrap();
        let mut state = AppState::new(page);
        let mut storage = MemoryStorage::new();

        ThemeCoordinator::save_theme_to_storage(&mut storage, &state);
        assert_eq!(storage.get_string("aurora_theme").as_deref(), Some("dark"));

        let button = state.page.elements().theme_toggle;
        state.page.dispatch(PageEvent::Click(button), None);
        assert_eq!(ThemeCoordinator::current_preference(&state), ThemePreference::Light);

        ThemeCoordinator::save_theme_to_storage(&mut storage, &state);
        assert_eq!(storage.get_string("aurora_theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_palettes_differ() {
        let light = SitePalette::for_preference(ThemePreference::Light);
        let dark = SitePalette::for_preference(ThemePreference::Dark);
        assert_ne!(light.accent, dark.accent);
    }
}
