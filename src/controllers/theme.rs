//! Light/dark theme preference and its toggle button.
//!
//! The preference is stored as the literal string `"light"` or `"dark"` under a single
//! key. Anything other than `"light"`, including no entry at all, means dark.

use serde::{Deserialize, Serialize};

use crate::page::PageElements;
use crate::surface::{NodeId, UiSurface};

/// Marker class on the page root while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

const ARIA_PRESSED: &str = "aria-pressed";

/// The user's color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Interprets a stored value.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    pub fn from_light(is_light: bool) -> Self {
        if is_light {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        }
    }

    /// The literal written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, ThemePreference::Light)
    }

    pub fn toggled(&self) -> Self {
        Self::from_light(!self.is_light())
    }

    /// Label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☀️",
            ThemePreference::Dark => "🌙",
        }
    }
}

/// Reads and writes the persisted preference and applies it to the page root.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    key: String,
}

impl ThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored preference, defaulting to dark when there is no storage.
    pub fn load(&self, storage: Option<&dyn eframe::Storage>) -> ThemePreference {
        let stored = storage.and_then(|s| s.get_string(&self.key));
        ThemePreference::from_stored(stored.as_deref())
    }

    /// Persists `preference` and flushes the storage.
    pub fn save(&self, storage: &mut dyn eframe::Storage, preference: ThemePreference) {
        storage.set_string(&self.key, preference.as_str().to_string());
        storage.flush();
    }

    /// Adds or removes the light marker class on `root`.
    pub fn apply<S: UiSurface + ?Sized>(surface: &mut S, root: NodeId, preference: ThemePreference) {
        surface.toggle_class(root, LIGHT_CLASS, Some(preference.is_light()));
    }
}

/// The theme toggle button.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    button: NodeId,
    root: NodeId,
    store: ThemeStore,
}

impl ThemeToggle {
    pub fn new(elements: &PageElements, store: ThemeStore) -> Self {
        Self {
            button: elements.theme_toggle,
            root: elements.body,
            store,
        }
    }

    pub fn button(&self) -> NodeId {
        self.button
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Applies the stored preference before any interaction so the first render matches.
    pub fn init<S: UiSurface + ?Sized>(
        &self,
        surface: &mut S,
        storage: Option<&dyn eframe::Storage>,
    ) -> ThemePreference {
        let preference = self.store.load(storage);
        ThemeStore::apply(surface, self.root, preference);
        self.update_button(surface);
        tracing::debug!(theme = preference.as_str(), "theme initialized");
        preference
    }

    /// The preference currently shown on the page.
    pub fn current<S: UiSurface + ?Sized>(&self, surface: &S) -> ThemePreference {
        ThemePreference::from_light(surface.has_class(self.root, LIGHT_CLASS))
    }

    /// Flips the theme, persists it when storage is available, and refreshes the button.
    pub fn toggle<S: UiSurface + ?Sized>(
        &self,
        surface: &mut S,
        storage: Option<&mut dyn eframe::Storage>,
    ) -> ThemePreference {
        let next = self.current(surface).toggled();
        ThemeStore::apply(surface, self.root, next);
        match storage {
            Some(storage) => self.store.save(storage, next),
            None => tracing::warn!("no storage available, theme preference not persisted"),
        }
        self.update_button(surface);
        tracing::debug!(theme = next.as_str(), "theme toggled");
        next
    }

    fn update_button<S: UiSurface + ?Sized>(&self, surface: &mut S) {
        let current = self.current(surface);
        surface.set_text(self.button, current.label());
        surface.set_attribute(
            self.button,
            ARIA_PRESSED,
            if current.is_light() { "true" } else { "false" },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::landing_page;
    use crate::storage::MemoryStorage;
    use crate::Document;
    use eframe::Storage;

    const KEY: &str = "aurora_theme";

    fn setup() -> (Document, ThemeToggle) {
        let doc = landing_page();
        let elements = PageElements::bind(&doc).unwrap();
        let toggle = ThemeToggle::new(&elements, ThemeStore::new(KEY));
        (doc, toggle)
    }

    #[test]
    fn test_stored_value_interpretation() {
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("Light")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
    }

    #[test]
    fn test_load_without_storage_defaults_to_dark() {
        let store = ThemeStore::new(KEY);
        assert_eq!(store.load(None), ThemePreference::Dark);
    }

    #[test]
    fn test_init_applies_stored_light() {
        let (mut doc, toggle) = setup();
        let storage = MemoryStorage::with_entry(KEY, "light");

        assert_eq!(toggle.init(&mut doc, Some(&storage)), ThemePreference::Light);
        assert!(doc.has_class(doc.body(), LIGHT_CLASS));
        assert_eq!(doc.text(toggle.button()), "☀️");
        assert_eq!(doc.attribute(toggle.button(), ARIA_PRESSED).as_deref(), Some("true"));
    }

    #[test]
    fn test_init_defaults_to_dark() {
        let (mut doc, toggle) = setup();
        let storage = MemoryStorage::with_entry(KEY, "sepia");

        assert_eq!(toggle.init(&mut doc, Some(&storage)), ThemePreference::Dark);
        assert!(!doc.has_class(doc.body(), LIGHT_CLASS));
        assert_eq!(doc.text(toggle.button()), "🌙");
        assert_eq!(doc.attribute(toggle.button(), ARIA_PRESSED).as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_persists_and_flushes() {
        let (mut doc, toggle) = setup();
        let mut storage = MemoryStorage::new();
        toggle.init(&mut doc, Some(&storage));

        assert_eq!(toggle.toggle(&mut doc, Some(&mut storage)), ThemePreference::Light);
        assert_eq!(storage.get_string(KEY).as_deref(), Some("light"));
        assert_eq!(storage.flush_count(), 1);

        assert_eq!(toggle.toggle(&mut doc, Some(&mut storage)), ThemePreference::Dark);
        assert_eq!(storage.get_string(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_double_toggle_restores_label_and_state() {
        let (mut doc, toggle) = setup();
        let mut storage = MemoryStorage::with_entry(KEY, "light");
        toggle.init(&mut doc, Some(&storage));

        toggle.toggle(&mut doc, Some(&mut storage));
        toggle.toggle(&mut doc, Some(&mut storage));

        assert_eq!(toggle.current(&doc), ThemePreference::Light);
        assert_eq!(storage.get_string(KEY).as_deref(), Some("light"));
        assert_eq!(doc.text(toggle.button()), "☀️");
    }

    #[test]
    fn test_toggle_without_storage_still_updates_page() {
        let (mut doc, toggle) = setup();
        toggle.init(&mut doc, None);

        assert_eq!(toggle.toggle(&mut doc, None), ThemePreference::Light);
        assert!(doc.has_class(doc.body(), LIGHT_CLASS));
    }
}
