//! In-memory implementation of the persisted key/value store.
//!
//! The page persists through [`eframe::Storage`]; the desktop shell hands in eframe's
//! own file-backed storage, while tests and headless hosts use [`MemoryStorage`].

use std::collections::HashMap;

/// Key/value storage kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
    flushes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.data.insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of times `flush` has been called.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;

    #[test]
    fn test_set_and_get() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get_string("aurora_theme"), None);

        storage.set_string("aurora_theme", "light".to_string());
        storage.flush();

        assert_eq!(storage.get_string("aurora_theme").as_deref(), Some("light"));
        assert_eq!(storage.flush_count(), 1);
    }

    #[test]
    fn test_with_entry() {
        let storage = MemoryStorage::with_entry("aurora_theme", "dark");
        assert_eq!(storage.get_string("aurora_theme").as_deref(), Some("dark"));
    }
}
