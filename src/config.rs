//! Site configuration.
//!
//! Every field has a default matching the stock landing page, so a missing or partial
//! config file is fine. The file is JSON, read from an explicit path or from
//! `<config_dir>/aurora-page/config.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

const APP_DIR: &str = "aurora-page";
const CONFIG_FILE: &str = "config.json";

/// Tunables for the page layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Storage key under which the theme preference is persisted.
    pub theme_key: String,
    /// Carousel auto-advance period.
    pub carousel_interval_ms: u64,
    /// Simulated submission latency.
    pub submit_delay_ms: u64,
    /// Viewports narrower than this (logical pixels) use the mobile menu.
    pub narrow_breakpoint: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: "aurora_theme".to_string(),
            carousel_interval_ms: 4500,
            submit_delay_ms: 800,
            narrow_breakpoint: 720.0,
        }
    }
}

impl SiteConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let raw = fs::read_to_string(path).map_err(|source| PageError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig = serde_json::from_str(&raw).map_err(|source| PageError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` (or the default location), falling back to defaults on any failure.
    ///
    /// A missing default file is silent; every other failure is logged.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let explicit = path.is_some();
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };

        if !explicit && !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded site config");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "using default site config");
                Self::default()
            }
        }
    }

    /// `<config_dir>/aurora-page/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), PageError> {
        if self.theme_key.is_empty() {
            return Err(PageError::InvalidConfig("theme_key must not be empty".to_string()));
        }
        if self.carousel_interval_ms == 0 {
            return Err(PageError::InvalidConfig("carousel_interval_ms must be positive".to_string()));
        }
        if self.submit_delay_ms == 0 {
            return Err(PageError::InvalidConfig("submit_delay_ms must be positive".to_string()));
        }
        if !(self.narrow_breakpoint.is_finite() && self.narrow_breakpoint > 0.0) {
            return Err(PageError::InvalidConfig("narrow_breakpoint must be a positive width".to_string()));
        }
        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.theme_key, "aurora_theme");
        assert_eq!(config.carousel_interval(), Duration::from_millis(4500));
        assert_eq!(config.submit_delay(), Duration::from_millis(800));
        assert_eq!(config.narrow_breakpoint, 720.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"carousel_interval_ms": 3000}}"#).unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.carousel_interval_ms, 3000);
        assert_eq!(config.submit_delay_ms, 800);
        assert_eq!(config.theme_key, "aurora_theme");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"submit_delay_ms": 0}}"#).unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PageError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_error_and_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(SiteConfig::load(file.path()), Err(PageError::ConfigParse { .. })));
        assert_eq!(SiteConfig::load_or_default(Some(file.path())), SiteConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(SiteConfig::load(&path), Err(PageError::ConfigIo { .. })));
        assert_eq!(SiteConfig::load_or_default(Some(&path)), SiteConfig::default());
    }
}
