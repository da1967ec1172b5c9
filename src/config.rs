//! Runtime configuration
//!
//! Every section is optional; anything missing falls back to the page's
//! built-in values.

use std::path::{Path, PathBuf};

use field_simulation::{CursorParams, FieldParams};
use folio_reveal::{ObserverOptions, SceneError};
use serde::Deserialize;
use thiserror::Error;

use crate::loader::LoaderConfig;
use crate::nav::NavConfig;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub field: FieldParams,
    pub cursor: CursorParams,
    pub observer: ObserverOptions,
    pub loader: LoaderConfig,
    pub nav: NavConfig,
}

impl FolioConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&source)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Anything that stops the session from starting
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = FolioConfig::parse("").unwrap();
        assert_eq!(config.field, FieldParams::default());
        assert_eq!(config.observer, ObserverOptions::default());
        assert_eq!(config.loader.type_interval_ms, 80);
    }

    #[test]
    fn test_partial_sections() {
        let config = FolioConfig::parse(
            r#"
            [field]
            count = 12
            seed = 9

            [observer]
            counter_steps = 30

            [observer.intersection]
            threshold = 0.25

            [loader]
            text = "HELLO"
            "#,
        )
        .unwrap();

        assert_eq!(config.field.count, 12);
        assert_eq!(config.field.seed, Some(9));
        assert_eq!(config.field.repel_radius, 15.0);
        assert_eq!(config.observer.counter_steps, 30);
        assert_eq!(config.observer.counter_delay_ms, 300);
        assert_eq!(config.observer.intersection.threshold, 0.25);
        assert_eq!(config.observer.intersection.root_margin.bottom, -50.0);
        assert_eq!(config.loader.text, "HELLO");
    }

    #[test]
    fn test_bad_type_is_error() {
        let err = FolioConfig::parse("[field]\ncount = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FolioConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
