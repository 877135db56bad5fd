//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, GridConfig};

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// let grid = loader.grid();
/// println!("Pixels per minute: {}", grid.pixels_per_minute);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Fields absent from the file keep their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing,
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML or
    /// an inconsistent grid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        if let Some(message) = config.grid.validation_error() {
            return Err(EngineError::ConfigParseError {
                path: path_str,
                message,
            });
        }

        Ok(Self { config })
    }

    /// Creates a loader carrying the built-in default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns the loaded engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the calendar grid geometry.
    pub fn grid(&self) -> &GridConfig {
        &self.config.grid
    }
}
