//! Yard area configuration loader from TOML
//!
//! Expected layout:
//!
//! ```toml
//! [[areas]]
//! id = "AA"
//! name = "AA区"
//! rows = 8
//! cols = 12
//! max_layers = 4
//! color = "#ff6b6b"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use yard_domain::model::{find_area, validate_areas, YardArea};
use yard_types::{ConfigError, Error, Result};

/// Container for parsing areas.toml
#[derive(Debug, Deserialize)]
struct AreaConfigFile {
    #[serde(default)]
    areas: Vec<YardArea>,
}

/// Validated area list loaded from TOML, in file order
#[derive(Debug, Clone)]
pub struct AreaConfigLoader {
    areas: Vec<YardArea>,
}

impl AreaConfigLoader {
    /// Load area definitions from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read area file {}: {}",
                path.display(),
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), areas = loader.areas.len(), "Loaded yard areas");
        Ok(loader)
    }

    /// Load area definitions from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: AreaConfigFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse area TOML: {}",
                e
            )))
        })?;

        if config.areas.is_empty() {
            return Err(Error::Config(ConfigError::ParseError(
                "Area file defines no [[areas]]".to_string(),
            )));
        }
        validate_areas(&config.areas)?;

        Ok(Self {
            areas: config.areas,
        })
    }

    pub fn get_area(&self, area_id: &str) -> Option<&YardArea> {
        find_area(&self.areas, area_id)
    }

    pub fn areas(&self) -> &[YardArea] {
        &self.areas
    }

    pub fn into_areas(self) -> Vec<YardArea> {
        self.areas
    }
}
