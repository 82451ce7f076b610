//! Configuration management for yard-planner
//!
//! Config stored at: ~/.config/yard-planner/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use yard_domain::model::{clamp_zoom, ViewPreset, DEFAULT_ZOOM};
use yard_domain::service::snapshot_generator::{DEFAULT_MAX_OCCUPANCY, DEFAULT_MIN_OCCUPANCY};
use yard_domain::service::GenerationPolicy;
use yard_types::{ConfigError, OutputFormat, Result};

use crate::constants::DEFAULT_AREA_ID;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TOML file with `[[areas]]` tables; built-in areas when unset
    #[serde(default)]
    pub areas_file: Option<PathBuf>,

    /// Lower bound of the random per-area occupancy (0.0-1.0)
    #[serde(default = "default_min_rate")]
    pub min_occupancy_rate: f64,

    /// Upper bound of the random per-area occupancy (0.0-1.0)
    #[serde(default = "default_max_rate")]
    pub max_occupancy_rate: f64,

    /// Fixed RNG seed for reproducible snapshots
    #[serde(default)]
    pub seed: Option<u64>,

    /// Zoom percentage the view starts at
    #[serde(default = "default_zoom")]
    pub default_zoom: u32,

    #[serde(default)]
    pub default_view: ViewPreset,

    #[serde(default = "default_area")]
    pub default_area: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_min_rate() -> f64 {
    DEFAULT_MIN_OCCUPANCY
}

fn default_max_rate() -> f64 {
    DEFAULT_MAX_OCCUPANCY
}

fn default_zoom() -> u32 {
    DEFAULT_ZOOM
}

fn default_area() -> String {
    DEFAULT_AREA_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            areas_file: None,
            min_occupancy_rate: default_min_rate(),
            max_occupancy_rate: default_max_rate(),
            seed: None,
            default_zoom: default_zoom(),
            default_view: ViewPreset::default(),
            default_area: default_area(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("yard-planner");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Restore every setting to its default
    pub fn reset(&mut self) {
        *self = Config::default();
    }

    /// Zoom the view starts at, clamped to the supported range
    pub fn initial_zoom(&self) -> u32 {
        clamp_zoom(self.default_zoom)
    }

    /// Build the generation policy from the configured occupancy range.
    ///
    /// Both bounds are clamped into [0, 1]; an inverted range is an error.
    pub fn generation_policy(&self) -> Result<GenerationPolicy> {
        let min = self.min_occupancy_rate.clamp(0.0, 1.0);
        let max = self.max_occupancy_rate.clamp(0.0, 1.0);
        Ok(GenerationPolicy::new(min, max)?)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Yard Planner Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Areas file:     {}",
            self.areas_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Occupancy:      {:.0}% - {:.0}%",
            self.min_occupancy_rate * 100.0,
            self.max_occupancy_rate * 100.0
        )?;
        writeln!(
            f,
            "Seed:           {}",
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string())
        )?;
        writeln!(f, "Default zoom:   {}%", self.default_zoom)?;
        writeln!(f, "Default view:   {} ({})", self.default_view, self.default_view.label())?;
        writeln!(f, "Default area:   {}", self.default_area)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
