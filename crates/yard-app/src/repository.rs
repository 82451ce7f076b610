//! Repository adapters for the infrastructure layer

use std::path::PathBuf;

use tracing::info;
use yard_domain::model::YardArea;
use yard_domain::repository::YardAreaRepository;
use yard_infra::{FileYardAreaRepository, RandomOccupancySource};
use yard_types::Result;

use crate::config::Config;
use crate::constants::default_areas;

/// Open the file-backed area repository at a TOML path
pub fn open_area_repo(toml_path: PathBuf) -> Result<FileYardAreaRepository> {
    FileYardAreaRepository::new(toml_path)
}

/// Areas from the configured file, or the built-in defaults
pub fn load_areas(config: &Config) -> Result<Vec<YardArea>> {
    match &config.areas_file {
        Some(path) => {
            let areas = open_area_repo(path.clone())?.find_all()?;
            info!(path = %path.display(), areas = areas.len(), "Using areas from file");
            Ok(areas)
        }
        None => Ok(default_areas()),
    }
}

/// Random occupancy source seeded from the config
pub fn open_occupancy_source(config: &Config) -> Result<RandomOccupancySource> {
    Ok(RandomOccupancySource::new(config.generation_policy()?, config.seed))
}
