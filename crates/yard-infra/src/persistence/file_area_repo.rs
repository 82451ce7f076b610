//! File-based implementation of YardAreaRepository

use std::path::{Path, PathBuf};

use yard_domain::model::YardArea;
use yard_domain::repository::YardAreaRepository;
use yard_types::Error;

use crate::area_loader::AreaConfigLoader;

/// Yard area repository backed by a TOML file
pub struct FileYardAreaRepository {
    toml_path: PathBuf,
    loader: AreaConfigLoader,
}

impl FileYardAreaRepository {
    /// Open the repository, reading and validating the file once
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = AreaConfigLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    pub fn toml_path(&self) -> &Path {
        &self.toml_path
    }

    /// Re-read the file; the previous areas are kept if it no longer parses
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = AreaConfigLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl YardAreaRepository for FileYardAreaRepository {
    fn find_all(&self) -> Result<Vec<YardArea>, Error> {
        Ok(self.loader.areas().to_vec())
    }

    fn find_by_id(&self, area_id: &str) -> Result<Option<YardArea>, Error> {
        Ok(self.loader.get_area(area_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_areas(path: &Path, rows: u32) {
        let content = format!(
            "[[areas]]\nid = \"CC\"\nname = \"CC区\"\nrows = {}\ncols = 10\nmax_layers = 3\ncolor = \"#45b7d1\"\n",
            rows
        );
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_find_all_and_by_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("areas.toml");
        write_areas(&path, 6);

        let repo = FileYardAreaRepository::new(path.clone()).unwrap();
        assert_eq!(repo.toml_path(), path.as_path());
        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert_eq!(repo.find_by_id("CC").unwrap().unwrap().rows, 6);
        assert!(repo.find_by_id("AA").unwrap().is_none());
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("areas.toml");
        write_areas(&path, 6);
        let mut repo = FileYardAreaRepository::new(path.clone()).unwrap();

        write_areas(&path, 9);
        repo.reload().unwrap();
        assert_eq!(repo.find_by_id("CC").unwrap().unwrap().rows, 9);
    }

    #[test]
    fn test_failed_reload_keeps_previous_areas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("areas.toml");
        write_areas(&path, 6);
        let mut repo = FileYardAreaRepository::new(path.clone()).unwrap();

        write_areas(&path, 0);
        assert!(repo.reload().is_err());
        assert_eq!(repo.find_by_id("CC").unwrap().unwrap().rows, 6);
    }
}
