//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_area_repo;

pub use file_area_repo::FileYardAreaRepository;
