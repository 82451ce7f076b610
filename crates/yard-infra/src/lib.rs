//! Infrastructure layer for yard-planner
//!
//! File-based area configuration, the random occupancy source and CSV output.

pub mod area_loader;
pub mod layout_csv;
pub mod persistence;
pub mod random_source;

pub use area_loader::AreaConfigLoader;
pub use layout_csv::write_layout_csv;
pub use persistence::FileYardAreaRepository;
pub use random_source::RandomOccupancySource;
