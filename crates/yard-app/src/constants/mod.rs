//! Built-in yard defaults

pub mod areas;

pub use areas::{default_areas, DEFAULT_AREA_ID};
