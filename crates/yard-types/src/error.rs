//! Error types for yard-planner

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Yard layout and occupancy snapshot errors
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Area {area_id} has invalid dimensions {rows}x{cols}x{max_layers}")]
    InvalidDimensions {
        area_id: String,
        rows: u32,
        cols: u32,
        max_layers: u32,
    },

    #[error("Area {area_id} has invalid color: {color}")]
    InvalidColor { area_id: String, color: String },

    #[error("Duplicate area id: {0}")]
    DuplicateArea(String),

    #[error("Unknown area: {0}")]
    UnknownArea(String),

    #[error("Slot {area_id}/{row}/{col}/{layer} is outside the area bounds")]
    SlotOutOfBounds {
        area_id: String,
        row: u32,
        col: u32,
        layer: u32,
    },

    #[error("Slot {area_id}/{row}/{col}/{layer} appears more than once")]
    DuplicateSlot {
        area_id: String,
        row: u32,
        col: u32,
        layer: u32,
    },

    #[error("Container at {area_id}/{row}/{col}/{layer} has no container below it")]
    FloatingContainer {
        area_id: String,
        row: u32,
        col: u32,
        layer: u32,
    },

    #[error("Area {area_id} has {actual} slots, expected {expected}")]
    IncompleteArea {
        area_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid occupancy range: {min}..{max}")]
    InvalidOccupancyRange { min: f64, max: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Planning service error: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, Error>;
