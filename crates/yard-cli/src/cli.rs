//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use yard_domain::model::ViewPreset;
use yard_types::OutputFormat;

#[derive(Parser)]
#[command(name = "yard-planner")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Container yard occupancy statistics and pseudo-3D layout view")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML file with [[areas]] tables. Uses config value if not specified.
    #[arg(long, global = true)]
    pub areas: Option<PathBuf>,

    /// RNG seed for a reproducible snapshot. Uses config value if not specified.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configured yard areas
    Areas,

    /// Show occupancy statistics
    Stats {
        /// Only this area; all areas plus totals if omitted
        #[arg(long, short = 'a')]
        area: Option<String>,
    },

    /// List slots of an area
    Slots {
        #[arg(long, short = 'a')]
        area: String,

        /// Only empty slots that can take a container now
        #[arg(long)]
        placeable: bool,

        /// Only this layer
        #[arg(long, short = 'l')]
        layer: Option<u32>,
    },

    /// Container type, customer and per-layer breakdown of an area
    Breakdown {
        #[arg(long, short = 'a')]
        area: String,
    },

    /// Render an area to draw primitives
    Render {
        #[arg(long, short = 'a')]
        area: String,

        /// View preset (birds_eye, front, side, isometric). Uses config value if not specified.
        #[arg(long)]
        view: Option<ViewPreset>,

        /// Zoom percentage (50-200). Uses config value if not specified.
        #[arg(long, short = 'z')]
        zoom: Option<u32>,

        /// Draw stacks only up to this layer
        #[arg(long, short = 'l')]
        layer: Option<u32>,

        /// Surface width in pixels
        #[arg(long, default_value = "800")]
        width: f32,

        /// Surface height in pixels
        #[arg(long, default_value = "600")]
        height: f32,
    },

    /// Export the yard layout to Excel (or CSV)
    Export {
        /// Output file path
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Write CSV instead of Excel
        #[arg(long)]
        csv: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set fixed RNG seed
        #[arg(long)]
        set_seed: Option<u64>,

        /// Clear the fixed RNG seed
        #[arg(long)]
        clear_seed: bool,

        /// Set areas TOML file
        #[arg(long)]
        set_areas: Option<PathBuf>,

        /// Set minimum occupancy rate (0.0-1.0)
        #[arg(long)]
        set_min_rate: Option<f64>,

        /// Set maximum occupancy rate (0.0-1.0)
        #[arg(long)]
        set_max_rate: Option<f64>,

        /// Set default zoom percentage
        #[arg(long)]
        set_zoom: Option<u32>,

        /// Set default view preset
        #[arg(long)]
        set_view: Option<ViewPreset>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
