use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use trussgraph::Dimension;

/// Report element geometry and stiffness for a truss described by two listings.
#[derive(Debug, Parser)]
#[command(name = "trussgraph", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Element listing: `label start_node end_node` per line.
    pub elements: PathBuf,
    /// Node listing: `label x y [z]` per line.
    pub nodes: PathBuf,
    /// JSON file with `properties` and `options` sections.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Young's modulus in pascals.
    #[arg(long)]
    pub young_modulus: Option<f64>,
    /// Poisson's ratio.
    #[arg(long)]
    pub poisson_ratio: Option<f64>,
    /// Cross-sectional area in square metres.
    #[arg(long)]
    pub area: Option<f64>,
    /// Coordinates per node record.
    #[arg(long, value_enum)]
    pub dimension: Option<DimensionArg>,
    /// Fail when two nodes or two elements share a label.
    #[arg(long)]
    pub reject_duplicate_labels: bool,
    /// Check element node references while loading.
    #[arg(long)]
    pub eager_references: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line spelling of [`Dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    /// `x y`
    Planar,
    /// `x y z`
    Spatial,
}

impl From<DimensionArg> for Dimension {
    fn from(value: DimensionArg) -> Self {
        match value {
            DimensionArg::Planar => Dimension::Planar,
            DimensionArg::Spatial => Dimension::Spatial,
        }
    }
}

/// Report format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}
