use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use trussgraph::{
    DuplicateLabels, ElementProperties, PropertyError, ReferenceCheck, TrussOptions,
};

use crate::cli::Cli;

/// Error returned when the run configuration cannot be assembled.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the config file cannot be read.
    #[error("failed to read config {path:?}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the config file is not valid JSON for [`FileConfig`].
    #[error("invalid config {path:?}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// Returned when a property is given neither on the command line nor in the config.
    #[error("missing {0}; pass --{1} or set properties.{0} in the config file")]
    MissingProperty(&'static str, &'static str),
    /// Returned when the properties are not physically meaningful.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Properties as written in a config file; any may be left to the command line.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PropertiesConfig {
    pub young_modulus: Option<f64>,
    pub poisson_ratio: Option<f64>,
    pub area: Option<f64>,
}

/// Layout of the JSON config file.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub properties: PropertiesConfig,
    pub options: TrussOptions,
}

impl FileConfig {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Merge the config file, if any, with command-line overrides.
pub fn resolve(cli: &Cli) -> Result<(ElementProperties, TrussOptions), ConfigError> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    merge(cli, file)
}

/// Command-line values win over file values.
fn merge(cli: &Cli, file: FileConfig) -> Result<(ElementProperties, TrussOptions), ConfigError> {
    let young_modulus = cli
        .young_modulus
        .or(file.properties.young_modulus)
        .ok_or(ConfigError::MissingProperty("young_modulus", "young-modulus"))?;
    // Poisson's ratio plays no part in bar stiffness.
    let poisson_ratio = cli
        .poisson_ratio
        .or(file.properties.poisson_ratio)
        .unwrap_or(0.0);
    let area = cli
        .area
        .or(file.properties.area)
        .ok_or(ConfigError::MissingProperty("area", "area"))?;
    let properties = ElementProperties::new(young_modulus, poisson_ratio, area)?;

    let mut options = file.options;
    if let Some(dimension) = cli.dimension {
        options.dimension = dimension.into();
    }
    if cli.reject_duplicate_labels {
        options.duplicate_labels = DuplicateLabels::Reject;
    }
    if cli.eager_references {
        options.references = ReferenceCheck::Eager;
    }
    Ok((properties, options))
}
