use std::path::Path;

use anyhow::Result;
use geospatial::distance::DEFAULT_UNIT;
use geospatial::geometry::geo_enums::DistanceUnit;
use log::info;
use serde::{Deserialize, Serialize};

use crate::io;

/// Configuration of the command-line front end
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CliConfig {
    /// Unit of reported distances when none is given on the command line
    /// (integer code: 0 mi, 1 km, 2 nmi)
    #[serde(default = "default_unit")]
    pub default_unit: DistanceUnit,
    /// Round points through single precision before testing polygon containment,
    /// for parity with legacy consumers
    #[serde(default)]
    pub single_precision_projection: bool,
}

impl CliConfig {
    /// Reads the config from `config_file`, falls back to [`CliConfig::default`] if none is given.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            None => {
                info!("[MAIN] No config file provided, use --config-file to provide one");
                CliConfig::default()
            }
            Some(config_file) => io::read_json(config_file)?,
        };
        info!("[MAIN] Successfully parsed CliConfig: {config:?}");
        Ok(config)
    }
}

fn default_unit() -> DistanceUnit {
    DEFAULT_UNIT
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_unit: DEFAULT_UNIT,
            single_precision_projection: false,
        }
    }
}
