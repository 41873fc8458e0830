use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geospatial::geometry::geo_enums::DistanceUnit;
use geospatial::geometry::primitives::Point;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Great-circle distance between two points
    Distance {
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        to: Point,
        #[arg(short, long, value_name = "[mi, km, nmi]")]
        unit: Option<DistanceUnit>,
    },
    /// Whether a point lies inside the shape (polygon or circle) stored in a JSON file
    Contains {
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        point: Point,
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Kind code and size of every shape in a JSON array
    Inspect {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_name = "[mi, km, nmi]")]
        unit: Option<DistanceUnit>,
    },
}
