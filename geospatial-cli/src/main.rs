use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use geospatial::io::ext_repr::ExtShape;
use geospatial::io::import::{import_shape, import_shapes};
use geospatial_cli::commands;
use geospatial_cli::config::CliConfig;
use geospatial_cli::io;
use geospatial_cli::io::cli::{Cli, Command};
use log::info;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = CliConfig::load(args.config_file.as_deref())?;

    let stdout = std::io::stdout().lock();
    match args.command {
        Command::Distance { from, to, unit } => {
            let unit = unit.unwrap_or(config.default_unit);
            io::write_json(&commands::distance(from, to, unit), stdout)
        }
        Command::Contains { point, input_file } => {
            let ext_shape = io::read_json::<ExtShape>(&input_file)?;
            let shape = import_shape(&ext_shape)
                .with_context(|| format!("invalid shape in {}", input_file.display()))?;
            io::write_json(&commands::contains(point, &shape, &config), stdout)
        }
        Command::Inspect { input_file, unit } => {
            let ext_shapes = io::read_json::<Vec<ExtShape>>(&input_file)?;
            let shapes = import_shapes(&ext_shapes)
                .with_context(|| format!("invalid shapes in {}", input_file.display()))?;
            info!("[MAIN] Imported {} shapes", shapes.len());
            let unit = unit.unwrap_or(config.default_unit);
            io::write_json(&commands::inspect(&shapes, unit), stdout)
        }
    }
}
