use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::{LevelFilter, debug};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse {}", path.display()))?;
    debug!("read {}", path.display());
    Ok(value)
}

pub fn write_json<T: Serialize>(value: &T, mut writer: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)
        .context("could not serialize output")?;
    writeln!(writer)?;
    Ok(())
}

/// Installs the global logger. Records go to stderr, stdout is reserved for results.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let level = record.level();
            let time = Timestamp::now().strftime("%H:%M:%S");
            let prefix = format!("[{level}] [{time}]");
            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    Ok(())
}
