//! Logging setup backed by the `log` facade and `fern`.

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::config::LoggingConfig;

/// Install the global logger according to the logging configuration.
///
/// A disabled config is a no-op, so library users can bring their own
/// logger implementation.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Logger already installed")?;
    Ok(())
}
