//! Logging setup for the `log` facade.

use std::str::FromStr;

use anyhow::Result;

use crate::config::LoggingConfig;

/// Install a fern dispatcher according to the logging configuration.
///
/// A disabled configuration installs nothing; `log` macro calls then go
/// nowhere, which is the library default.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = log::LevelFilter::from_str(&config.level)
        .map_err(|_| anyhow::anyhow!("Invalid logging.level '{}'", config.level))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
