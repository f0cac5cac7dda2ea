// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;

use crate::core::Config;

/// Install the global logger.
///
/// Records go to stderr unless a log file is configured, in which case the
/// file is opened for appending (parent directories are created).
pub fn init(config: &Config, level_override: Option<LevelFilter>) -> io::Result<()> {
    let level = level_override.unwrap_or(config.log_level);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    // a logger may already be installed when running under a test harness
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }

    log::debug!("Logging initialized at level {}", level);
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}
