//! Platform logging initialization for story_app.
//!
//! The terminal belongs to the UI, so logs go to a file only.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Initialize the global logger writing to `log_path`.
///
/// A log file that cannot be created leaves logging disabled.
pub fn initialize(log_path: &Path) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let loggers: Vec<Box<dyn SharedLogger>> =
        match create_file_logger(log_path, level, build_config()) {
            Some(file_logger) => vec![file_logger],
            None => return,
        };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
