use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

use crate::common::exception::TableError;

static INIT: Once = Once::new();

pub fn initialize_logger() {
    initialize_logger_with_level(LevelFilter::Info);
}

/// Same as [`initialize_logger`] but with an explicit default level for the crate.
/// `RUST_LOG` still wins when it is set.
pub fn initialize_logger_with_level(level: LevelFilter) {
    // Use call_once_force to recover if an earlier initialization attempt panicked.
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("contact_table", level)
            .filter_module("rustyline", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Avoid panicking if the logger was already initialized elsewhere.
        let _ = builder.try_init();
    });
}

/// Maps a config string such as `"debug"` to a level. Case-insensitive.
pub fn parse_level(level: &str) -> Result<LevelFilter, TableError> {
    level
        .parse()
        .map_err(|_| TableError::InvalidLogLevel(level.to_string()))
}
