use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid table capacity {0}: capacity must be greater than zero")]
    InvalidCapacity(usize),
    #[error("Invalid log level '{0}': expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),
    #[error("Failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for commands")]
    UnknownCommand(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}
