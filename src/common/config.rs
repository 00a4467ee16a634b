use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::exception::TableError;
use crate::common::logger::parse_level;

/** Number of buckets used when no capacity is supplied. */
pub const DEFAULT_TABLE_CAPACITY: usize = 10;

/** Log level used when neither the config file nor RUST_LOG sets one. */
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub type BucketIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub capacity: usize,
    pub log_level: String,
}

impl TableConfig {
    /// Reads a TOML config file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let contents = fs::read_to_string(path)?;
        let config: TableConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.capacity == 0 {
            return Err(TableError::InvalidCapacity(self.capacity));
        }
        parse_level(&self.log_level)?;
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TABLE_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
