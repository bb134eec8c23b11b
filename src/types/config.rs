//! Configuration for binstore.

use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum number of values retained per category.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    10
}

impl StoreConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> StoreResult<Self> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders configuration as TOML text.
    pub fn to_toml(&self) -> StoreResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that the configuration can back a store.
    pub fn validate(&self) -> StoreResult<()> {
        if self.capacity == 0 {
            return Err(StoreError::invalid_config(
                "capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}
