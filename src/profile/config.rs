//! Configuration for table profiling

use serde::{Deserialize, Serialize};

/// Configuration for table profiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    /// Search for multi-column candidate keys
    pub multi_column_keys: bool,

    /// Largest column combination to test (0 = no limit)
    pub max_key_size: usize,

    /// Evaluate column combinations on the rayon thread pool
    /// (only honoured when built with the `parallel` feature)
    pub parallel: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            multi_column_keys: true,
            max_key_size: 0, // All combinations
            parallel: false,
        }
    }
}

impl ProfileConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ProfileConfigBuilder {
        ProfileConfigBuilder::default()
    }
}

/// Builder for ProfileConfig
#[derive(Debug, Default)]
pub struct ProfileConfigBuilder {
    config: ProfileConfig,
}

impl ProfileConfigBuilder {
    /// Enable or disable the multi-column key search
    pub fn multi_column_keys(mut self, enabled: bool) -> Self {
        self.config.multi_column_keys = enabled;
        self
    }

    /// Set the largest column combination to test (0 = no limit)
    pub fn max_key_size(mut self, size: usize) -> Self {
        self.config.max_key_size = size;
        self
    }

    /// Enable or disable parallel evaluation
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ProfileConfig {
        self.config
    }
}
