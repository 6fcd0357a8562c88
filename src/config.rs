//! Configuration for ShardKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, ShardKvError};

/// Main configuration for a ShardKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all bucket files.
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── bucket_0.dat
    ///     ├── bucket_1.dat
    ///     └── ... (one file per shard)
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Sharding Configuration
    // -------------------------------------------------------------------------
    /// Number of bucket files. Must be a nonzero power of two because shard
    /// selection masks the key hash with `shard_count - 1`.
    pub shard_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./shardkv_data"),
            shard_count: 8,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the power-of-two constraint on `shard_count`
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 || !self.shard_count.is_power_of_two() {
            return Err(ShardKvError::Config(format!(
                "shard_count must be a nonzero power of two, got {}",
                self.shard_count
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all bucket files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the number of shards (must be a nonzero power of two)
    pub fn shard_count(mut self, count: usize) -> Self {
        self.config.shard_count = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.shard_count, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::builder()
            .data_dir("/tmp/kv")
            .shard_count(16)
            .build();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/kv"));
        assert_eq!(config.shard_count, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_power_of_two_shard_count_is_rejected() {
        for count in [0, 3, 6, 12, 100] {
            let config = Config::builder().shard_count(count).build();
            assert!(config.validate().is_err(), "count {} should fail", count);
        }
    }
}
