// src/config/factorize_config.rs

use crate::algorithms::FactorStrategy;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default sieve reach; covers every factor of inputs up to 10^16 without
/// falling back to the beyond-table search.
pub const DEFAULT_SIEVE_BOUND: u64 = 100_000_000;

/// Main factorizer configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorizeConfig {
    /// Upper bound (inclusive) of the precomputed prime table
    pub sieve_bound: u64,

    /// Factorization strategy (batched, scalar, odd)
    pub strategy: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for FactorizeConfig {
    fn default() -> Self {
        FactorizeConfig {
            sieve_bound: DEFAULT_SIEVE_BOUND,
            strategy: "batched".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FactorizeConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("sieve_bound", DEFAULT_SIEVE_BOUND)?
            .set_default("strategy", "batched")?
            .set_default("log_level", "info")?;

        // Try to load from the config file when present
        if Path::new("factorize.toml").exists() {
            builder = builder.add_source(File::with_name("factorize.toml"));
        }

        // Override with environment variables (prefix: FACTORIZE_)
        builder = builder.add_source(Environment::with_prefix("FACTORIZE").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("sieve_bound", DEFAULT_SIEVE_BOUND)?
            .set_default("strategy", "batched")?
            .set_default("log_level", "info")?;

        // Load from specified file
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: FACTORIZE_)
        builder = builder.add_source(Environment::with_prefix("FACTORIZE").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Parses the configured strategy name; unknown names fail at startup.
    pub fn strategy(&self) -> Result<FactorStrategy, String> {
        self.strategy.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FactorizeConfig::default();
        assert_eq!(config.sieve_bound, 100_000_000);
        assert_eq!(config.strategy, "batched");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_default_strategy_parses() {
        let config = FactorizeConfig::default();
        assert_eq!(config.strategy().unwrap(), FactorStrategy::BatchedTrial);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let config = FactorizeConfig {
            strategy: "pollard".to_string(),
            ..FactorizeConfig::default()
        };
        assert!(config.strategy().is_err());
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = FactorizeConfig::load().unwrap_or_else(|_| FactorizeConfig::default());
        assert_eq!(config.strategy, "batched");
    }
}
