//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command line arguments.
//!
//! ```toml
//! log_level = "info"
//! samples = 20
//! format = "table"
//!
//! [noise]
//! seed = "declaration:terrain"
//! dimensions = 1
//! octave = 0
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

use noise_core::{NoiseOptions, Seed};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "noise.toml";

/// Upper bound on `samples`.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "NOISE_SEED";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "NOISE_LOG_LEVEL";
/// Environment variable overriding the sample count.
pub const ENV_SAMPLES: &str = "NOISE_SAMPLES";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Sample count {0} outside [1, 10000000]")]
    InvalidSamples(usize),

    #[error("Cannot load configuration: {0}")]
    FileError(String),

    #[error("Bad environment override: {0}")]
    EnvError(String),
}

/// Parse a log level name, case-insensitively
pub fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    Level::from_str(s.trim()).map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
}

/// Output formats for sample batches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: Level,
    /// Number of samples drawn by `sample` and `stats`
    pub samples: usize,
    /// Output format for `sample` and `hash`
    pub format: OutputFormat,
    /// Generator options shared by every command
    pub noise: NoiseOptions,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_log_level(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            samples: 10,
            format: OutputFormat::Table,
            noise: NoiseOptions::default(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = Seed::from_str(&seed)
                .map_err(|e| ConfigError::EnvError(format!("{}: {}", ENV_SEED, e)))?;
            self.set_seed(seed);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = parse_log_level(&level)?;
        }

        if let Some(samples) = lookup(ENV_SAMPLES) {
            self.samples = samples.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}: not a sample count: {}", ENV_SAMPLES, samples))
            })?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(seed) = &cli.seed {
            self.set_seed(seed.clone());
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 || self.samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSamples(self.samples));
        }
        Ok(())
    }

    fn set_seed(&mut self, seed: Seed) {
        let options = std::mem::take(&mut self.noise);
        self.noise = options.with_seed(seed);
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<Level>,
    /// Seed override
    pub seed: Option<Seed>,
    /// Sample count override
    pub samples: Option<usize>,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, or `noise.toml` when present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
