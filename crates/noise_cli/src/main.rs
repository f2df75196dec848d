//! Noise CLI - deterministic noise from the command line
//!
//! # Commands
//!
//! - `noise hash --position <p>` - Raw bit-mix hashes for consecutive positions
//! - `noise sample <kind> -n <count>` - Tabulate a batch from one sampler
//! - `noise stats <kind> -n <count>` - Summary statistics of a batch
//!
//! Generator options come from `noise.toml` (or `--config`), then the
//! `NOISE_SEED`, `NOISE_LOG_LEVEL` and `NOISE_SAMPLES` environment
//! variables, then command line flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use noise_core::{HashAlgorithm, Seed};

mod commands;
mod config;
mod error;
mod output;

use commands::{SamplerKind, SamplerParams};
use config::{build_config, CliArgs, OutputFormat};
pub use error::{CliError, Result};

/// Deterministic coordinate-addressable noise
#[derive(Parser)]
#[command(name = "noise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<Level>,

    /// Seed: an integer, random, generate or declaration:<token>
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    seed: Option<Seed>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw hashes for consecutive positions
    Hash {
        /// First position
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        position: i32,

        /// Number of consecutive positions
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Hash algorithm (squirrel5, squirrel3)
        #[arg(short, long)]
        algorithm: Option<HashAlgorithm>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Draw a batch of samples
    Sample {
        /// Sampler kind
        #[arg(value_enum)]
        kind: SamplerKind,

        /// Number of samples
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        params: SamplerParams,
    },

    /// Summarise a batch of samples
    Stats {
        /// Sampler kind
        #[arg(value_enum)]
        kind: SamplerKind,

        /// Number of samples
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        params: SamplerParams,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (samples, format) = match &self.command {
            Commands::Hash { format, .. } => (None, *format),
            Commands::Sample {
                samples, format, ..
            }
            | Commands::Stats {
                samples, format, ..
            } => (*samples, *format),
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level,
            seed: self.seed.clone(),
            samples,
            format,
        }
    }
}

/// Logs go to stderr so that stdout carries only the rendered table.
fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level);
    debug!(
        seed = %config.noise.seed(),
        dimensions = config.noise.dimensions().count(),
        samples = config.samples,
        format = ?config.format,
        "Configuration loaded"
    );

    let table = match &cli.command {
        Commands::Hash {
            position,
            count,
            algorithm,
            ..
        } => commands::hash::table(
            config.noise.seed(),
            *position,
            *count,
            algorithm.unwrap_or(config.noise.algorithm()),
        )?,
        Commands::Sample { kind, params, .. } => {
            commands::sample::table(*kind, params, config.noise.clone(), config.samples)?
        }
        Commands::Stats { kind, params, .. } => {
            commands::stats::table(*kind, params, config.noise.clone(), config.samples)?
        }
    };

    let stdout = std::io::stdout();
    table.write(config.format, stdout.lock())?;
    Ok(())
}
