//! bsm - Command Line Valuation of European Options
//!
//! # Commands
//!
//! - `bsm option` - Value a vanilla or digital option
//! - `bsm strategy` - Value a straddle, strangle, spread, risk reversal or butterfly
//! - `bsm dist pdf|cdf|quantile` - Evaluate standard normal functions
//!
//! # Configuration
//!
//! Output format, log level and ladder shape come from defaults, then
//! `bsm.toml` (or `--config`), then `BSM_LOG_LEVEL` / `BSM_OUTPUT_FORMAT`,
//! then flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::dist::DistCommand;
use commands::option::OptionArgs;
use commands::strategy::StrategyArgs;
use config::{build_config, CliArgs, CliConfig};

/// Black-Scholes-Merton option valuation CLI
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Number of spots in a ladder profile
    #[arg(long, global = true)]
    ladder_steps: Option<usize>,

    /// Ladder half width as a fraction of spot
    #[arg(long, global = true)]
    ladder_width: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            output_format: cli.format.clone(),
            ladder_steps: cli.ladder_steps,
            ladder_width: cli.ladder_width,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Value a vanilla or digital option
    Option(OptionArgs),

    /// Value a multi-leg strategy
    Strategy(StrategyArgs),

    /// Evaluate a standard normal function
    Dist {
        #[command(subcommand)]
        function: DistCommand,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute(command: &Commands, config: &CliConfig) -> Result<String> {
    match command {
        Commands::Option(args) => {
            let report = commands::option::run(args, config)?;
            output::render_valuation(&report, config.output_format)
        }
        Commands::Strategy(args) => {
            let report = commands::strategy::run(args, config)?;
            output::render_valuation(&report, config.output_format)
        }
        Commands::Dist { function } => {
            let report = commands::dist::run(*function)?;
            output::render_distribution(&report, config.output_format)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    info!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        ladder_steps = config.ladder_steps,
        ladder_width = config.ladder_width,
        "Configuration loaded"
    );

    match execute(&cli.command, &config) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            Err(err)
        }
    }
}
