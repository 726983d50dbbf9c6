//! `QFilter` CLI - build and validate vector-search payload filters
//!
//! Usage:
//!   `qfilter build match:color=red range:price=lte:100`
//!   `qfilter build --pretty geo-radius:home=48.85,2.35,2500`
//!   `qfilter config`

// CLI tool - relax pedantic lints for ergonomics
#![allow(clippy::pedantic)]

mod condition_arg;
#[cfg(test)]
mod condition_arg_tests;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use condition_arg::ConditionArg;
use qfilter_core::{Filter, QFilterConfig};

#[derive(Parser)]
#[command(name = "qfilter")]
#[command(
    author,
    version,
    about = "QFilter CLI - typed payload filters for vector search"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE", env = "QFILTER_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a filter, validate it and print the wire document
    Build {
        /// Conditions as KIND:KEY=ARGS, combined with AND in the given order
        /// (kinds: match, text, any, except, range, geo-radius, geo-box)
        #[arg(value_name = "CONDITION")]
        conditions: Vec<ConditionArg>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Report every invalid condition instead of stopping at the first
        #[arg(long)]
        all_errors: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<QFilterConfig> {
    let config = match path {
        Some(p) => QFilterConfig::load_from_path(p)
            .with_context(|| format!("loading configuration from {}", p.display()))?,
        None => QFilterConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &QFilterConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build(
    config: &QFilterConfig,
    conditions: Vec<ConditionArg>,
    pretty: bool,
    all_errors: bool,
) -> anyhow::Result<String> {
    let filter = Filter::new().must(conditions.into_iter().map(|c| c.0));
    debug!(conditions = filter.len(), "filter built");

    if all_errors {
        let errors = filter.validate_all();
        if !errors.is_empty() {
            let report: Vec<String> = errors.iter().map(ToString::to_string).collect();
            bail!(
                "{} invalid condition(s):\n  {}",
                errors.len(),
                report.join("\n  ")
            );
        }
    }

    let validated = filter
        .into_validated_with(&config.limits)
        .context("filter is invalid")?;

    let json = if pretty || config.output.pretty {
        validated.to_json_pretty()?
    } else {
        validated.to_json()?
    };
    Ok(json)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Build {
            conditions,
            pretty,
            all_errors,
        } => {
            let json = build(&config, conditions, pretty, all_errors)?;
            info!(bytes = json.len(), "filter serialized");
            println!("{json}");
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
