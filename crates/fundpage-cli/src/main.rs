//! Fundraising Page CLI
//!
//! Thin wrapper around fundpage-core for checking a page config before it
//! is embedded in the page.
//!
//! ## Usage
//!
//! ```bash
//! # Preview the progress display for a goal/raised pair
//! fundpage-cli progress --goal 20000 --raised 5000
//!
//! # Preview using a config file, overriding the raised amount
//! fundpage-cli progress --config fundraiser.json --raised 7500
//!
//! # Validate a config file
//! fundpage-cli check fundraiser.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fundpage_core::schedule::ManualScheduler;
use fundpage_core::{CurrencyFormatter, DonationProgress, FundraiserConfig};

/// Fundraising page tools
#[derive(Parser)]
#[command(name = "fundpage-cli")]
#[command(version = "0.1.0")]
#[command(about = "Fundraising page tools - config checks and progress preview")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what the progress display would render
    Progress {
        /// Config file (JSON); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the fundraising goal
        #[arg(short, long)]
        goal: Option<f64>,

        /// Override the raised amount
        #[arg(short, long)]
        raised: Option<f64>,
    },

    /// Validate a config file
    Check {
        /// Config file (JSON)
        path: PathBuf,

        /// Print the config with defaults filled in
        #[arg(long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Progress {
            config,
            goal,
            raised,
        } => cmd_progress(config.as_deref(), goal, raised),
        Commands::Check { path, print } => cmd_check(&path, print),
    }
}

fn load_config(path: &Path) -> Result<FundraiserConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = FundraiserConfig::from_json(&json)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn cmd_progress(path: Option<&Path>, goal: Option<f64>, raised: Option<f64>) -> Result<()> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => FundraiserConfig::default(),
    };
    if let Some(goal) = goal {
        config.goal = goal;
    }
    config.validate().context("Invalid goal")?;

    let mut progress = DonationProgress::new(
        config.goal,
        config.raised,
        config.fill_delay_ms,
        CurrencyFormatter::new(&config.currency_symbol),
    );
    let scheduler = ManualScheduler::new();
    if let Some(raised) = raised {
        // No regions to render into here; only the stored amount matters
        match progress.update_raised(raised, None, &scheduler) {
            Ok(_) | Err(fundpage_core::PageError::MissingRegion(_)) => {}
            Err(e) => return Err(e).context("Invalid raised amount"),
        }
    }

    let snapshot = progress
        .progress()
        .snapshot(&CurrencyFormatter::new(&config.currency_symbol));

    println!("{}", snapshot.raised_text);
    println!("  Percentage: {}", snapshot.percentage_text);
    println!(
        "  Fill width: {} (after {}ms)",
        snapshot.fill_width, config.fill_delay_ms
    );
    if progress.progress().is_funded() {
        println!("  Goal reached!");
    }
    Ok(())
}

fn cmd_check(path: &Path, print: bool) -> Result<()> {
    let config = load_config(path)?;

    println!("Config OK: {}", path.display());
    println!("  Goal: {}", CurrencyFormatter::new(&config.currency_symbol).format(config.goal));
    println!("  Raised: {}", CurrencyFormatter::new(&config.currency_symbol).format(config.raised));
    match &config.wallet_address {
        Some(address) => println!("  Wallet: {}", address),
        None => println!("  Wallet: (taken from page markup)"),
    }
    println!("  Log level: {}", config.level());

    if print {
        println!("{}", config.to_json_pretty()?);
    }
    Ok(())
}
