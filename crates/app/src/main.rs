//! `resit`: turn receipt photos and OCR text into pre-filled expense drafts.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ParseArgs, ScanArgs};
use config::AppConfig;

/// Receipt OCR intake: extract vendor, date, total, category and payment method
#[derive(Parser)]
#[command(name = "resit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true, env = "RESIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from OCR text already on hand
    Parse(ParseArgs),

    /// Run a receipt photo through OCR and extraction
    Scan(ScanArgs),

    /// Print the category and payment method options
    Labels,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse(args) => commands::parse(args).await,
        Commands::Scan(args) => {
            let config = AppConfig::load(cli.config.as_deref())?;
            commands::scan(args, &config).await
        }
        Commands::Labels => {
            let config = AppConfig::load(cli.config.as_deref())?;
            commands::labels(&config)
        }
    }
}
