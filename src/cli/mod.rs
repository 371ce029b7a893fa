//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod air;
pub mod config;
pub mod fires;
pub mod generate;
pub mod serve;

use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, OutputFormatter};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Wildfire and air quality map data service
#[derive(Parser)]
#[command(name = "ember-map")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate synthetic land-only fires
    Generate(generate::GenerateArgs),

    /// Fetch current fires (demo data if the feed is down)
    Fires(fires::FiresArgs),

    /// Fetch air quality stations, or a historical snapshot with --year
    Air(air::AirArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Fires(args) => fires::run(args).await,
        Commands::Air(args) => air::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Log to stderr so command output on stdout stays clean
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Look up a formatter, listing the valid names on failure
pub(crate) fn formatter_for(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            name,
            names.join(", ")
        ))
    })
}

/// Print to stdout, or write to a file when a path is given
pub(crate) fn emit(output: &str, path: Option<&str>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }
    Ok(())
}
