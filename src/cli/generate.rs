//! Generate command handler
//!
//! Generates synthetic land-only fires without touching the network.

use crate::cli::{emit, formatter_for};
use crate::config::Config;
use crate::constants::fires::MAX_GENERATE_COUNT;
use crate::error::{Error, Result};
use crate::fires::feed::demo_fires;
use crate::format::available_formats;
use crate::random::get_source;
use chrono::Utc;
use clap::Args;
use tracing::debug;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of fires (defaults to fires.demo_count)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;
    let mut fires = config.fires.clone();

    if let Some(count) = args.count {
        if count > MAX_GENERATE_COUNT {
            return Err(Error::InvalidCount(format!(
                "{} exceeds the maximum of {}",
                count, MAX_GENERATE_COUNT
            )));
        }
        fires.demo_count = count;
    }

    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = formatter_for(&format)?;

    let rng = get_source(args.seed);
    debug!("Generating {} fires with {} source", fires.demo_count, rng.name());

    let response = demo_fires(&fires, rng.as_ref(), Utc::now());
    if response.fires.len() < fires.demo_count {
        eprintln!(
            "Generated {} of {} requested fires",
            response.fires.len(),
            fires.demo_count
        );
    }

    emit(&formatter.format_fires(&response)?, args.output.as_deref())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:8} - {}", format.name, format.description);
    }
}
