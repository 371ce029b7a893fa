//! Fires command handler

use crate::cli::{emit, formatter_for};
use crate::config::Config;
use crate::error::Result;
use crate::fires::feed::{load_fires, FirmsClient};
use crate::random::get_source;
use clap::Args;

#[derive(Args)]
pub struct FiresArgs {
    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Fetch live fires, falling back to demo data
pub async fn run(args: FiresArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = formatter_for(&format)?;

    let client = FirmsClient::from_config(&config.upstream)?;
    let rng = get_source(None);
    let response = load_fires(&client, &config.fires, rng.as_ref()).await;

    if response.is_demo() {
        eprintln!("Fire feed unavailable, showing demo data");
    }

    emit(&formatter.format_fires(&response)?, args.output.as_deref())
}
