//! Air command handler
//!
//! Shows live station data, or the modelled snapshot for a year.

use crate::air::feed::{load_air_quality, OpenAqClient};
use crate::air::historical::HistoricalAirResponse;
use crate::cli::{emit, formatter_for};
use crate::config::Config;
use crate::error::Result;
use chrono::Utc;
use clap::Args;

#[derive(Args)]
pub struct AirArgs {
    /// Historical year instead of live data
    #[arg(long, short = 'y')]
    pub year: Option<i32>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

pub async fn run(args: AirArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = formatter_for(&format)?;

    let output = match args.year {
        Some(year) => {
            formatter.format_historical(&HistoricalAirResponse::for_year(year, Utc::now()))?
        }
        None => {
            let client = OpenAqClient::from_config(&config.upstream)?;
            let response = load_air_quality(&client).await;
            if response.is_demo() {
                eprintln!("Air quality feed unavailable, showing demo data");
            }
            formatter.format_air(&response)?
        }
    };

    emit(&output, args.output.as_deref())
}
