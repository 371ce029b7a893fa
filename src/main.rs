//! ember-map CLI entry point
//!
//! Wildfire and air quality map data - CLI + web API

use ember_map::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
