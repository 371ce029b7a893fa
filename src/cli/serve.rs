//! `ember-map serve`
//!
//! Runs the fire and air-quality JSON API until interrupted. `--host` and
//! `--port` replace the `[server]` values for this run only and are never
//! written back to the config file.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides server.port)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Apply the command-line overrides to a loaded config
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.apply(&mut config);

    info!(
        "ember-map v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );
    info!(
        firms = %config.upstream.firms_url,
        openaq = %config.upstream.openaq_url,
        "Upstream feeds (demo data is served when they fail)"
    );

    server::run(config).await
}
