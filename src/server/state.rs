//! Server shared state
//!
//! Holds configuration and the upstream clients for the HTTP server.

use crate::air::feed::OpenAqClient;
use crate::config::{Config, FiresConfig};
use crate::error::Result;
use crate::fires::feed::FirmsClient;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    pub firms: FirmsClient,

    pub openaq: OpenAqClient,

    started: Instant,
}

impl AppState {
    /// Create new application state
    ///
    /// Upstream clients are built once from the config's `[upstream]` section.
    pub fn new(config: Config) -> Result<Self> {
        let firms = FirmsClient::from_config(&config.upstream)?;
        let openaq = OpenAqClient::from_config(&config.upstream)?;
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            firms,
            openaq,
            started: Instant::now(),
        })
    }

    /// Snapshot of the fire settings
    pub async fn fires_config(&self) -> FiresConfig {
        self.config.read().await.fires.clone()
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}
