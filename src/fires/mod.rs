//! Fire records
//!
//! This module handles:
//! - The fire record and response envelope
//! - Weighted quota allocation across regions
//! - Land-constrained synthetic fire generation
//! - Fetching and parsing the satellite fire feed

pub mod allocate;
pub mod feed;
pub mod sampler;

use crate::constants::source;
use crate::random::RandomSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use sampler::FireGenerator;

/// A single fire detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub brightness: f64,
    pub date: DateTime<Utc>,
    pub region: String,

    /// Always set on generated points; live records may not know it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Response envelope for fire data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireResponse {
    pub fires: Vec<FirePoint>,

    /// Number of records before truncation
    pub total: usize,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,

    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<bool>,
}

impl FireResponse {
    /// Envelope for records from the live feed, truncated to `limit`
    pub fn live(mut fires: Vec<FirePoint>, limit: usize, now: DateTime<Utc>) -> Self {
        let total = fires.len();
        fires.truncate(limit);
        Self {
            fires,
            total,
            timestamp: now.timestamp_millis(),
            source: source::FIRMS.to_string(),
            demo: None,
        }
    }

    /// Envelope for generated records
    pub fn demo(fires: Vec<FirePoint>, now: DateTime<Utc>) -> Self {
        Self {
            total: fires.len(),
            fires,
            timestamp: now.timestamp_millis(),
            source: source::FIRE_DEMO.to_string(),
            demo: Some(true),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.demo.unwrap_or(false)
    }
}

/// Generate `count` fires over the world region table
///
/// May return fewer points than requested when a region exhausts its
/// attempt budget.
pub fn generate(count: usize, rng: &dyn RandomSource) -> Vec<FirePoint> {
    FireGenerator::world().generate(count, rng)
}
