//! Land-constrained fire generation
//!
//! Allocates a point count across the region table, then rejection-samples
//! each region's boxes against the ocean mask until its quota is met or its
//! attempt budget runs out.

use crate::config::FiresConfig;
use crate::constants::fires::{
    ATTEMPT_FACTOR, BRIGHTNESS_MAX, BRIGHTNESS_MIN, MAX_GENERATE_COUNT,
};
use crate::fires::allocate::allocate;
use crate::fires::FirePoint;
use crate::geo::{round_to, OceanMask, Region, LAND_REGIONS};
use crate::random::RandomSource;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Decimal places kept on generated coordinates
const COORD_DECIMALS: i32 = 4;

/// Synthetic fire generator over a region table and ocean mask
#[derive(Debug, Clone, Copy)]
pub struct FireGenerator<'a> {
    regions: &'a [Region],
    mask: OceanMask<'a>,
    brightness_min: f64,
    brightness_max: f64,
    attempt_factor: usize,
}

impl FireGenerator<'static> {
    /// Generator over the built-in world tables
    pub fn world() -> Self {
        Self::new(LAND_REGIONS, OceanMask::world())
    }

    /// World generator with brightness and budget taken from config
    pub fn from_config(config: &FiresConfig) -> Self {
        Self::world()
            .with_brightness(config.brightness_min, config.brightness_max)
            .with_attempt_factor(config.attempt_factor)
    }
}

impl<'a> FireGenerator<'a> {
    /// Create a generator over custom tables
    pub fn new(regions: &'a [Region], mask: OceanMask<'a>) -> Self {
        Self {
            regions,
            mask,
            brightness_min: BRIGHTNESS_MIN,
            brightness_max: BRIGHTNESS_MAX,
            attempt_factor: ATTEMPT_FACTOR,
        }
    }

    /// Set the brightness range `[min, max)`
    pub fn with_brightness(mut self, min: f64, max: f64) -> Self {
        self.brightness_min = min;
        self.brightness_max = max.max(min);
        self
    }

    /// Set attempts allowed per requested point
    pub fn with_attempt_factor(mut self, factor: usize) -> Self {
        self.attempt_factor = factor.max(1);
        self
    }

    pub fn regions(&self) -> &'a [Region] {
        self.regions
    }

    pub fn mask(&self) -> OceanMask<'a> {
        self.mask
    }

    /// Per-region quotas for `count` points, in table order
    pub fn quotas(&self, count: usize) -> Vec<usize> {
        let weights: Vec<u32> = self.regions.iter().map(|r| r.weight).collect();
        allocate(count, &weights)
    }

    /// Generate up to `count` points stamped with the current time
    pub fn generate(&self, count: usize, rng: &dyn RandomSource) -> Vec<FirePoint> {
        self.generate_at(count, rng, Utc::now())
    }

    /// Generate up to `count` points stamped with `now`
    pub fn generate_at(
        &self,
        count: usize,
        rng: &dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Vec<FirePoint> {
        let quotas = self.quotas(count);
        let mut fires = Vec::new();

        for (region, &quota) in self.regions.iter().zip(&quotas) {
            fires.extend(self.sample_region(region, quota, rng, now));
        }

        fires
    }

    /// Rejection-sample `count` points inside one region
    ///
    /// Returns fewer than `count` points when the budget of
    /// `count * attempt_factor` attempts is exhausted.
    pub fn sample_region(
        &self,
        region: &Region,
        count: usize,
        rng: &dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Vec<FirePoint> {
        let mut fires = Vec::with_capacity(count.min(MAX_GENERATE_COUNT));
        if count == 0 || region.areas.is_empty() {
            return fires;
        }

        let max_attempts = count.saturating_mul(self.attempt_factor);
        let mut attempts = 0;

        while fires.len() < count && attempts < max_attempts {
            attempts += 1;

            let area = &region.areas[rng.index(region.areas.len())];
            let lat = round_to(rng.range(area.lat_min, area.lat_max), COORD_DECIMALS);
            let lng = round_to(rng.range(area.lng_min, area.lng_max), COORD_DECIMALS);

            // Test the stored coordinates, not the unrounded draw
            if !self.mask.accepts(lat, lng, rng) {
                continue;
            }

            fires.push(FirePoint {
                latitude: lat,
                longitude: lng,
                brightness: self.brightness(rng),
                date: now,
                region: region.name.to_string(),
                country: Some(region.country(lat, lng, rng).to_string()),
            });
        }

        debug!(
            "Generated {} fires in {} ({} attempts)",
            fires.len(),
            region.name,
            attempts
        );

        fires
    }

    /// Brightness in `[min, max)`, truncated to one decimal
    fn brightness(&self, rng: &dyn RandomSource) -> f64 {
        let raw = rng.range(self.brightness_min, self.brightness_max);
        ((raw * 10.0).floor() / 10.0).max(self.brightness_min)
    }
}

impl Default for FireGenerator<'static> {
    fn default() -> Self {
        Self::world()
    }
}
