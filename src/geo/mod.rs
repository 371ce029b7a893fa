//! Geographic tables
//!
//! This module handles:
//! - Bounding boxes and coordinates
//! - The land region table used by the fire generator
//! - The ocean mask that rejects points on water
//! - Country labels per region

pub mod country;
pub mod ocean;
pub mod regions;

use serde::{Deserialize, Serialize};

pub use ocean::OceanMask;
pub use regions::{CountryRule, Region, LAND_REGIONS};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Axis-aligned lat/lng rectangle in degrees
///
/// Bounds are inclusive and never wrap the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    /// Create a bounding box
    pub const fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// Check if a point lies inside the box (edges included)
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lng >= self.lng_min && lng <= self.lng_max
    }
}

/// Find the first region with an area containing the point
pub fn region_of<'a>(regions: &'a [Region], lat: f64, lng: f64) -> Option<&'a Region> {
    regions
        .iter()
        .find(|r| r.areas.iter().any(|a| a.contains(lat, lng)))
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
