//! Country labels for generated points
//!
//! Coarse threshold rules per continent. These are display labels for demo
//! data, not a geocoder.

use crate::geo::regions::{self, Region};
use crate::random::RandomSource;

/// Label used when a region is not in the table
pub const UNKNOWN: &str = "Unknown";

pub const SOUTH_AMERICA: &[&str] = &[
    "Brazil",
    "Argentina",
    "Chile",
    "Peru",
    "Colombia",
    "Venezuela",
];

pub const OCEANIA: &[&str] = &["Australia", "New Zealand"];

pub fn north_america(lat: f64, lng: f64) -> &'static str {
    if lat > 40.0 && lng < -100.0 {
        "USA"
    } else if lat > 40.0 {
        "Canada"
    } else if lat < 35.0 && lng > -110.0 {
        "Mexico"
    } else {
        "USA"
    }
}

pub fn europe(lat: f64, lng: f64) -> &'static str {
    if lat > 45.0 && lng < 10.0 {
        "France"
    } else if lat > 45.0 {
        "Germany"
    } else if lat < 45.0 && lng < 20.0 {
        "Spain"
    } else if lat < 45.0 {
        "Italy"
    } else {
        "Europe"
    }
}

pub fn asia(lat: f64, lng: f64) -> &'static str {
    if lat > 35.0 && lng < 100.0 {
        "China"
    } else if lat > 35.0 {
        "Russia"
    } else if lat < 35.0 && lng < 100.0 {
        "India"
    } else {
        "Asia"
    }
}

pub fn africa(lat: f64, lng: f64) -> &'static str {
    if lat > 0.0 && lng < 20.0 {
        "Nigeria"
    } else if lat > 0.0 {
        "Ethiopia"
    } else if lat < 0.0 {
        "South Africa"
    } else {
        "Africa"
    }
}

/// Label a point by region name, falling back to `UNKNOWN`
pub fn label(
    table: &[Region],
    region: &str,
    lat: f64,
    lng: f64,
    rng: &dyn RandomSource,
) -> &'static str {
    regions::find(table, region)
        .map(|r| r.country(lat, lng, rng))
        .unwrap_or(UNKNOWN)
}
