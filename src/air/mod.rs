//! Air quality
//!
//! Station records, PM2.5 classification, the OpenAQ client and the
//! hand-authored station table used for demo and historical data.

pub mod feed;
pub mod historical;
pub mod stations;

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// The only measurement parameter kept from upstream
pub const PM25: &str = "pm25";

/// A single measurement at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub parameter: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Measurement {
    /// A PM2.5 reading in µg/m³
    pub fn pm25(value: f64) -> Self {
        Self {
            parameter: PM25.to_string(),
            value,
            unit: Some("µg/m³".to_string()),
        }
    }

    /// PM2.5 with a finite, non-negative value
    pub fn is_valid_pm25(&self) -> bool {
        self.parameter == PM25 && self.value.is_finite() && self.value >= 0.0
    }
}

/// A measurement station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl Station {
    /// First valid PM2.5 reading, if any
    pub fn pm25(&self) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.is_valid_pm25())
            .map(|m| m.value)
    }

    /// Keep only valid PM2.5 readings
    ///
    /// Returns `None` when the station has invalid coordinates or no reading
    /// is left.
    pub fn retain_pm25(mut self) -> Option<Self> {
        if !self.coordinates.is_valid() {
            return None;
        }
        self.measurements.retain(Measurement::is_valid_pm25);
        if self.measurements.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Response envelope for station data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirResponse {
    pub data: Vec<Station>,
    pub total: usize,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<bool>,
}

impl AirResponse {
    pub fn is_demo(&self) -> bool {
        self.demo.unwrap_or(false)
    }
}

/// PM2.5 air quality band (US EPA breakpoints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    /// Classify a PM2.5 concentration in µg/m³
    pub fn from_pm25(pm25: f64) -> Self {
        if pm25 <= 12.0 {
            Self::Good
        } else if pm25 <= 35.0 {
            Self::Moderate
        } else if pm25 <= 55.0 {
            Self::Unhealthy
        } else if pm25 <= 150.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    /// Marker fill colour
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#00e400",
            Self::Moderate => "#ffff00",
            Self::Unhealthy => "#ff7e00",
            Self::VeryUnhealthy => "#ff0000",
            Self::Hazardous => "#8f3f97",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Marker radius for a PM2.5 value, clamped to [6, 20]
pub fn marker_radius(pm25: f64) -> f64 {
    (pm25 / 3.0).clamp(6.0, 20.0)
}
