//! Historical air quality model
//!
//! Pollution levels for a year are derived from a single multiplier that
//! follows the industrial history curve.

use super::stations::{stations_for, StationSpec, STATIONS};
use super::Station;
use crate::constants::source;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Default year for historical queries
pub const DEFAULT_YEAR: i32 = 2024;

/// Pollution multiplier for a year
pub fn multiplier(year: i32) -> f64 {
    match year {
        y if y < 1850 => 0.3,
        y if y < 1900 => 0.5,
        y if y < 1950 => 0.7,
        y if y < 1980 => 0.9,
        y if y < 2000 => 0.8,
        y if y < 2020 => 0.75,
        _ => 0.8,
    }
}

/// Overall air quality label for a year
pub fn quality_label(year: i32) -> &'static str {
    match year {
        y if y < 1850 => "excellent",
        y if y < 1900 => "good",
        y if y < 1950 => "moderate",
        y if y < 1980 => "poor",
        y if y < 2000 => "very-poor",
        _ => "poor",
    }
}

/// Global pollutant levels for a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalParameters {
    /// ppm
    pub co2: f64,
    pub so2: f64,
    pub no2: f64,
    pub quality: String,
}

impl GlobalParameters {
    pub fn for_year(year: i32) -> Self {
        let m = multiplier(year);
        Self {
            co2: (280.0 + 140.0 * m).round(),
            so2: (10.0 + 60.0 * m).round(),
            no2: (5.0 + 45.0 * m).round(),
            quality: quality_label(year).to_string(),
        }
    }
}

/// Historical station snapshot
///
/// Field names are camelCase on the wire (`historicalMultiplier`,
/// `globalParameters`, `totalStations`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalAirResponse {
    pub data: Vec<Station>,
    pub year: i32,
    pub timestamp: i64,
    pub source: String,
    pub historical_multiplier: f64,
    pub global_parameters: GlobalParameters,
    pub description: String,
    pub total_stations: usize,
}

impl HistoricalAirResponse {
    /// Snapshot for `year` over the reference station table
    pub fn for_year(year: i32, now: DateTime<Utc>) -> Self {
        Self::from_table(STATIONS, year, now)
    }

    pub fn from_table(table: &[StationSpec], year: i32, now: DateTime<Utc>) -> Self {
        let m = multiplier(year);
        let data = stations_for(table, m);
        Self {
            total_stations: data.len(),
            data,
            year,
            timestamp: now.timestamp_millis(),
            source: source::HISTORICAL.to_string(),
            historical_multiplier: m,
            global_parameters: GlobalParameters::for_year(year),
            description: format!("Historical air quality data for {}", year),
        }
    }
}

/// Demo stations for the current year
pub fn current_stations(now: DateTime<Utc>) -> Vec<Station> {
    stations_for(STATIONS, multiplier(now.year()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_multiplier_boundaries() {
        assert_relative_eq!(multiplier(1800), 0.3);
        assert_relative_eq!(multiplier(1849), 0.3);
        assert_relative_eq!(multiplier(1850), 0.5);
        assert_relative_eq!(multiplier(1900), 0.7);
        assert_relative_eq!(multiplier(1950), 0.9);
        assert_relative_eq!(multiplier(1979), 0.9);
        assert_relative_eq!(multiplier(1980), 0.8);
        assert_relative_eq!(multiplier(2000), 0.75);
        assert_relative_eq!(multiplier(2019), 0.75);
        assert_relative_eq!(multiplier(2020), 0.8);
        assert_relative_eq!(multiplier(2100), 0.8);
    }

    #[test]
    fn test_quality_labels() {
        assert_eq!(quality_label(1700), "excellent");
        assert_eq!(quality_label(1850), "good");
        assert_eq!(quality_label(1920), "moderate");
        assert_eq!(quality_label(1970), "poor");
        assert_eq!(quality_label(1990), "very-poor");
        assert_eq!(quality_label(2024), "poor");
    }

    #[test]
    fn test_global_parameters() {
        let p = GlobalParameters::for_year(1970);
        // m = 0.9
        assert_eq!(p.co2, 406.0);
        assert_eq!(p.so2, 64.0);
        assert_eq!(p.no2, 46.0);
        assert_eq!(p.quality, "poor");

        let p = GlobalParameters::for_year(1800);
        assert_eq!(p.co2, 322.0);
        assert_eq!(p.so2, 28.0);
        assert_eq!(p.no2, 19.0);
    }

    #[test]
    fn test_response_shape() {
        let now = Utc::now();
        let response = HistoricalAirResponse::for_year(1990, now);

        assert_eq!(response.year, 1990);
        assert_eq!(response.total_stations, STATIONS.len());
        assert_eq!(response.data.len(), STATIONS.len());
        assert_eq!(response.source, "Historical Data");
        assert_relative_eq!(response.historical_multiplier, 0.8);
        assert_eq!(response.timestamp, now.timestamp_millis());

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["globalParameters"]["co2"].is_number());
        assert_eq!(value["totalStations"], 100);
        assert_eq!(value["historicalMultiplier"], 0.8);
        assert!(value.get("total_stations").is_none());
        assert!(value.get("global_parameters").is_none());
    }

    #[test]
    fn test_station_values_follow_year() {
        let early = HistoricalAirResponse::for_year(1800, Utc::now());
        let peak = HistoricalAirResponse::for_year(1970, Utc::now());
        for (a, b) in early.data.iter().zip(&peak.data) {
            assert!(a.pm25().unwrap() <= b.pm25().unwrap());
        }
    }
}
