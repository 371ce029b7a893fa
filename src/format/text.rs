//! Human-readable text output formatter

use crate::air::historical::HistoricalAirResponse;
use crate::air::{AirResponse, AqiLevel, Station};
use crate::error::Result;
use crate::fires::FireResponse;
use crate::format::OutputFormatter;
use std::collections::BTreeMap;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

fn push_stations(output: &mut String, stations: &[Station]) {
    for station in stations {
        let Some(pm25) = station.pm25() else {
            continue;
        };
        let place = match (&station.city, &station.country) {
            (Some(city), Some(country)) => format!("{}, {}", city, country),
            (Some(city), None) => city.clone(),
            _ => station.location.clone(),
        };
        output.push_str(&format!(
            "  {:<28} ({:>8.4}, {:>9.4})  PM2.5 {:>5.1}  {}\n",
            place,
            station.coordinates.latitude,
            station.coordinates.longitude,
            pm25,
            AqiLevel::from_pm25(pm25)
        ));
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable summary"
    }

    fn format_fires(&self, response: &FireResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Fires: {} ({})\n", response.fires.len(), response.source));
        if response.total > response.fires.len() {
            output.push_str(&format!("Truncated from {} records\n", response.total));
        }

        let mut by_region: BTreeMap<&str, usize> = BTreeMap::new();
        for fire in &response.fires {
            *by_region.entry(fire.region.as_str()).or_default() += 1;
        }
        if !by_region.is_empty() {
            output.push_str("\nBy region:\n");
            for (region, count) in &by_region {
                output.push_str(&format!("  {:<16} {}\n", region, count));
            }
        }

        if !response.fires.is_empty() {
            output.push_str("\nDetections:\n");
        }
        for fire in &response.fires {
            output.push_str(&format!(
                "  ({:>8.4}, {:>9.4})  {:>5.1} K  {}",
                fire.latitude, fire.longitude, fire.brightness, fire.region
            ));
            if let Some(country) = &fire.country {
                output.push_str(&format!(" / {}", country));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn format_air(&self, response: &AirResponse) -> Result<String> {
        let mut output = format!("Stations: {} ({})\n\n", response.total, response.source);
        push_stations(&mut output, &response.data);
        Ok(output)
    }

    fn format_historical(&self, response: &HistoricalAirResponse) -> Result<String> {
        let params = &response.global_parameters;
        let mut output = String::new();

        output.push_str(&format!("{}\n", response.description));
        output.push_str(&format!("Multiplier: {}\n", response.historical_multiplier));
        output.push_str(&format!(
            "CO2: {} ppm  SO2: {}  NO2: {}  Overall: {}\n\n",
            params.co2, params.so2, params.no2, params.quality
        ));
        push_stations(&mut output, &response.data);

        Ok(output)
    }
}
