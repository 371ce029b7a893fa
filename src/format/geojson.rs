//! GeoJSON output formatter
//!
//! Emits a `FeatureCollection` of points, `[longitude, latitude]` order.
//! Station features carry the AQI band, marker colour and radius.

use crate::air::historical::HistoricalAirResponse;
use crate::air::{marker_radius, AirResponse, AqiLevel, Station};
use crate::error::Result;
use crate::fires::FireResponse;
use crate::format::OutputFormatter;
use serde_json::{json, Value};

pub struct GeoJsonFormatter;

fn point(latitude: f64, longitude: f64, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [longitude, latitude],
        },
        "properties": properties,
    })
}

fn collection(features: Vec<Value>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "type": "FeatureCollection",
        "features": features,
    }))?)
}

fn station_features(stations: &[Station]) -> Vec<Value> {
    stations
        .iter()
        .filter_map(|s| {
            let pm25 = s.pm25()?;
            let level = AqiLevel::from_pm25(pm25);
            Some(point(
                s.coordinates.latitude,
                s.coordinates.longitude,
                json!({
                    "location": s.location,
                    "city": s.city,
                    "country": s.country,
                    "pm25": pm25,
                    "level": level,
                    "color": level.color(),
                    "radius": marker_radius(pm25),
                }),
            ))
        })
        .collect()
}

impl OutputFormatter for GeoJsonFormatter {
    fn name(&self) -> &str {
        "geojson"
    }

    fn description(&self) -> &str {
        "GeoJSON FeatureCollection of points"
    }

    fn format_fires(&self, response: &FireResponse) -> Result<String> {
        let features = response
            .fires
            .iter()
            .map(|f| {
                point(
                    f.latitude,
                    f.longitude,
                    json!({
                        "brightness": f.brightness,
                        "date": f.date,
                        "region": f.region,
                        "country": f.country,
                    }),
                )
            })
            .collect();
        collection(features)
    }

    fn format_air(&self, response: &AirResponse) -> Result<String> {
        collection(station_features(&response.data))
    }

    fn format_historical(&self, response: &HistoricalAirResponse) -> Result<String> {
        collection(station_features(&response.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_data;

    #[test]
    fn test_geojson_fires() {
        let response = test_data::fires();
        let output = GeoJsonFormatter.format_fires(&response).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["type"], "FeatureCollection");
        let features = parsed["features"].as_array().unwrap();
        assert_eq!(features.len(), response.fires.len());

        let first = &response.fires[0];
        let coords = &features[0]["geometry"]["coordinates"];
        assert_eq!(coords[0].as_f64().unwrap(), first.longitude);
        assert_eq!(coords[1].as_f64().unwrap(), first.latitude);
        assert_eq!(features[0]["properties"]["region"], first.region.as_str());
    }

    #[test]
    fn test_geojson_station_properties() {
        let output = GeoJsonFormatter.format_air(&test_data::air()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        let props = &parsed["features"][0]["properties"];
        let pm25 = props["pm25"].as_f64().unwrap();
        let level = AqiLevel::from_pm25(pm25);
        assert_eq!(props["color"], level.color());
        assert_eq!(props["radius"].as_f64().unwrap(), marker_radius(pm25));
    }

    #[test]
    fn test_geojson_historical() {
        let response = test_data::historical();
        let output = GeoJsonFormatter.format_historical(&response).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["features"].as_array().unwrap().len(),
            response.total_stations
        );
    }
}
