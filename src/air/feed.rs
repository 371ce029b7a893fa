//! Air quality feed (OpenAQ)
//!
//! Stations come back as a JSON array under `results` (or `data` on some
//! mirrors). Stations are decoded one at a time so a single malformed entry
//! doesn't discard the whole payload.

use super::historical::current_stations;
use super::{AirResponse, Station};
use crate::config::UpstreamConfig;
use crate::constants::api::{OPENAQ_URL, TIMEOUT_SECS};
use crate::constants::source;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("ember-map/", env!("CARGO_PKG_VERSION"));

/// OpenAQ "latest" client
#[derive(Debug, Clone)]
pub struct OpenAqClient {
    client: reqwest::Client,
    url: String,
}

impl OpenAqClient {
    pub fn new() -> Result<Self> {
        Self::with_url(OPENAQ_URL, Duration::from_secs(TIMEOUT_SECS))
    }

    /// Create a client for a full endpoint URL, query string included
    pub fn with_url(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::with_url(&config.openaq_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch stations with at least one valid PM2.5 reading
    pub async fn fetch_stations(&self) -> Result<Vec<Station>> {
        debug!("Fetching air quality from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "OpenAQ returned status: {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        parse_stations(body)
    }
}

/// Extract stations from an OpenAQ response body
pub fn parse_stations(body: Value) -> Result<Vec<Station>> {
    let Value::Object(mut root) = body else {
        return Err(Error::Upstream("OpenAQ response is not an object".to_string()));
    };

    let entries = match root.remove("results").or_else(|| root.remove("data")) {
        Some(Value::Array(entries)) => entries,
        _ => {
            return Err(Error::Upstream(
                "OpenAQ response has no results array".to_string(),
            ))
        }
    };

    let total = entries.len();
    let stations: Vec<Station> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<Station>(entry).ok())
        .filter_map(Station::retain_pm25)
        .collect();

    debug!("Kept {} of {} stations", stations.len(), total);
    Ok(stations)
}

/// Load stations from the feed, falling back to demo stations
pub async fn load_air_quality(client: &OpenAqClient) -> AirResponse {
    let now = Utc::now();

    match client.fetch_stations().await {
        Ok(stations) if !stations.is_empty() => {
            info!("Returning {} live stations", stations.len());
            return AirResponse {
                total: stations.len(),
                data: stations,
                timestamp: now.timestamp_millis(),
                source: source::OPENAQ.to_string(),
                demo: None,
            };
        }
        Ok(_) => warn!("Air quality feed had no usable stations, using demo data"),
        Err(e) => warn!("Air quality feed unavailable, using demo data: {}", e),
    }

    demo_air_quality(now)
}

/// Reference stations for the current year in a demo envelope
pub fn demo_air_quality(now: DateTime<Utc>) -> AirResponse {
    let data = current_stations(now);
    AirResponse {
        total: data.len(),
        data,
        timestamp: now.timestamp_millis(),
        source: source::AIR_DEMO.to_string(),
        demo: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    fn sample_body() -> Value {
        json!({
            "meta": {"found": 4},
            "results": [
                {
                    "location": "Kraków",
                    "city": "Kraków",
                    "country": "PL",
                    "coordinates": {"latitude": 50.06, "longitude": 19.94},
                    "measurements": [
                        {"parameter": "pm25", "value": 31.5, "unit": "µg/m³", "lastUpdated": "2024-07-01T00:00:00Z"},
                        {"parameter": "pm10", "value": 44.0, "unit": "µg/m³"}
                    ]
                },
                {
                    "location": "No coordinates",
                    "coordinates": null,
                    "measurements": [{"parameter": "pm25", "value": 10.0}]
                },
                {
                    "location": "Negative",
                    "coordinates": {"latitude": 10.0, "longitude": 10.0},
                    "measurements": [{"parameter": "pm25", "value": -999.0}]
                },
                {
                    "location": "Ozone only",
                    "coordinates": {"latitude": 10.0, "longitude": 10.0},
                    "measurements": [{"parameter": "o3", "value": 0.03}]
                }
            ]
        })
    }

    async fn serve_json(body: Value) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/latest", get(move || async move { Json(body) }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/latest", addr)
    }

    #[test]
    fn test_parse_keeps_valid_pm25_only() {
        let stations = parse_stations(sample_body()).unwrap();

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].location, "Kraków");
        assert_eq!(stations[0].measurements.len(), 1);
        assert_eq!(stations[0].pm25(), Some(31.5));
    }

    #[test]
    fn test_parse_accepts_data_key() {
        let body = json!({
            "data": [{
                "location": "Mirror",
                "coordinates": {"latitude": 1.0, "longitude": 2.0},
                "measurements": [{"parameter": "pm25", "value": 5.0}]
            }]
        });
        let stations = parse_stations(body).unwrap();
        assert_eq!(stations.len(), 1);
        assert!(stations[0].city.is_none());
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        assert!(parse_stations(json!([1, 2, 3])).is_err());
        assert!(parse_stations(json!({"results": "nope"})).is_err());
        assert!(parse_stations(json!({})).is_err());
    }

    #[test]
    fn test_demo_envelope() {
        let response = demo_air_quality(Utc::now());
        assert!(response.is_demo());
        assert_eq!(response.source, "Demo Data");
        assert_eq!(response.total, response.data.len());
        assert!(response.data.iter().all(|s| s.pm25().is_some()));
    }

    #[tokio::test]
    async fn test_load_from_local_feed() {
        let url = serve_json(sample_body()).await;
        let client = OpenAqClient::with_url(&url, Duration::from_secs(2)).unwrap();

        let response = load_air_quality(&client).await;

        assert!(!response.is_demo());
        assert_eq!(response.source, "OpenAQ API");
        assert_eq!(response.total, 1);
    }

    #[tokio::test]
    async fn test_load_falls_back_on_empty_feed() {
        let url = serve_json(json!({"results": []})).await;
        let client = OpenAqClient::with_url(&url, Duration::from_secs(2)).unwrap();

        let response = load_air_quality(&client).await;
        assert!(response.is_demo());
    }

    #[tokio::test]
    async fn test_load_falls_back_when_unreachable() {
        let client =
            OpenAqClient::with_url("http://127.0.0.1:1/latest", Duration::from_secs(2)).unwrap();

        let response = load_air_quality(&client).await;
        assert!(response.is_demo());
        assert!(!response.data.is_empty());
    }
}
