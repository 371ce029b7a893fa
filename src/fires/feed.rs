//! Satellite fire feed (NASA FIRMS)
//!
//! Tries a short list of CSV endpoints in order and parses the first usable
//! payload. When nothing usable comes back the caller gets generated demo
//! fires instead of an error.
//!
//! CSV layout: `latitude,longitude,brightness,scan,track,acq_date,acq_time,...`

use crate::config::{FiresConfig, UpstreamConfig};
use crate::constants::api::{FIRMS_URL, TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::fires::{FirePoint, FireGenerator, FireResponse};
use crate::geo::{region_of, BoundingBox, Region, LAND_REGIONS};
use crate::random::RandomSource;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("ember-map/", env!("CARGO_PKG_VERSION"));

/// Live records outside this window are dropped
pub const LIVE_WINDOW: BoundingBox = BoundingBox::new(30.0, 80.0, 10.0, 180.0);

/// Region label for live points outside every table region
pub const OTHER_REGION: &str = "Other";

/// Feed products queried for the whole world
const WORLD_SOURCES: &[&str] = &["MODIS_NRT", "VIIRS_SNPP_NRT"];

/// Country-level fallback query: (source, ISO3 country)
const COUNTRY_SOURCE: (&str, &str) = ("VIIRS_SNPP_NRT", "GRC");

/// FIRMS CSV client
#[derive(Debug, Clone)]
pub struct FirmsClient {
    client: reqwest::Client,
    base_url: String,
    map_key: Option<String>,
}

impl FirmsClient {
    /// Create a client for the public FIRMS endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(FIRMS_URL, None, Duration::from_secs(TIMEOUT_SECS))
    }

    /// Create a client with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: &str, map_key: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            map_key: map_key.filter(|k| !k.is_empty()).map(str::to_string),
        })
    }

    /// Create a client from the upstream config section
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::with_base_url(
            &config.firms_url,
            Some(config.firms_map_key.as_str()),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Endpoints to try for a given day, in order
    pub fn candidate_urls(&self, date: NaiveDate) -> Vec<String> {
        let day = date.format("%Y%m%d");
        let key = self
            .map_key
            .as_deref()
            .map(|k| format!("{}/", urlencoding::encode(k)))
            .unwrap_or_default();

        let mut urls: Vec<String> = WORLD_SOURCES
            .iter()
            .map(|source| {
                format!(
                    "{}/api/area/csv/{}{}/world/1/{}",
                    self.base_url, key, source, day
                )
            })
            .collect();

        let (source, country) = COUNTRY_SOURCE;
        urls.push(format!(
            "{}/api/country/csv/{}{}/{}/1/{}",
            self.base_url, key, source, country, day
        ));

        urls
    }

    /// Fetch a single URL as text
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "FIRMS returned status: {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    /// Fetch and parse the first payload longer than `min_payload_len`
    ///
    /// Each URL is tried once. Parsing stops at the first usable payload even
    /// if it yields no rows.
    pub async fn fetch_fires(
        &self,
        now: DateTime<Utc>,
        min_payload_len: usize,
    ) -> Result<Vec<FirePoint>> {
        for url in self.candidate_urls(now.date_naive()) {
            debug!("Trying fire feed URL: {}", url);

            match self.fetch_text(&url).await {
                Ok(text) if text.len() > min_payload_len => {
                    let fires = parse_csv(&text, &LIVE_WINDOW, LAND_REGIONS, now);
                    info!("Parsed {} fires from {}", fires.len(), url);
                    return Ok(fires);
                }
                Ok(text) => {
                    debug!("Fire feed payload too short ({} bytes): {}", text.len(), url);
                }
                Err(e) => {
                    warn!("Fire feed URL failed: {}: {}", url, e);
                }
            }
        }

        Err(Error::Upstream("No fire feed returned data".to_string()))
    }
}

/// Parse a FIRMS CSV payload
///
/// Rows whose first three columns are not finite numbers, or that fall
/// outside `window`, are skipped.
pub fn parse_csv(
    csv: &str,
    window: &BoundingBox,
    regions: &[Region],
    now: DateTime<Utc>,
) -> Vec<FirePoint> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv.as_bytes());

    let mut fires = Vec::new();

    for record in reader.records() {
        let Ok(record) = record else {
            continue;
        };

        // Repeated header rows show up when payloads are concatenated
        if record.get(0).is_some_and(|c| c.starts_with("latitude")) {
            continue;
        }

        let (Some(lat), Some(lng), Some(brightness)) = (
            parse_float(record.get(0)),
            parse_float(record.get(1)),
            parse_float(record.get(2)),
        ) else {
            continue;
        };

        if !window.contains(lat, lng) {
            continue;
        }

        let region = region_of(regions, lat, lng)
            .map(|r| r.name)
            .unwrap_or(OTHER_REGION);

        fires.push(FirePoint {
            latitude: lat,
            longitude: lng,
            brightness,
            date: parse_acquired(record.get(5), record.get(6)).unwrap_or(now),
            region: region.to_string(),
            country: None,
        });
    }

    fires
}

fn parse_float(cell: Option<&str>) -> Option<f64> {
    cell?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Combine `acq_date` (YYYY-MM-DD) and `acq_time` (HHMM, leading zeros optional)
fn parse_acquired(date: Option<&str>, time: Option<&str>) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date?, "%Y-%m-%d").ok()?;

    let time = time
        .and_then(|t| t.parse::<u32>().ok())
        .and_then(|hhmm| NaiveTime::from_hms_opt(hhmm / 100, hhmm % 100, 0))
        .unwrap_or(NaiveTime::MIN);

    Some(date.and_time(time).and_utc())
}

/// Load fires from the feed, falling back to generated demo data
pub async fn load_fires(
    client: &FirmsClient,
    config: &FiresConfig,
    rng: &dyn RandomSource,
) -> FireResponse {
    let now = Utc::now();

    match client.fetch_fires(now, config.min_payload_len).await {
        Ok(fires) if !fires.is_empty() => {
            info!("Returning {} live fire records", fires.len());
            return FireResponse::live(fires, config.max_returned, now);
        }
        Ok(_) => warn!("Fire feed had no usable rows, using demo data"),
        Err(e) => warn!("Fire feed unavailable, using demo data: {}", e),
    }

    demo_fires(config, rng, now)
}

/// Generated fires wrapped in a demo envelope
pub fn demo_fires(config: &FiresConfig, rng: &dyn RandomSource, now: DateTime<Utc>) -> FireResponse {
    let fires = FireGenerator::from_config(config).generate_at(config.demo_count, rng, now);
    info!("Returning {} demo fires", fires.len());
    FireResponse::demo(fires, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::SeededRandom;
    use axum::Router;
    use chrono::{TimeZone, Timelike};

    const SAMPLE_CSV: &str = "\
latitude,longitude,bright_ti4,scan,track,acq_date,acq_time,satellite,confidence
61.2345,101.5,330.4,0.4,0.37,2024-07-01,312,N,n
55.1,37.9,301.0,0.4,0.37,2024-07-01,1405,N,n
not_a_number,100.0,300.0,0.4,0.37,2024-07-01,1405,N,n
-12.5,130.0,320.0,0.4,0.37,2024-07-01,1405,N,n
45.0,120.0,NaN,0.4,0.37,2024-07-01,1405,N,n
latitude,longitude,bright_ti4,scan,track,acq_date,acq_time,satellite,confidence

52.0,170.0,310.2,0.4,0.37,bad-date,1405,N,n
";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 2, 12, 0, 0).unwrap()
    }

    fn client_for(base: &str) -> FirmsClient {
        FirmsClient::with_base_url(base, None, Duration::from_secs(2)).unwrap()
    }

    async fn serve_text(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(move || async move { body });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_parse_skips_bad_rows() {
        let fires = parse_csv(SAMPLE_CSV, &LIVE_WINDOW, LAND_REGIONS, now());

        // Header, non-numeric, out-of-window, NaN and repeated header dropped
        assert_eq!(fires.len(), 3);
        assert_eq!(fires[0].latitude, 61.2345);
        assert_eq!(fires[0].brightness, 330.4);
        assert_eq!(fires[0].region, "Asia");
        assert!(fires[0].country.is_none());
    }

    #[test]
    fn test_parse_acquisition_time() {
        let fires = parse_csv(SAMPLE_CSV, &LIVE_WINDOW, LAND_REGIONS, now());

        let first = fires[0].date;
        assert_eq!(first.date_naive(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!((first.hour(), first.minute()), (3, 12));

        let second = fires[1].date;
        assert_eq!((second.hour(), second.minute()), (14, 5));

        // Unparseable date falls back to request time
        assert_eq!(fires[2].date, now());
    }

    #[test]
    fn test_parse_region_fallback() {
        let fires = parse_csv(SAMPLE_CSV, &LIVE_WINDOW, LAND_REGIONS, now());
        assert_eq!(fires[1].region, "Europe");
        assert_eq!(fires[2].region, OTHER_REGION);
    }

    #[test]
    fn test_parse_empty_and_header_only() {
        assert!(parse_csv("", &LIVE_WINDOW, LAND_REGIONS, now()).is_empty());
        assert!(parse_csv("latitude,longitude,brightness\n", &LIVE_WINDOW, LAND_REGIONS, now()).is_empty());
    }

    #[test]
    fn test_candidate_urls() {
        let client = client_for("https://firms.example/");
        let urls = client.candidate_urls(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

        assert_eq!(
            urls,
            vec![
                "https://firms.example/api/area/csv/MODIS_NRT/world/1/20240701",
                "https://firms.example/api/area/csv/VIIRS_SNPP_NRT/world/1/20240701",
                "https://firms.example/api/country/csv/VIIRS_SNPP_NRT/GRC/1/20240701",
            ]
        );
    }

    #[test]
    fn test_candidate_urls_with_map_key() {
        let client =
            FirmsClient::with_base_url("https://firms.example", Some("ab/cd"), Duration::from_secs(2))
                .unwrap();
        let urls = client.candidate_urls(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(
            urls[0],
            "https://firms.example/api/area/csv/ab%2Fcd/MODIS_NRT/world/1/20240701"
        );
    }

    #[test]
    fn test_empty_map_key_ignored() {
        let client =
            FirmsClient::with_base_url("https://firms.example", Some(""), Duration::from_secs(2))
                .unwrap();
        let urls = client.candidate_urls(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(urls[0].ends_with("/api/area/csv/MODIS_NRT/world/1/20240701"));
    }

    #[tokio::test]
    async fn test_fetch_from_local_feed() {
        let base = serve_text(SAMPLE_CSV).await;
        let client = client_for(&base);

        let fires = client.fetch_fires(now(), 100).await.unwrap();
        assert_eq!(fires.len(), 3);
    }

    #[tokio::test]
    async fn test_short_payloads_are_rejected() {
        let base = serve_text("latitude,longitude\n").await;
        let client = client_for(&base);

        assert!(client.fetch_fires(now(), 100).await.is_err());
    }

    #[tokio::test]
    async fn test_load_falls_back_when_unreachable() {
        let client = client_for("http://127.0.0.1:1");
        let config = FiresConfig::default();
        let rng = SeededRandom::new(42);

        let response = load_fires(&client, &config, &rng).await;

        assert!(response.is_demo());
        assert_eq!(response.source, crate::constants::source::FIRE_DEMO);
        assert_eq!(response.total, response.fires.len());
        assert!(response.fires.len() <= config.demo_count);
        assert!(response.fires.iter().all(|f| f.country.is_some()));
    }

    #[tokio::test]
    async fn test_load_uses_live_feed() {
        let base = serve_text(SAMPLE_CSV).await;
        let client = client_for(&base);
        let config = FiresConfig {
            max_returned: 2,
            ..FiresConfig::default()
        };
        let rng = SeededRandom::new(42);

        let response = load_fires(&client, &config, &rng).await;

        assert!(!response.is_demo());
        assert_eq!(response.source, crate::constants::source::FIRMS);
        assert_eq!(response.fires.len(), 2);
        assert_eq!(response.total, 3);
    }
}
