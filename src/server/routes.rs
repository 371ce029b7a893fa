//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::air::feed::load_air_quality;
use crate::air::historical::{HistoricalAirResponse, DEFAULT_YEAR};
use crate::air::AirResponse;
use crate::constants::fires::MAX_GENERATE_COUNT;
use crate::error::Error;
use crate::fires::feed::{demo_fires, load_fires};
use crate::fires::FireResponse;
use crate::random::get_source;
use crate::server::state::AppState;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/fires", get(fires_handler))
        .route("/api/fires/demo", get(demo_fires_handler))
        .route("/api/air-quality", get(air_quality_handler))
        .route("/api/air-quality/historical", get(historical_handler))
        .route("/api/status", get(status_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCount(_) => "INVALID_COUNT",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Upstream(_) => "UPSTREAM_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError {
            error: rejection.body_text(),
            code: "INVALID_QUERY".to_string(),
        }
    }
}

/// Live fires, or demo fires when the feed is down
///
/// GET /api/fires
async fn fires_handler(State(state): State<Arc<AppState>>) -> Json<FireResponse> {
    let config = state.fires_config().await;
    let rng = get_source(None);
    Json(load_fires(&state.firms, &config, rng.as_ref()).await)
}

/// Query for the synthetic fire endpoint
#[derive(Debug, Deserialize)]
pub struct DemoQuery {
    /// Number of points (defaults to `fires.demo_count`)
    pub count: Option<usize>,
    /// Seed for reproducible output
    pub seed: Option<u64>,
}

/// Generated fires
///
/// GET /api/fires/demo?count=&seed=
async fn demo_fires_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DemoQuery>, QueryRejection>,
) -> Result<Json<FireResponse>, ApiError> {
    let Query(query) = query?;
    let mut config = state.fires_config().await;

    if let Some(count) = query.count {
        if count > MAX_GENERATE_COUNT {
            return Err(Error::InvalidCount(format!(
                "{} exceeds the maximum of {}",
                count, MAX_GENERATE_COUNT
            ))
            .into());
        }
        config.demo_count = count;
    }

    debug!("Generating {} demo fires (seed {:?})", config.demo_count, query.seed);
    let rng = get_source(query.seed);
    Ok(Json(demo_fires(&config, rng.as_ref(), Utc::now())))
}

/// Live station data, or demo stations when the feed is down
///
/// GET /api/air-quality
async fn air_quality_handler(State(state): State<Arc<AppState>>) -> Json<AirResponse> {
    Json(load_air_quality(&state.openaq).await)
}

#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    pub year: Option<i32>,
}

/// Modelled station data for a year
///
/// GET /api/air-quality/historical?year=
async fn historical_handler(
    query: Result<Query<HistoricalQuery>, QueryRejection>,
) -> Result<Json<HistoricalAirResponse>, ApiError> {
    let Query(query) = query?;
    let year = query.year.unwrap_or(DEFAULT_YEAR);
    Ok(Json(HistoricalAirResponse::for_year(year, Utc::now())))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub version: String,
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        let mut config = Config::default();
        // Nothing listens here, so every upstream call falls back
        config.upstream.firms_url = "http://127.0.0.1:1".to_string();
        config.upstream.openaq_url = "http://127.0.0.1:1/latest".to_string();
        config.upstream.timeout_secs = 2;
        Arc::new(AppState::new(config).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let (status, body) = get_json("/api/status").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: StatusResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.running);
        assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_fires_falls_back_to_demo() {
        let (status, body) = get_json("/api/fires").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: FireResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.is_demo());
        assert!(parsed.fires.len() <= 73);
        assert_eq!(parsed.total, parsed.fires.len());
    }

    #[tokio::test]
    async fn test_demo_fires_with_seed() {
        let (status, first) = get_json("/api/fires/demo?count=40&seed=9").await;
        assert_eq!(status, StatusCode::OK);
        let (_, second) = get_json("/api/fires/demo?count=40&seed=9").await;

        assert_eq!(first["demo"], true);
        let coords = |body: &serde_json::Value| -> Vec<(f64, f64, f64)> {
            body["fires"]
                .as_array()
                .unwrap()
                .iter()
                .map(|f| {
                    (
                        f["latitude"].as_f64().unwrap(),
                        f["longitude"].as_f64().unwrap(),
                        f["brightness"].as_f64().unwrap(),
                    )
                })
                .collect()
        };
        // Timestamps differ between requests; positions don't
        assert_eq!(coords(&first), coords(&second));
        assert!(first["total"].as_u64().unwrap() <= 40);
    }

    #[tokio::test]
    async fn test_demo_fires_count_limit() {
        let (status, body) = get_json("/api/fires/demo?count=3001").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_COUNT");

        let (status, _) = get_json("/api/fires/demo?count=3000&seed=1").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_query_returns_api_error() {
        for uri in [
            "/api/fires/demo?count=lots",
            "/api/fires/demo?seed=-1",
            "/api/air-quality/historical?year=nineteen",
        ] {
            let (status, body) = get_json(uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["code"], "INVALID_QUERY", "{}", uri);
            assert!(!body["error"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_air_quality_falls_back_to_demo() {
        let (status, body) = get_json("/api/air-quality").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: AirResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.is_demo());
        assert_eq!(parsed.source, "Demo Data");
    }

    #[tokio::test]
    async fn test_historical_endpoint() {
        let (status, body) = get_json("/api/air-quality/historical?year=1970").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], 1970);
        assert_eq!(body["historicalMultiplier"], 0.9);
        assert_eq!(body["globalParameters"]["quality"], "poor");
        assert_eq!(body["totalStations"], 100);
    }

    #[tokio::test]
    async fn test_historical_default_year() {
        let (_, body) = get_json("/api/air-quality/historical").await;
        assert_eq!(body["year"], 2024);
        assert_eq!(body["source"], "Historical Data");
    }

    #[tokio::test]
    async fn test_cors_header() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .header("origin", "https://example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
