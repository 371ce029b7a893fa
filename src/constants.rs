//! Centralized constants for the ember-map crate
//!
//! Constants shared by the generator, the upstream clients and the server.

/// Fire record constants
pub mod fires {
    /// Default number of synthetic fires served when the feed is unavailable
    pub const DEMO_COUNT: usize = 73;

    /// Maximum number of live records returned in one response
    pub const MAX_RETURNED: usize = 73;

    /// Largest count accepted by the synthetic endpoint
    pub const MAX_GENERATE_COUNT: usize = 3000;

    /// Attempts allowed per requested point before a region gives up
    pub const ATTEMPT_FACTOR: usize = 20;

    /// Lower bound of synthetic brightness (inclusive)
    pub const BRIGHTNESS_MIN: f64 = 100.0;

    /// Upper bound of synthetic brightness (exclusive)
    pub const BRIGHTNESS_MAX: f64 = 500.0;

    /// Feed payloads no longer than this are treated as empty
    pub const MIN_PAYLOAD_LEN: usize = 100;
}

/// External API endpoints
pub mod api {
    /// NASA FIRMS active fire service
    pub const FIRMS_URL: &str = "https://firms.modaps.eosdis.nasa.gov";

    /// OpenAQ latest measurements
    pub const OPENAQ_URL: &str = "https://api.openaq.org/v2/latest?limit=100&parameter=pm25";

    /// Upstream request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 15;
}

/// Source labels reported in response envelopes
pub mod source {
    pub const FIRMS: &str = "NASA FIRMS API";
    pub const FIRE_DEMO: &str = "Demo Data - Global Coverage (Land Only)";
    pub const OPENAQ: &str = "OpenAQ API";
    pub const AIR_DEMO: &str = "Demo Data";
    pub const HISTORICAL: &str = "Historical Data";
}
