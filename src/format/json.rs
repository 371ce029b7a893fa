//! JSON output formatter

use crate::air::historical::HistoricalAirResponse;
use crate::air::AirResponse;
use crate::error::Result;
use crate::fires::FireResponse;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the response envelope as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Response envelope as JSON"
    }

    fn format_fires(&self, response: &FireResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }

    fn format_air(&self, response: &AirResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }

    fn format_historical(&self, response: &HistoricalAirResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}
