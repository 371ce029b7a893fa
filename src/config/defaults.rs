//! Default configuration values

pub use crate::constants::api::{FIRMS_URL, OPENAQ_URL, TIMEOUT_SECS};
pub use crate::constants::fires::{
    ATTEMPT_FACTOR, BRIGHTNESS_MAX, BRIGHTNESS_MIN, DEMO_COUNT, MAX_RETURNED, MIN_PAYLOAD_LEN,
};

/// Default CLI output format
pub const DEFAULT_FORMAT: &str = "json";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "ember-map";
