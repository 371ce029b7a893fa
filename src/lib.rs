//! ember-map: wildfire and air quality map data
//!
//! A library and CLI tool that serves fire detections and air quality
//! stations for a world map, with synthetic land-only fires when the
//! satellite feed is unavailable.
//!
//! ## Features
//!
//! - Weighted region allocation with an ocean mask and country labels
//! - NASA FIRMS CSV and OpenAQ JSON clients with demo fallbacks
//! - Historical air quality model by year
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use ember_map::fires;
//! use ember_map::random::pseudo::SeededRandom;
//!
//! let rng = SeededRandom::new(42);
//! let points = fires::generate(73, &rng);
//! assert!(points.len() <= 73);
//! for p in &points {
//!     println!("{} {} {:.1} {}", p.latitude, p.longitude, p.brightness, p.region);
//! }
//! ```

pub mod air;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fires;
pub mod format;
pub mod geo;
pub mod random;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fires::{FireGenerator, FirePoint, FireResponse};
pub use geo::Coordinates;
pub use random::RandomSource;
