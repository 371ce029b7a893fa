//! Land region table
//!
//! Continental regions with the boxes the fire generator samples from.
//! Weights set each region's share of the generated points.

use crate::geo::country;
use crate::geo::BoundingBox;
use crate::random::RandomSource;

/// How a region labels the country of a point
#[derive(Debug, Clone, Copy)]
pub enum CountryRule {
    /// Deterministic label from latitude/longitude thresholds
    ByPosition(fn(f64, f64) -> &'static str),
    /// Uniform pick from a fixed list (must be non-empty)
    Pick(&'static [&'static str]),
}

impl CountryRule {
    /// Label a point
    pub fn label(&self, lat: f64, lng: f64, rng: &dyn RandomSource) -> &'static str {
        match self {
            Self::ByPosition(rule) => rule(lat, lng),
            Self::Pick(names) if names.is_empty() => country::UNKNOWN,
            Self::Pick(names) => names[rng.index(names.len())],
        }
    }
}

/// A named land region
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    /// Non-empty list of sampling boxes
    pub areas: &'static [BoundingBox],
    /// Relative share of generated points (positive)
    pub weight: u32,
    pub countries: CountryRule,
}

impl Region {
    /// Label the country of a point inside this region
    pub fn country(&self, lat: f64, lng: f64, rng: &dyn RandomSource) -> &'static str {
        self.countries.label(lat, lng, rng)
    }
}

/// Continental regions, weights summing to 73
pub static LAND_REGIONS: &[Region] = &[
    Region {
        name: "North America",
        areas: &[
            BoundingBox::new(25.0, 50.0, -125.0, -65.0), // contiguous US
            BoundingBox::new(45.0, 60.0, -110.0, -60.0), // Canada
            BoundingBox::new(15.0, 30.0, -115.0, -85.0), // Mexico
        ],
        weight: 15,
        countries: CountryRule::ByPosition(country::north_america),
    },
    Region {
        name: "South America",
        areas: &[
            BoundingBox::new(-35.0, 5.0, -80.0, -45.0),
            BoundingBox::new(-10.0, 12.0, -80.0, -60.0),
        ],
        weight: 12,
        countries: CountryRule::Pick(country::SOUTH_AMERICA),
    },
    Region {
        name: "Europe",
        areas: &[
            BoundingBox::new(40.0, 55.0, -10.0, 25.0),
            BoundingBox::new(45.0, 60.0, 10.0, 40.0),
            BoundingBox::new(35.0, 45.0, -5.0, 15.0),
        ],
        weight: 10,
        countries: CountryRule::ByPosition(country::europe),
    },
    Region {
        name: "Asia",
        areas: &[
            BoundingBox::new(20.0, 50.0, 70.0, 120.0),  // China, India
            BoundingBox::new(50.0, 70.0, 50.0, 140.0),  // Siberia, Far East
            BoundingBox::new(25.0, 40.0, 120.0, 145.0), // Japan, Korea
        ],
        weight: 20,
        countries: CountryRule::ByPosition(country::asia),
    },
    Region {
        name: "Africa",
        areas: &[
            BoundingBox::new(-35.0, -5.0, 15.0, 35.0),
            BoundingBox::new(-5.0, 15.0, 10.0, 30.0),
            BoundingBox::new(15.0, 35.0, -20.0, 40.0),
        ],
        weight: 12,
        countries: CountryRule::ByPosition(country::africa),
    },
    Region {
        name: "Australia",
        areas: &[BoundingBox::new(-35.0, -15.0, 115.0, 150.0)],
        weight: 4,
        countries: CountryRule::Pick(country::OCEANIA),
    },
];

/// Find a region by name
pub fn find<'a>(regions: &'a [Region], name: &str) -> Option<&'a Region> {
    regions.iter().find(|r| r.name == name)
}
