//! Ocean mask
//!
//! Ordered rectangular exclusion rules approximating open water, ice and
//! sparse deserts. The first matching rule decides. Rectangles are coarse on
//! purpose: the mask only biases generated points toward land.

use crate::random::RandomSource;

/// Latitude predicate of a rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatSpan {
    /// `min <= lat <= max`
    Between(f64, f64),
    /// `lat > bound`
    Above(f64),
    /// `lat < bound`
    Below(f64),
}

impl LatSpan {
    pub fn contains(&self, lat: f64) -> bool {
        match *self {
            Self::Between(min, max) => lat >= min && lat <= max,
            Self::Above(bound) => lat > bound,
            Self::Below(bound) => lat < bound,
        }
    }
}

/// Longitude predicate of a rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LngSpan {
    /// Any longitude
    Any,
    /// `min <= lng <= max`
    Between(f64, f64),
    /// Span crossing the antimeridian: `lng >= east || lng <= west`
    Wrapping { east: f64, west: f64 },
}

impl LngSpan {
    pub fn contains(&self, lng: f64) -> bool {
        match *self {
            Self::Any => true,
            Self::Between(min, max) => lng >= min && lng <= max,
            Self::Wrapping { east, west } => lng >= east || lng <= west,
        }
    }
}

/// What happens to a point matching a rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Always rejected
    Water,
    /// Kept with the given probability
    Sparse { keep_probability: f64 },
}

/// A single exclusion rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskRule {
    pub name: &'static str,
    pub lat: LatSpan,
    pub lng: LngSpan,
    pub kind: RuleKind,
}

impl MaskRule {
    const fn water(name: &'static str, lat: LatSpan, lng: LngSpan) -> Self {
        Self {
            name,
            lat,
            lng,
            kind: RuleKind::Water,
        }
    }

    pub fn matches(&self, lat: f64, lng: f64) -> bool {
        self.lat.contains(lat) && self.lng.contains(lng)
    }
}

/// Pure classification of a point against the mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Land,
    Water { rule: &'static str },
    Sparse { rule: &'static str, keep_probability: f64 },
}

use self::LatSpan as Lat;
use self::LngSpan as Lng;

/// World rules in evaluation order
pub const WORLD_RULES: &[MaskRule] = &[
    MaskRule::water("Atlantic Ocean", Lat::Between(-50.0, 50.0), Lng::Between(-70.0, 20.0)),
    MaskRule::water(
        "Pacific Ocean",
        Lat::Between(-60.0, 60.0),
        Lng::Wrapping { east: 120.0, west: -70.0 },
    ),
    MaskRule::water("Indian Ocean", Lat::Between(-50.0, 30.0), Lng::Between(40.0, 120.0)),
    MaskRule::water("Arctic Ocean", Lat::Above(70.0), Lng::Any),
    MaskRule::water("Mediterranean Sea", Lat::Between(30.0, 45.0), Lng::Between(-5.0, 36.0)),
    MaskRule::water("Caribbean Sea", Lat::Between(10.0, 25.0), Lng::Between(-90.0, -60.0)),
    MaskRule::water("Baltic Sea", Lat::Between(53.0, 60.0), Lng::Between(10.0, 30.0)),
    MaskRule::water("Black Sea", Lat::Between(41.0, 47.0), Lng::Between(28.0, 42.0)),
    MaskRule::water("Caspian Sea", Lat::Between(36.0, 47.0), Lng::Between(46.0, 54.0)),
    MaskRule::water("Red Sea", Lat::Between(12.0, 30.0), Lng::Between(32.0, 43.0)),
    MaskRule::water("Persian Gulf", Lat::Between(24.0, 30.0), Lng::Between(48.0, 56.0)),
    MaskRule::water("Sea of Japan", Lat::Between(35.0, 45.0), Lng::Between(127.0, 142.0)),
    MaskRule::water("Sea of Okhotsk", Lat::Between(50.0, 60.0), Lng::Between(140.0, 155.0)),
    MaskRule::water(
        "Bering Sea",
        Lat::Between(55.0, 65.0),
        Lng::Wrapping { east: 160.0, west: -160.0 },
    ),
    MaskRule::water("Great Lakes", Lat::Between(41.0, 49.0), Lng::Between(-92.0, -76.0)),
    MaskRule::water("Lake Baikal", Lat::Between(51.0, 56.0), Lng::Between(103.0, 110.0)),
    MaskRule {
        name: "Sahara",
        lat: Lat::Between(18.0, 30.0),
        lng: Lng::Between(-15.0, 35.0),
        kind: RuleKind::Sparse {
            keep_probability: 0.1,
        },
    },
    MaskRule::water("Greenland", Lat::Between(60.0, 85.0), Lng::Between(-70.0, -10.0)),
    MaskRule::water("Antarctica", Lat::Below(-60.0), Lng::Any),
];

/// Ordered list of exclusion rules
#[derive(Debug, Clone, Copy)]
pub struct OceanMask<'a> {
    rules: &'a [MaskRule],
}

impl OceanMask<'static> {
    /// The built-in world mask
    pub fn world() -> Self {
        Self { rules: WORLD_RULES }
    }

    /// A mask that accepts everything
    pub fn empty() -> Self {
        Self { rules: &[] }
    }
}

impl<'a> OceanMask<'a> {
    /// Create a mask from custom rules
    pub fn new(rules: &'a [MaskRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a [MaskRule] {
        self.rules
    }

    /// Classify a point by the first matching rule
    pub fn classify(&self, lat: f64, lng: f64) -> Classification {
        match self.rules.iter().find(|r| r.matches(lat, lng)) {
            None => Classification::Land,
            Some(rule) => match rule.kind {
                RuleKind::Water => Classification::Water { rule: rule.name },
                RuleKind::Sparse { keep_probability } => Classification::Sparse {
                    rule: rule.name,
                    keep_probability,
                },
            },
        }
    }

    /// Decide whether a point is kept as land
    ///
    /// Draws from `rng` only when a sparse rule matches.
    pub fn accepts(&self, lat: f64, lng: f64, rng: &dyn RandomSource) -> bool {
        match self.classify(lat, lng) {
            Classification::Land => true,
            Classification::Water { .. } => false,
            Classification::Sparse {
                keep_probability, ..
            } => rng.float() > 1.0 - keep_probability,
        }
    }
}

impl Default for OceanMask<'static> {
    fn default() -> Self {
        Self::world()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::SequenceRandom;

    fn rule_at(lat: f64, lng: f64) -> Option<&'static str> {
        match OceanMask::world().classify(lat, lng) {
            Classification::Land => None,
            Classification::Water { rule } | Classification::Sparse { rule, .. } => Some(rule),
        }
    }

    #[test]
    fn test_open_oceans() {
        assert_eq!(rule_at(0.0, -30.0), Some("Atlantic Ocean"));
        assert_eq!(rule_at(0.0, 170.0), Some("Pacific Ocean"));
        assert_eq!(rule_at(0.0, -150.0), Some("Pacific Ocean"));
        assert_eq!(rule_at(-20.0, 80.0), Some("Indian Ocean"));
        assert_eq!(rule_at(75.0, 100.0), Some("Arctic Ocean"));
        assert_eq!(rule_at(-70.0, 0.0), Some("Antarctica"));
    }

    #[test]
    fn test_first_match_wins() {
        // Inside both the Atlantic and Mediterranean boxes
        assert_eq!(rule_at(40.0, 10.0), Some("Atlantic Ocean"));
        // Inside both the Atlantic and Sahara boxes
        assert_eq!(rule_at(25.0, 0.0), Some("Atlantic Ocean"));
    }

    #[test]
    fn test_bering_sea_wraps_antimeridian() {
        assert_eq!(rule_at(62.0, 170.0), Some("Bering Sea"));
        assert_eq!(rule_at(62.0, -170.0), Some("Bering Sea"));
        assert_eq!(rule_at(62.0, 150.0), None);
    }

    #[test]
    fn test_lakes() {
        // The Pacific rule shadows the Great Lakes box entirely
        assert_eq!(rule_at(45.0, -85.0), Some("Pacific Ocean"));
        assert_eq!(rule_at(53.5, 108.0), Some("Lake Baikal"));
    }

    #[test]
    fn test_land_points() {
        let mask = OceanMask::world();
        // Central Siberia
        assert_eq!(mask.classify(62.0, 100.0), Classification::Land);
        // Central Africa
        assert_eq!(mask.classify(5.0, 25.0), Classification::Land);
        // Northern China
        assert_eq!(mask.classify(40.0, 90.0), Classification::Land);
    }

    #[test]
    fn test_sahara_is_sparse() {
        let mask = OceanMask::world();
        assert_eq!(
            mask.classify(25.0, 25.0),
            Classification::Sparse {
                rule: "Sahara",
                keep_probability: 0.1
            }
        );

        assert!(!mask.accepts(25.0, 25.0, &SequenceRandom::constant(0.5)));
        assert!(!mask.accepts(25.0, 25.0, &SequenceRandom::constant(0.89)));
        // Keep threshold is exclusive
        assert!(!mask.accepts(25.0, 25.0, &SequenceRandom::constant(0.9)));
        assert!(mask.accepts(25.0, 25.0, &SequenceRandom::constant(0.9001)));
        assert!(mask.accepts(25.0, 25.0, &SequenceRandom::constant(0.95)));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let mask = OceanMask::world();
        for &(lat, lng) in &[(62.0, 100.0), (0.0, -30.0), (25.0, 25.0), (53.5, 108.0)] {
            assert_eq!(mask.classify(lat, lng), mask.classify(lat, lng));
        }
    }

    #[test]
    fn test_empty_mask_accepts_all() {
        let mask = OceanMask::empty();
        let rng = SequenceRandom::constant(0.0);
        assert!(mask.accepts(0.0, -30.0, &rng));
        assert!(mask.accepts(-89.0, 0.0, &rng));
    }

    #[test]
    fn test_water_never_draws() {
        // A water match must not consume the random stream
        let mask = OceanMask::world();
        let rng = SequenceRandom::new(vec![0.1, 0.95]);
        assert!(!mask.accepts(0.0, -30.0, &rng));
        assert!(mask.accepts(25.0, 25.0, &SequenceRandom::constant(0.95)));
        assert_eq!(rng.float(), 0.1);
    }
}
