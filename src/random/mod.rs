//! Random sources
//!
//! The generator never calls an ambient RNG directly. Every random draw goes
//! through a `RandomSource`, so tests can seed or script the sequence.

pub mod pseudo;

/// Trait for random number sources
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn float(&self) -> f64;

    /// Generate a float uniformly distributed in [min, max)
    fn range(&self, min: f64, max: f64) -> f64 {
        min + self.float() * (max - min)
    }

    /// Pick an index uniformly from `0..len`
    ///
    /// `len` must be non-zero.
    fn index(&self, len: usize) -> usize {
        let i = (self.float() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

/// Get a random source, seeded when a seed is given
pub fn get_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededRandom::new(seed)),
        None => Box::new(pseudo::ThreadRandom::new()),
    }
}
