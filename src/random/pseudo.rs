//! Pseudo-random sources
//!
//! `ThreadRandom` is the default for serving requests. `SeededRandom` gives a
//! reproducible stream for a fixed seed. `SequenceRandom` replays a scripted
//! list of values, which lets tests force decisions such as the desert
//! acceptance draw.

use crate::random::RandomSource;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Thread-local RNG source
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread RNG source
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn float(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded pseudo-random source for reproducible output
pub struct SeededRandom {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededRandom {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of random values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn float(&self) -> f64 {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}

/// Replays a fixed list of values in order, wrapping around at the end
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Create a source from values in [0.0, 1.0)
    ///
    /// An empty list behaves as a constant 0.0.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// A source that always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn float(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}
