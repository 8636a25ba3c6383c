//! Sources of randomness for the safety scorer.
//!
//! The scorer never touches a global RNG directly. Callers pass an
//! [`EntropySource`], so production code can use the thread-local RNG while
//! tests pin the random term to a fixed value or a seeded sequence.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Produces uniformly distributed samples in `[0, 1)`.
pub trait EntropySource: Send + Sync {
    /// Returns the next sample.
    fn sample(&self) -> f64;
}

/// Draws from the thread-local RNG. Not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl EntropySource for ThreadRngEntropy {
    fn sample(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Always returns the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEntropy(f64);

impl FixedEntropy {
    /// Creates a fixed source. The value is clamped into `[0, 1)`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        };
        Self(value)
    }

    /// A source that always returns `0.0`.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0.0)
    }
}

impl EntropySource for FixedEntropy {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// A reproducible sequence seeded from a `u64`.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    /// Creates a sequence from `seed`. Two sources with the same seed yield
    /// the same samples in the same order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn sample(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f64>()
    }
}
