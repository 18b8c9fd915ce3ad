// SPDX-License-Identifier: MPL-2.0
//! Randomness seam for stage and reveal delays.
//!
//! The sequencer never reaches for a global RNG. It asks a [`Jitter`] for a
//! value inside a range, so tests can swap in [`FixedJitter`] or a closure
//! and get exact, repeatable timings.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of values for randomized delays and progress steps.
pub trait Jitter {
    /// Returns a value in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn pick(&mut self, lo: u64, hi: u64) -> u64;
}

impl<F> Jitter for F
where
    F: FnMut(u64, u64) -> u64,
{
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        self(lo, hi)
    }
}

/// Uniform jitter backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic jitter for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Jitter for RandomJitter {
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        if lo >= hi {
            lo
        } else {
            self.rng.gen_range(lo..=hi)
        }
    }
}

/// Jitter that always picks the same position inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixedJitter {
    #[default]
    Lowest,
    Midpoint,
    Highest,
}

impl Jitter for FixedJitter {
    fn pick(&mut self, lo: u64, hi: u64) -> u64 {
        match self {
            FixedJitter::Lowest => lo,
            FixedJitter::Midpoint => lo + (hi - lo) / 2,
            FixedJitter::Highest => hi,
        }
    }
}
