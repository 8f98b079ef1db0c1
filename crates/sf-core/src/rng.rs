//! Deterministic, explicitly seeded RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every simulator takes a `SimRng` (or a seed to build one) as a parameter;
//! nothing in the workspace reads a process-wide generator.  The pipeline
//! derives one child generator per stage from the master seed:
//!
//!   child_seed = parent.next_u64() XOR (stage_offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  Stage
//! seeds are drawn in a fixed order, so re-running one stage in isolation with
//! the same master seed reproduces the full-pipeline output for that stage.

use rand::distributions::WeightedIndex;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation RNG.  One instance per stage run; never shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, used to seed
    /// per-stage generators deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    ///
    /// # Panics
    /// Panics if `range` is empty, as `rand` does.  Use [`uniform`][Self::uniform]
    /// for float ranges that may come from configuration.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f64` in `[lo, hi)`.  Degenerate or inverted bounds return `lo`
    /// instead of panicking.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi > lo { self.0.gen_range(lo..hi) } else { lo }
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }

    /// Choose an index with probability proportional to `weights[i]`.
    ///
    /// Returns `None` if `weights` is empty, contains a negative value, or
    /// sums to zero.
    pub fn choose_weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.0))
    }
}
