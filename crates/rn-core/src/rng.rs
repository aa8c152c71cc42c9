//! Seedable RNG for the pipeline's one random decision.
//!
//! Task-edge sampling is the only non-deterministic step of a run.  Library
//! code never reaches for a global RNG: it takes `&mut impl rand::Rng`, and
//! the driver passes a `SelectionRng`.  A fixed seed reproduces a run
//! exactly; without one the generator is seeded from OS entropy.

use rand::rngs::SmallRng;
use rand::{Error, RngCore, SeedableRng};

/// Run-level RNG handed to the task-edge selector.
///
/// Implements [`RngCore`], so it can be passed anywhere a `rand::Rng` is
/// expected.
pub struct SelectionRng {
    inner: SmallRng,
    seed:  Option<u64>,
}

impl SelectionRng {
    /// Deterministic generator; the same seed always yields the same draws.
    pub fn new(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed), seed: Some(seed) }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self { inner: SmallRng::from_entropy(), seed: None }
    }

    /// `new(seed)` when a seed is given, `from_entropy()` otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// The seed this generator was created with, if any.  Logged by the
    /// driver so an unseeded run can still be described.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for SelectionRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
