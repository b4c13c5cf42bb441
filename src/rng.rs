//! Small seeded generator for shuffling patterns. Not cryptographic.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// Seeded `SmallRng`; the same seed always yields the same draws.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: SmallRng,
}

impl ShuffleRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed) }
    }

    /// Seeds from the browser: crypto RNG with the `rng` feature, otherwise the
    /// high-resolution clock.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform index in `0..len`; `0` when `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            log::warn!("getrandom failed ({err}), seeding from the clock");
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

fn clock_seed() -> u64 {
    // performance.now() has sub-millisecond precision; keep the fraction.
    (crate::performance_now() * 1_000.0) as u64
}
