// src/random/mod.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform random index source backing password generation.
///
/// Prefers the OS CSPRNG. If the OS entropy source cannot be read at
/// construction time, falls back to a time-seeded ChaCha20 stream. The
/// fallback is a documented weaker guarantee, not an error; callers can
/// inspect [`RandomSource::is_csprng`] if they care.
pub enum RandomSource {
    Os(OsRng),
    Fallback(ChaCha20Rng),
}

impl RandomSource {
    pub fn new() -> Self {
        let mut probe = [0u8; 8];
        match OsRng.try_fill_bytes(&mut probe) {
            Ok(()) => RandomSource::Os(OsRng),
            Err(e) => {
                log::warn!("OS entropy source unavailable ({e}), falling back to time-seeded PRNG");
                let seed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |d| d.as_nanos() as u64);
                RandomSource::Fallback(ChaCha20Rng::seed_from_u64(seed))
            }
        }
    }

    /// True when indices come from the OS CSPRNG rather than the fallback.
    pub fn is_csprng(&self) -> bool {
        matches!(self, RandomSource::Os(_))
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    ///
    /// `gen_range` rejection-samples internally, so there is no modulo bias.
    pub fn index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.gen_range(0..bound)
    }

    /// Fisher-Yates shuffle, each of the `n!` orderings equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            RandomSource::Os(rng) => items.shuffle(rng),
            RandomSource::Fallback(rng) => items.shuffle(rng),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            RandomSource::Os(rng) => rng.next_u32(),
            RandomSource::Fallback(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            RandomSource::Os(rng) => rng.next_u64(),
            RandomSource::Fallback(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            RandomSource::Os(rng) => rng.fill_bytes(dest),
            RandomSource::Fallback(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match self {
            RandomSource::Os(rng) => rng.try_fill_bytes(dest),
            RandomSource::Fallback(rng) => rng.try_fill_bytes(dest),
        }
    }
}
