use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random choice a generator makes.
///
/// Generators never reach for a global RNG; they take one of these so a
/// fixed seed (or a scripted mock in tests) pins the output down.
pub trait RandomSource {
    /// Uniform integer in `low..=high`, both ends inclusive.
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// Pick one element of a non-empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[rng.index(items.len())]
}

/// `RandomSource` backed by the standard seedable RNG.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Reproducible stream: same seed, same output.
    pub fn from_seed(seed: u64) -> Self {
        debug!("[-] seeding random source with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
