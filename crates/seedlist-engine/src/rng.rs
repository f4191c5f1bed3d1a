// Run-scoped random source
//
// Randomness enters generation in exactly two places: the per-token method
// choice of `Random` and the placeholder values of `Custom`. Both draw from a
// `RunRng` owned by a single run; nothing touches a global generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seedlist_core::TransformMethod;

use crate::tables::{CUSTOM_NUMBER_MAX, CUSTOM_SYMBOLS};

/// Random source for one generation run.
pub struct RunRng {
    inner: ChaCha8Rng,
}

impl RunRng {
    /// Seeded source when `seed` is given, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self {
                inner: ChaCha8Rng::from_entropy(),
            },
        }
    }

    /// Deterministic source for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Value for a `[number]` placeholder, in `0..=999`.
    pub fn custom_number(&mut self) -> u16 {
        self.inner.gen_range(0..=CUSTOM_NUMBER_MAX)
    }

    /// Value for a `[symbol]` placeholder.
    pub fn custom_symbol(&mut self) -> char {
        CUSTOM_SYMBOLS[self.inner.gen_range(0..CUSTOM_SYMBOLS.len())]
    }

    /// One of the four deterministic methods, uniformly.
    pub fn concrete_method(&mut self) -> TransformMethod {
        match self.inner.gen_range(0..4u8) {
            0 => TransformMethod::Basic,
            1 => TransformMethod::Advanced,
            2 => TransformMethod::Complex,
            _ => TransformMethod::Leet,
        }
    }
}
