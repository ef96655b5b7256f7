use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index picker. Seeded once; every draw advances the same generator,
/// so a given seed always produces the same sequence.
#[derive(Debug, Clone)]
pub struct Selector {
    rng: StdRng,
}

impl Selector {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw an index in `0..len`, or `None` for an empty catalog.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
