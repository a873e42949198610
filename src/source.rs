use std::fmt;

use rand::distributions::Distribution;

use crate::distribution::UniformReal;
use crate::mt::{self, Engine};

/// A seeded source of uniform doubles in `[0.0, 1.0)`.
///
/// Owns one MT19937-64 engine. Two sources built from the same seed produce
/// the same sequence. Drawing takes `&mut self`; a source shared between
/// threads must be wrapped in a lock by the caller.
#[derive(Clone)]
pub struct RandomSource {
    engine: Engine,
    dist: UniformReal,
    seed: u64,
    draws: u64,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        RandomSource {
            engine: mt::engine(seed),
            dist: UniformReal::UNIT,
            seed,
            draws: 0,
        }
    }

    /// The seed this source was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of engine outputs consumed so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Advances the engine and returns the next value in `[0.0, 1.0)`.
    pub fn next_value(&mut self) -> f64 {
        let dist = self.dist;
        self.sample(&dist)
    }

    /// Draws the next value from `dist` instead of the unit interval.
    pub fn sample(&mut self, dist: &UniformReal) -> f64 {
        self.draws += 1;
        dist.sample(&mut self.engine)
    }

    /// Fills `out` with successive draws, as if by repeated `next_value`.
    pub fn fill(&mut self, out: &mut [f64]) {
        for x in out.iter_mut() {
            *x = self.next_value();
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource::new(mt::DEFAULT_SEED)
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RandomSource")
            .field("seed", &self.seed)
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}

/// Never ends.
impl Iterator for RandomSource {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
