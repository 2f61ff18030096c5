//! RNG module - unbiased random piece generation
//!
//! Every draw is an independent, uniform choice among the seven kinds.
//! There is no bag and no history, matching the 1984 randomizer: droughts and
//! repeats are part of the game.
//!
//! Seeded generators are fully deterministic, which the tests and replays
//! rely on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: StdRng,
    seed: Option<u64>,
}

impl PieceRandomizer {
    /// Create a deterministic generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// The seed this generator was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
