use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::errors::EngineError;

/// Supplier of uniformly distributed values for the shuffle.
///
/// The shuffle never reaches for a global generator; whoever constructs the
/// game decides where randomness comes from. Swapping the implementation for
/// a committed/verifiable randomness feed requires no change to shuffle
/// logic.
pub trait EntropySource {
    /// Draw a uniformly distributed value in `[0, upper]` inclusive.
    ///
    /// Fails with [`EngineError::EntropyExhausted`] if the source cannot
    /// supply another value.
    fn draw(&mut self, upper: u64) -> Result<u64, EngineError>;
}

/// ChaCha20-backed entropy source.
///
/// Seedable for reproducible games; OS-seeded for live play where the
/// permutation must be unpredictable ahead of use.
#[derive(Debug, Clone)]
pub struct ChaChaEntropy {
    rng: ChaCha20Rng,
}

impl ChaChaEntropy {
    /// Deterministic source: the same seed yields the same draw sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating-system entropy.
    pub fn from_os() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }
}

impl EntropySource for ChaChaEntropy {
    fn draw(&mut self, upper: u64) -> Result<u64, EngineError> {
        Ok(self.rng.random_range(0..=upper))
    }
}

/// Entropy source backed by a fixed tape of pre-committed values.
///
/// Each draw consumes one tape entry, reduced into the requested range; a
/// draw past the end of the tape fails with
/// [`EngineError::EntropyExhausted`]. This is the shape an externally
/// committed randomness feed takes, and the way tests provoke exhaustion.
#[derive(Debug, Clone)]
pub struct TapeEntropy {
    values: Vec<u64>,
    cursor: usize,
}

impl TapeEntropy {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Tape entries not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.cursor)
    }
}

impl EntropySource for TapeEntropy {
    fn draw(&mut self, upper: u64) -> Result<u64, EngineError> {
        let v = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(EngineError::EntropyExhausted { upper })?;
        self.cursor += 1;
        if upper == u64::MAX {
            Ok(v)
        } else {
            Ok(v % (upper + 1))
        }
    }
}
