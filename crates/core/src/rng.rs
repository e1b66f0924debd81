//! RNG module - seedable random source for board generation
//!
//! Board generation takes any [`rand::Rng`], so callers can inject their own
//! source. Sessions use ChaCha8 seeded from a `u64`: the same seed always
//! produces the same sequence of boards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic random source used by game sessions.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy, remembering the drawn seed so the game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Borrow the underlying generator.
    pub fn inner_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.inner
    }
}

/// One Bernoulli trial on any random source.
///
/// `p == 0.0` is never lit and `p == 1.0` is always lit.
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}
