//! Deterministic random number generation for reproducible training.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: Each self-play game gets an independent branch
//!
//! ## Usage
//!
//! ```
//! use chess_td::core::TrainRng;
//!
//! let mut rng = TrainRng::new(42);
//!
//! // Fork for one game
//! let game_rng = rng.fork();
//!
//! // Forks are deterministic: the same fork index yields the same stream
//! let mut rng2 = TrainRng::new(42);
//! assert_eq!(rng2.fork().seed(), game_rng.seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-game streams.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The training loop forks one branch per game so a game can be replayed
/// from its fork index without rerunning the games before it.
#[derive(Clone, Debug)]
pub struct TrainRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl TrainRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random f64 in the given half-open range.
    pub fn gen_range_f64(&mut self, range: std::ops::Range<f64>) -> f64 {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
