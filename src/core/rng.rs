//! Dice sources.
//!
//! The die roll is the only non-deterministic input to the engine, so it sits
//! behind the `DiceSource` trait:
//!
//! - `GameRng`: ChaCha8-backed, deterministic for a given seed
//! - `ScriptedDice`: replays a fixed sequence (tests, replays)
//!
//! ```
//! use ludo_engine::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same rolls
//! for _ in 0..20 {
//!     assert_eq!(a.roll(), b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::DIE_FACES;

/// Anything that can produce a die value in `1..=6`.
pub trait DiceSource {
    /// Roll the die once.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Deterministic RNG for dice rolls.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.gen_range(1..=DIE_FACES)
    }
}

/// Dice that cycle through a fixed sequence.
///
/// ```
/// use ludo_engine::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 2]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 2);
/// assert_eq!(dice.roll(), 6); // wraps around
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create scripted dice from a non-empty sequence of values in `1..=6`.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: Vec<u8> = values.into_iter().collect();
        assert!(!values.is_empty(), "Scripted dice need at least one value");
        assert!(
            values.iter().all(|v| (1..=DIE_FACES).contains(v)),
            "Die values must be in 1..=6"
        );
        Self { values, next: 0 }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
