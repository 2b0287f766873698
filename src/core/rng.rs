//! Dice sources: a seedable production RNG and a scripted replay source.
//!
//! The state machine draws every roll through [`DiceSource`], so tests can
//! swap in a [`ScriptedDice`] and replay an exact game.
//!
//! ```
//! use snakes_ladders::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_roll(), b.next_roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Faces on the game die.
pub const DIE_SIDES: u8 = 6;

/// Source of die rolls for the state machine.
pub trait DiceSource {
    /// Draw the next roll, a value in `1..=DIE_SIDES`.
    fn next_roll(&mut self) -> u8;
}

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an RNG seeded from the thread-local generator.
    ///
    /// The chosen seed is still recorded, so `state()` can capture it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a die with `sides` faces, uniform in `1..=sides`.
    pub fn roll_die(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn next_roll(&mut self) -> u8 {
        self.roll_die(DIE_SIDES)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many rolls have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed roll sequence, wrapping around at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a scripted source.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` is empty or holds a value outside `1..=DIE_SIDES`.
    pub fn new(rolls: &[u8]) -> Self {
        assert!(!rolls.is_empty(), "Scripted dice need at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=DIE_SIDES).contains(r)),
            "Scripted rolls must be in 1..={DIE_SIDES}"
        );
        Self {
            rolls: rolls.to_vec(),
            cursor: 0,
        }
    }

    /// Number of rolls drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn next_roll(&mut self) -> u8 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
