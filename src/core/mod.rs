//! Core types: players, dice, configuration, errors.
//!
//! Nothing here knows about ladders, snakes, or turns. The game module
//! builds the rules on top of these.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap, PlayerSeat};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice, DIE_SIDES};
pub use config::{SessionConfig, PLAYER_COLORS, PLAYER_COUNT};
pub use error::{BoardError, ConfigError};
