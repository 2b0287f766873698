//! # snakes-ladders
//!
//! Rules engine for a two-player Snakes and Ladders game.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: Drawing squares, pieces and page chrome belongs to the
//!    host. The host calls the commands, then reads the session.
//!
//! 2. **One owner**: `SnakesAndLadders` owns the `GameSession`. Everything
//!    else gets shared references.
//!
//! 3. **Injected dice**: Rolls come from a `DiceSource`, so a scripted
//!    sequence can replay any game exactly.
//!
//! ## Modules
//!
//! - `core`: players, dice sources, configuration, errors
//! - `board`: validated ladder/snake layout and square/cell geometry
//! - `game`: session state, roll records, and the state machine
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{GameStatus, SessionConfig, SnakesAndLadders};
//!
//! let mut game = SnakesAndLadders::new(SessionConfig::new().with_seed(7)).unwrap();
//! while game.status() == GameStatus::Playing {
//!     game.roll_dice();
//! }
//! let winner = game.session().winner().unwrap();
//! assert_eq!(game.players()[winner].position, 100);
//! ```

pub mod core;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardError, ConfigError, DiceSource, GameRng, GameRngState, Player, PlayerId, PlayerMap,
    PlayerSeat, ScriptedDice, SessionConfig,
};

pub use crate::board::{
    coordinates_to_square, square_to_coordinates, BoardGeometry, BoardLayout, Cell, Special,
};

pub use crate::game::{GameSession, GameStatus, MoveOutcome, SnakesAndLadders, TurnRecord};
