//! Construction-time error types.
//!
//! Rolling and resetting never fail. Only building a board layout or a
//! session configuration can, and both are checked once up front.

use derive_more::{Display, Error, From};

/// A ladder/snake layout that breaks the board invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Grid dimension of zero, or too large to number its squares.
    #[display("Board size {size} is not supported")]
    InvalidSize { size: usize },

    /// A ladder or snake endpoint lies off the board.
    #[display("Square {square} is outside 1..={square_count}")]
    SquareOutOfRange { square: u32, square_count: u32 },

    /// Ladder top is not above its base.
    #[display("Ladder {base}->{top} does not climb")]
    LadderNotAscending { base: u32, top: u32 },

    /// Snake tail is not below its head.
    #[display("Snake {head}->{tail} does not descend")]
    SnakeNotDescending { head: u32, tail: u32 },

    /// The same square is listed twice as a ladder base or snake head.
    #[display("Square {square} is listed twice")]
    DuplicateSpecial { square: u32 },

    /// A square is both a ladder base and a snake head.
    #[display("Square {square} is both a ladder base and a snake head")]
    ConflictingSpecial { square: u32 },
}

/// An invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ConfigError {
    #[display("Expected {expected} players, found {found}")]
    WrongPlayerCount { expected: usize, found: usize },

    #[display("Player {index} has an empty name")]
    EmptyName { index: usize },

    #[display("Player name {name:?} is used more than once")]
    DuplicateName { name: String },

    #[display("Invalid board layout: {_0}")]
    #[from]
    Board(#[error(source)] BoardError),
}
