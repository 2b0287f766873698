//! Game session: the single mutable aggregate behind the state machine.
//!
//! ## GameSession
//!
//! Observable by the presentation layer:
//! - Player pieces (name, color, square)
//! - Whose turn it is and the last roll
//! - Status, including the winner once the game ends
//! - Latest narration and the roll history
//!
//! Fields are private. Only [`SnakesAndLadders`](super::SnakesAndLadders)
//! mutates a session.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::TurnRecord;
use crate::core::{Player, PlayerId, PlayerMap, PlayerSeat};

/// Shown when a session is first created.
pub const WELCOME_MESSAGE: &str = "Welcome to Snakes and Ladders Adventure!";

/// Shown after a reset.
pub const RESET_MESSAGE: &str = "Game reset. Good luck!";

/// Whether the game accepts rolls.
///
/// The winner lives inside `Ended`, so a finished game always has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Ended { winner: PlayerId },
}

/// Full observable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) turn: PlayerId,
    pub(crate) last_roll: Option<u8>,
    pub(crate) status: GameStatus,
    pub(crate) message: String,
    pub(crate) history: Vector<TurnRecord>,
}

impl GameSession {
    /// Fresh session: every piece on square 1, first seat to move.
    pub(crate) fn start(seats: &[PlayerSeat], message: &str) -> Self {
        Self {
            players: seats.iter().map(Player::at_start).collect(),
            turn: PlayerId::new(0),
            last_roll: None,
            status: GameStatus::Playing,
            message: message.to_string(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seat that acts next. Inert once the game has ended.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn.index()
    }

    /// Last roll, `None` before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Ended { winner } => Some(winner),
            GameStatus::Playing => None,
        }
    }

    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        self.winner().map(PlayerId::index)
    }

    /// Latest narration.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every applied roll since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Players whose piece sits on `square`, in seat order.
    pub fn occupants(&self, square: u32) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(move |(_, p)| p.position == square)
            .map(|(id, _)| id)
    }
}
