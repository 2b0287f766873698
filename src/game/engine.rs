//! The Snakes and Ladders state machine.
//!
//! Two states, `Playing` and `Ended`, and two commands:
//! - `roll_dice`: move the active piece, resolve one ladder or snake,
//!   check for a win, pass the turn
//! - `reset`: back to a fresh session with the same seats
//!
//! Rolling after the game has ended is ignored, not an error.

use tracing::{debug, info, instrument, trace};

use super::record::{MoveOutcome, TurnRecord};
use super::session::{GameSession, GameStatus, RESET_MESSAGE, WELCOME_MESSAGE};
use crate::board::BoardLayout;
use crate::core::{
    ConfigError, DiceSource, GameRng, Player, PlayerId, PlayerMap, PlayerSeat, SessionConfig,
    DIE_SIDES,
};

/// Owns a session and applies the rules to it.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{ScriptedDice, SessionConfig};
/// use snakes_ladders::game::SnakesAndLadders;
///
/// let dice = ScriptedDice::new(&[3]);
/// let mut game = SnakesAndLadders::with_dice(SessionConfig::new(), dice).unwrap();
/// game.roll_dice();
///
/// // Square 4 is a ladder base.
/// assert_eq!(game.session().players().as_slice()[0].position, 14);
/// assert_eq!(game.session().turn_index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SnakesAndLadders<D = GameRng> {
    layout: BoardLayout,
    seats: Vec<PlayerSeat>,
    session: GameSession,
    dice: D,
}

impl SnakesAndLadders<GameRng> {
    /// Build a game rolling a ChaCha8 die, seeded from `config.seed` or
    /// from entropy when unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the seats are invalid.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let dice = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_dice(config, dice)
    }

    /// Classic board, default seats, entropy-seeded dice.
    #[must_use]
    pub fn classic() -> Self {
        Self::assemble(SessionConfig::default(), GameRng::from_entropy())
    }
}

impl<D: DiceSource> SnakesAndLadders<D> {
    /// Build a game drawing rolls from `dice`. `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the seats are invalid.
    #[instrument(skip_all, fields(players = config.seats.len(), size = config.layout.size()))]
    pub fn with_dice(config: SessionConfig, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, dice))
    }

    fn assemble(config: SessionConfig, dice: D) -> Self {
        let session = GameSession::start(&config.seats, WELCOME_MESSAGE);
        Self {
            layout: config.layout,
            seats: config.seats,
            session,
            dice,
        }
    }

    // === Commands ===

    /// Roll for the active player and apply the result.
    ///
    /// Ignored once the game has ended.
    #[instrument(skip(self), fields(turn = self.session.turn.index()))]
    pub fn roll_dice(&mut self) -> &GameSession {
        if self.session.is_over() {
            trace!("roll ignored, game already ended");
            return &self.session;
        }

        let roll = self.dice.next_roll();
        debug_assert!((1..=DIE_SIDES).contains(&roll), "die rolled {roll}");

        let active = self.session.turn;
        let from = self.session.players[active].position;
        let outcome = MoveOutcome::resolve(&self.layout, from, roll);
        let position = outcome.final_position();
        let won = position == self.layout.square_count();

        self.session.players[active].position = position;
        if won {
            self.session.status = GameStatus::Ended { winner: active };
        } else {
            self.session.turn = active.next(self.session.player_count());
        }

        let record = TurnRecord {
            player: active,
            roll,
            outcome,
            won,
        };
        self.session.last_roll = Some(roll);
        self.session.message = record.narrate(&self.session.players[active].name);
        debug!(player = active.index(), roll, ?outcome, "roll applied");
        if won {
            info!(winner = active.index(), rolls = self.session.history.len() + 1, "game won");
        }
        self.session.history.push_back(record);

        &self.session
    }

    /// Start over with the same seats. Callable in any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameSession {
        self.session = GameSession::start(&self.seats, RESET_MESSAGE);
        info!("game reset");
        &self.session
    }

    // === Queries ===

    /// Current session state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Owned copy of the session. Cheap: the history is a persistent vector.
    #[must_use]
    pub fn snapshot(&self) -> GameSession {
        self.session.clone()
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        self.session.players()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Whether `player` acts next in a running game.
    #[must_use]
    pub fn is_current(&self, player: PlayerId) -> bool {
        !self.session.is_over() && self.session.turn == player
    }

    /// The injected dice source.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }
}
