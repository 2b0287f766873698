//! Game rules: the session aggregate and the state machine that drives it.
//!
//! The state machine never looks at board geometry; it only needs the
//! layout's ladders, snakes and square count.

mod engine;
mod record;
mod session;

pub use engine::SnakesAndLadders;
pub use record::{MoveOutcome, TurnRecord};
pub use session::{GameSession, GameStatus, RESET_MESSAGE, WELCOME_MESSAGE};
