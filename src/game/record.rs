//! Structured roll results and their narration.

use serde::{Deserialize, Serialize};

use crate::board::{BoardLayout, Special};
use crate::core::PlayerId;

/// Where a roll took the active piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Roll would pass the last square; the piece stays put.
    Blocked { at: u32 },
    /// Plain move onto an ordinary square.
    Moved { from: u32, to: u32 },
    /// Landed on a ladder base and climbed.
    Ladder { from: u32, base: u32, top: u32 },
    /// Landed on a snake head and slid down.
    Snake { from: u32, head: u32, tail: u32 },
}

impl MoveOutcome {
    /// Resolve a roll of `roll` from `from` on `layout`.
    ///
    /// At most one ladder or snake is applied; its destination is not
    /// checked again.
    #[must_use]
    pub fn resolve(layout: &BoardLayout, from: u32, roll: u8) -> Self {
        let landed = from + u32::from(roll);
        if landed > layout.square_count() {
            return MoveOutcome::Blocked { at: from };
        }

        match layout.special_at(landed) {
            Some(Special::Ladder { top }) => MoveOutcome::Ladder {
                from,
                base: landed,
                top,
            },
            Some(Special::Snake { tail }) => MoveOutcome::Snake {
                from,
                head: landed,
                tail,
            },
            None => MoveOutcome::Moved { from, to: landed },
        }
    }

    /// Square the piece occupies once the roll is applied.
    #[must_use]
    pub fn final_position(self) -> u32 {
        match self {
            MoveOutcome::Blocked { at } => at,
            MoveOutcome::Moved { to, .. } => to,
            MoveOutcome::Ladder { top, .. } => top,
            MoveOutcome::Snake { tail, .. } => tail,
        }
    }

    /// Square the piece started the roll on.
    #[must_use]
    pub fn start_position(self) -> u32 {
        match self {
            MoveOutcome::Blocked { at } => at,
            MoveOutcome::Moved { from, .. }
            | MoveOutcome::Ladder { from, .. }
            | MoveOutcome::Snake { from, .. } => from,
        }
    }
}

/// One applied roll, as kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub roll: u8,
    pub outcome: MoveOutcome,
    /// This roll finished the game.
    pub won: bool,
}

impl TurnRecord {
    /// Human-readable account of the roll for `name`.
    #[must_use]
    pub fn narrate(&self, name: &str) -> String {
        let mut msg = format!("{name} rolled a {}.", self.roll);

        match self.outcome {
            MoveOutcome::Blocked { .. } => {
                msg.push_str(" Cannot move. Needs exact roll to finish.");
            }
            MoveOutcome::Moved { from, to } => {
                msg.push_str(&format!(" Moves from {from} to {to}."));
            }
            MoveOutcome::Ladder { from, base, top } => {
                msg.push_str(&format!(
                    " Moves from {from} to {base}. Ladder up from {base} to {top}!"
                ));
            }
            MoveOutcome::Snake { from, head, tail } => {
                msg.push_str(&format!(
                    " Moves from {from} to {head}. Oh no, snake down from {head} to {tail}."
                ));
            }
        }

        if self.won {
            msg.push_str(&format!(" \u{1F389} {name} WINS!"));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: MoveOutcome, roll: u8, won: bool) -> TurnRecord {
        TurnRecord {
            player: PlayerId::new(0),
            roll,
            outcome,
            won,
        }
    }

    #[test]
    fn test_resolve_plain_move() {
        let outcome = MoveOutcome::resolve(BoardLayout::classic(), 1, 4);
        assert_eq!(outcome, MoveOutcome::Moved { from: 1, to: 5 });
        assert_eq!(outcome.final_position(), 5);
        assert_eq!(outcome.start_position(), 1);
    }

    #[test]
    fn test_resolve_ladder_and_snake() {
        let board = BoardLayout::classic();

        let ladder = MoveOutcome::resolve(board, 1, 3);
        assert_eq!(ladder, MoveOutcome::Ladder { from: 1, base: 4, top: 14 });
        assert_eq!(ladder.final_position(), 14);

        let snake = MoveOutcome::resolve(board, 15, 2);
        assert_eq!(snake, MoveOutcome::Snake { from: 15, head: 17, tail: 7 });
        assert_eq!(snake.final_position(), 7);
    }

    #[test]
    fn test_resolve_overshoot_and_exact_finish() {
        let board = BoardLayout::classic();

        assert_eq!(MoveOutcome::resolve(board, 97, 6), MoveOutcome::Blocked { at: 97 });
        assert_eq!(
            MoveOutcome::resolve(board, 94, 6),
            MoveOutcome::Moved { from: 94, to: 100 }
        );
    }

    #[test]
    fn test_resolve_single_hop() {
        // Ladder top sits on a snake head; the snake is not taken.
        let board = BoardLayout::new(10, [(5, 30)], [(30, 2)]).unwrap();
        let outcome = MoveOutcome::resolve(&board, 1, 4);
        assert_eq!(outcome.final_position(), 30);
    }

    #[test]
    fn test_narration() {
        let plain = record(MoveOutcome::Moved { from: 1, to: 5 }, 4, false);
        assert_eq!(plain.narrate("Ada"), "Ada rolled a 4. Moves from 1 to 5.");

        let blocked = record(MoveOutcome::Blocked { at: 97 }, 6, false);
        assert_eq!(
            blocked.narrate("Ada"),
            "Ada rolled a 6. Cannot move. Needs exact roll to finish."
        );

        let ladder = record(MoveOutcome::Ladder { from: 1, base: 4, top: 14 }, 3, false);
        assert!(ladder.narrate("Ada").ends_with("Ladder up from 4 to 14!"));

        let snake = record(MoveOutcome::Snake { from: 15, head: 17, tail: 7 }, 2, false);
        assert!(snake.narrate("Ada").ends_with("Oh no, snake down from 17 to 7."));
    }

    #[test]
    fn test_narration_win() {
        let win = record(MoveOutcome::Moved { from: 94, to: 100 }, 6, true);
        assert_eq!(
            win.narrate("Ada"),
            "Ada rolled a 6. Moves from 94 to 100. \u{1F389} Ada WINS!"
        );
    }
}
