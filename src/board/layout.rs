//! Board layout: grid size plus the ladder and snake tables.
//!
//! A layout is validated once when built and is immutable afterwards.
//! The classic layout is shared process-wide through [`BoardLayout::classic`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::geometry::BoardGeometry;
use crate::core::BoardError;

/// Grid dimension of the classic board.
pub const CLASSIC_SIZE: usize = 10;

/// Classic ladders as (base, top).
pub const CLASSIC_LADDERS: [(u32, u32); 8] = [
    (4, 14),
    (9, 31),
    (20, 38),
    (28, 84),
    (40, 59),
    (51, 67),
    (63, 81),
    (71, 91),
];

/// Classic snakes as (head, tail).
pub const CLASSIC_SNAKES: [(u32, u32); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 36),
    (93, 73),
    (95, 75),
    (99, 78),
];

/// What happens when a piece lands on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// Climb to `top`.
    Ladder { top: u32 },
    /// Slide down to `tail`.
    Snake { tail: u32 },
}

impl Special {
    /// Square the piece ends on after the hop.
    #[must_use]
    pub fn destination(self) -> u32 {
        match self {
            Special::Ladder { top } => top,
            Special::Snake { tail } => tail,
        }
    }
}

/// A validated square board with its ladders and snakes.
///
/// Deserializing goes through [`BoardLayout::new`], so a stored layout is
/// checked the same way as one built in code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct BoardLayout {
    size: usize,
    ladders: FxHashMap<u32, u32>,
    snakes: FxHashMap<u32, u32>,
}

/// Unchecked wire form of a layout.
#[derive(Deserialize)]
struct RawLayout {
    size: usize,
    #[serde(default)]
    ladders: FxHashMap<u32, u32>,
    #[serde(default)]
    snakes: FxHashMap<u32, u32>,
}

impl TryFrom<RawLayout> for BoardLayout {
    type Error = BoardError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.ladders, raw.snakes)
    }
}

impl BoardLayout {
    /// Build and validate a layout.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the size is zero or too large, an
    /// endpoint is off the board, a ladder does not climb, a snake does not
    /// descend, or a square carries more than one special.
    pub fn new(
        size: usize,
        ladders: impl IntoIterator<Item = (u32, u32)>,
        snakes: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self, BoardError> {
        let square_count = size
            .checked_mul(size)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|&n| n > 0)
            .ok_or(BoardError::InvalidSize { size })?;

        let in_range = |square: u32| {
            if (1..=square_count).contains(&square) {
                Ok(())
            } else {
                Err(BoardError::SquareOutOfRange {
                    square,
                    square_count,
                })
            }
        };

        let mut ladder_map = FxHashMap::default();
        for (base, top) in ladders {
            in_range(base)?;
            in_range(top)?;
            if top <= base {
                return Err(BoardError::LadderNotAscending { base, top });
            }
            if ladder_map.insert(base, top).is_some() {
                return Err(BoardError::DuplicateSpecial { square: base });
            }
        }

        let mut snake_map = FxHashMap::default();
        for (head, tail) in snakes {
            in_range(head)?;
            in_range(tail)?;
            if tail >= head {
                return Err(BoardError::SnakeNotDescending { head, tail });
            }
            if ladder_map.contains_key(&head) {
                return Err(BoardError::ConflictingSpecial { square: head });
            }
            if snake_map.insert(head, tail).is_some() {
                return Err(BoardError::DuplicateSpecial { square: head });
            }
        }

        Ok(Self {
            size,
            ladders: ladder_map,
            snakes: snake_map,
        })
    }

    /// The classic 10x10 layout.
    #[must_use]
    pub fn classic() -> &'static BoardLayout {
        static CLASSIC: OnceLock<BoardLayout> = OnceLock::new();
        CLASSIC.get_or_init(|| {
            Self::new(CLASSIC_SIZE, CLASSIC_LADDERS, CLASSIC_SNAKES)
                .expect("classic board layout is valid")
        })
    }

    /// Grid dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares; also the finishing square.
    #[must_use]
    pub fn square_count(&self) -> u32 {
        (self.size * self.size) as u32
    }

    /// Ladders keyed by base square.
    #[must_use]
    pub fn ladders(&self) -> &FxHashMap<u32, u32> {
        &self.ladders
    }

    /// Snakes keyed by head square.
    #[must_use]
    pub fn snakes(&self) -> &FxHashMap<u32, u32> {
        &self.snakes
    }

    /// The special on `square`, if any. Ladders are checked before snakes.
    #[must_use]
    pub fn special_at(&self, square: u32) -> Option<Special> {
        if let Some(&top) = self.ladders.get(&square) {
            Some(Special::Ladder { top })
        } else {
            self.snakes.get(&square).map(|&tail| Special::Snake { tail })
        }
    }

    /// Geometry mapper for this board's grid.
    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.size)
    }
}
