//! Player identification, per-player storage, and player pieces.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Turn order follows seat order.
//!
//! ## PlayerMap
//!
//! Seat-ordered storage, one entry per player, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Seat number in turn order; `PlayerId(0)` rolls first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position of this seat in turn order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// One entry per seat, indexed by `PlayerId`.
///
/// Built by collecting one value per seat in turn order. Two seats fit
/// inline without a heap allocation.
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut squares: PlayerMap<u32> = [1, 1].into_iter().collect();
/// squares[PlayerId::new(1)] = 14;
/// assert_eq!(squares.as_slice(), &[1, 14]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    seats: SmallVec<[T; 2]>,
}

impl<T> PlayerMap<T> {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Seats paired with their ids, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, value)| (PlayerId(seat as u8), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.seats
    }
}

impl<T> FromIterator<T> for PlayerMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let seats: SmallVec<[T; 2]> = iter.into_iter().collect();
        assert!(
            (1..=usize::from(u8::MAX)).contains(&seats.len()),
            "Player count must be 1-255"
        );
        Self { seats }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}

/// Display attributes for one seat. Opaque to the rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSeat {
    /// Display label, unique within a game.
    pub name: String,
    /// Piece color, e.g. `#e87a41`.
    pub color: String,
}

impl PlayerSeat {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A player's piece on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: String,
    /// Current square, 1 = start.
    pub position: u32,
}

impl Player {
    /// Place a fresh piece for `seat` on the start square.
    #[must_use]
    pub fn at_start(seat: &PlayerSeat) -> Self {
        Self {
            name: seat.name.clone(),
            color: seat.color.clone(),
            position: 1,
        }
    }
}
