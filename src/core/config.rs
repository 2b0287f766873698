//! Session configuration.
//!
//! Hosts configure a session at startup by providing:
//! - the seats (name and color, in turn order)
//! - the board layout
//! - an optional dice seed
//!
//! `validate()` runs once, before any state exists.

use rustc_hash::FxHashSet;

use super::error::ConfigError;
use super::player::PlayerSeat;
use crate::board::BoardLayout;

/// Seats per game.
pub const PLAYER_COUNT: usize = 2;

/// Piece colors for the default seats.
pub const PLAYER_COLORS: [&str; PLAYER_COUNT] = ["#e87a41", "#22b8cf"];

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seats in turn order.
    pub seats: Vec<PlayerSeat>,

    /// Ladders, snakes and grid size.
    pub layout: BoardLayout,

    /// Dice seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seats: PLAYER_COLORS
                .iter()
                .enumerate()
                .map(|(i, color)| PlayerSeat::new(format!("Player {}", i + 1), *color))
                .collect(),
            layout: BoardLayout::classic().clone(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Classic board, two default seats, entropy-seeded dice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the seats.
    #[must_use]
    pub fn with_seats(mut self, seats: impl IntoIterator<Item = PlayerSeat>) -> Self {
        self.seats = seats.into_iter().collect();
        self
    }

    /// Use a custom board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Seed the dice for a reproducible session.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the seats.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the seat count is not [`PLAYER_COUNT`],
    /// or a name is empty or repeated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats.len() != PLAYER_COUNT {
            return Err(ConfigError::WrongPlayerCount {
                expected: PLAYER_COUNT,
                found: self.seats.len(),
            });
        }

        let mut names = FxHashSet::default();
        for (index, seat) in self.seats.iter().enumerate() {
            if seat.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !names.insert(seat.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: seat.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::new();

        assert_eq!(config.seats.len(), 2);
        assert_eq!(config.seats[0], PlayerSeat::new("Player 1", "#e87a41"));
        assert_eq!(config.seats[1], PlayerSeat::new("Player 2", "#22b8cf"));
        assert_eq!(&config.layout, BoardLayout::classic());
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let layout = BoardLayout::new(5, [(3, 12)], [(20, 2)]).unwrap();
        let config = SessionConfig::new()
            .with_seats([PlayerSeat::new("Ada", "red"), PlayerSeat::new("Grace", "blue")])
            .with_layout(layout.clone())
            .with_seed(9);

        assert_eq!(config.seats[1].name, "Grace");
        assert_eq!(config.layout, layout);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wrong_player_count() {
        let config = SessionConfig::new().with_seats([PlayerSeat::new("Solo", "red")]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::WrongPlayerCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_and_duplicate_names() {
        let config = SessionConfig::new()
            .with_seats([PlayerSeat::new("Ada", "red"), PlayerSeat::new("  ", "blue")]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyName { index: 1 }));

        let config = SessionConfig::new()
            .with_seats([PlayerSeat::new("Ada", "red"), PlayerSeat::new("Ada", "blue")]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateName {
                name: "Ada".to_string()
            })
        );
    }
}
