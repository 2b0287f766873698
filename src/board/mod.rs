//! Static board data and the square/cell mapping.
//!
//! Neither part depends on game state. The presentation layer reads the
//! layout for overlays and the geometry to place pieces.

pub mod geometry;
pub mod layout;

pub use geometry::{coordinates_to_square, square_to_coordinates, BoardGeometry, Cell};
pub use layout::{BoardLayout, Special, CLASSIC_LADDERS, CLASSIC_SIZE, CLASSIC_SNAKES};
