//! Slide directions and the cells they move.

use crate::Position;

/// A direction a tile can slide in.
///
/// Directions name the tile's motion, not the hole's: sliding [`Left`] moves
/// the tile on the **right** side of the empty cell one cell to the left,
/// into the hole. [`tile_position`] resolves a direction to the cell the
/// moving tile currently occupies.
///
/// [`Left`]: Direction::Left
/// [`tile_position`]: Direction::tile_position
///
/// # Examples
///
/// ```
/// use pictile_core::{Direction, Position};
///
/// // The hole is at (1, 1); the tile at (2, 1) slides left into it.
/// let empty = Position::new(1, 1);
/// assert_eq!(Direction::Left.tile_position(empty), (2, 1));
/// assert_eq!(Direction::Up.tile_position(empty), (1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slide the tile right of the empty cell one cell to the left.
    Left,
    /// Slide the tile left of the empty cell one cell to the right.
    Right,
    /// Slide the tile below the empty cell one cell up.
    Up,
    /// Slide the tile above the empty cell one cell down.
    Down,
}

impl Direction {
    /// Array containing all four directions.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the offset from the empty cell to the sliding tile's cell.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (1, 0),
            Self::Right => (-1, 0),
            Self::Up => (0, 1),
            Self::Down => (0, -1),
        }
    }

    /// Returns the raw coordinates of the cell whose tile would slide in
    /// this direction, given the current empty cell.
    ///
    /// The result may lie outside the board (negative, or past the far
    /// edge); callers bounds-check it, typically with [`Grid::position`].
    ///
    /// [`Grid::position`]: crate::Grid::position
    #[must_use]
    pub fn tile_position(self, empty: Position) -> (i32, i32) {
        let (dx, dy) = self.offset();
        (i32::from(empty.x()) + dx, i32::from(empty.y()) + dy)
    }
}
