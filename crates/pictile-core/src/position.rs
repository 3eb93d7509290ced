//! Board cell coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a puzzle board.
///
/// Positions are plain `(x, y)` pairs with no knowledge of board bounds;
/// whether a position lies on a particular board is a [`Grid`] concern.
///
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use pictile_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.to_string(), "(2, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from `x` and `y` cell coordinates.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the Manhattan distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictile_core::Position;
    ///
    /// let pos = Position::new(1, 1);
    /// assert_eq!(pos.manhattan_distance(Position::new(1, 1)), 0);
    /// assert_eq!(pos.manhattan_distance(Position::new(2, 1)), 1);
    /// assert_eq!(pos.manhattan_distance(Position::new(3, 0)), 3);
    /// ```
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u16 {
        u16::from(self.x.abs_diff(other.x)) + u16::from(self.y.abs_diff(other.y))
    }

    /// Returns whether `other` is orthogonally adjacent to this cell.
    ///
    /// Adjacency means Manhattan distance exactly 1, so a cell is never
    /// adjacent to itself and diagonal neighbors do not count.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.x(), 3);
        assert_eq!(pos.y(), 7);
        assert_eq!(pos, Position::new(3, 7));
        assert_ne!(pos, Position::new(7, 3));
        assert_eq!(format!("{pos}"), "(3, 7)");
    }

    #[test]
    fn test_manhattan_distance_is_symmetric() {
        let a = Position::new(0, 0);
        let b = Position::new(255, 255);
        assert_eq!(a.manhattan_distance(b), 510);
        assert_eq!(b.manhattan_distance(a), 510);
    }

    #[test]
    fn test_adjacency() {
        let center = Position::new(1, 1);

        // Orthogonal neighbors are adjacent
        assert!(center.is_adjacent(Position::new(0, 1)));
        assert!(center.is_adjacent(Position::new(2, 1)));
        assert!(center.is_adjacent(Position::new(1, 0)));
        assert!(center.is_adjacent(Position::new(1, 2)));

        // The cell itself and diagonal neighbors are not
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Position::new(0, 0)));
        assert!(!center.is_adjacent(Position::new(2, 2)));

        // Nor is anything further away
        assert!(!center.is_adjacent(Position::new(3, 1)));
    }
}
