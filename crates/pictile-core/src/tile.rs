//! Tiles and their identities.

use std::fmt::{self, Display};

use crate::Position;

/// A tile's identity: the scan-order index of its solved cell.
///
/// Ids are assigned at board construction as `y * columns + x` of the cell
/// each tile starts on and never change afterwards. A board is solved when
/// every tile's id equals the scan-order index of the cell it currently
/// occupies.
///
/// # Examples
///
/// ```
/// use pictile_core::{Position, TileId};
///
/// let id = TileId::from_solved(Position::new(2, 1), 3);
/// assert_eq!(id.value(), 5);
/// assert_eq!(id.solved_position(3), Position::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u16);

impl TileId {
    /// Creates a tile id from its raw scan-order index.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Creates the id of the tile whose solved cell is `position` on a
    /// board `columns` cells wide.
    #[must_use]
    pub fn from_solved(position: Position, columns: u8) -> Self {
        Self(u16::from(position.y()) * u16::from(columns) + u16::from(position.x()))
    }

    /// Returns the raw scan-order index.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the solved cell of this id on a board `columns` cells wide.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero or the id lies beyond the last row
    /// representable on a board of that width.
    #[must_use]
    pub fn solved_position(self, columns: u8) -> Position {
        assert!(columns > 0, "columns must be positive");
        let columns = u16::from(columns);
        let (x, y) = (self.0 % columns, self.0 / columns);
        assert!(
            y <= u16::from(u8::MAX),
            "tile id {id} does not fit a board {columns} cells wide",
            id = self.0,
        );
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (x as u8, y as u8);
        Position::new(x, y)
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<TileId> for u16 {
    fn from(id: TileId) -> u16 {
        id.value()
    }
}

/// A puzzle tile: an immutable identity and source cell plus the cell it
/// currently occupies.
///
/// `source` names the cell of the source artwork this tile displays and
/// equals the tile's solved cell; renderers use it to pick the image
/// sub-rectangle. The current `position` changes only through [`Grid`]
/// operations.
///
/// [`Grid`]: crate::Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    position: Position,
    source: Position,
}

impl Tile {
    pub(crate) const fn new(id: TileId, position: Position, source: Position) -> Self {
        Self {
            id,
            position,
            source,
        }
    }

    /// Returns the tile's identity.
    #[must_use]
    pub const fn id(self) -> TileId {
        self.id
    }

    /// Returns the cell the tile currently occupies.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the source-artwork cell the tile displays.
    #[must_use]
    pub const fn source(self) -> Position {
        self.source
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_solved_position() {
        for columns in 1..=5u8 {
            for value in 0..30u16 {
                let id = TileId::new(value);
                let pos = id.solved_position(columns);
                assert_eq!(TileId::from_solved(pos, columns), id);
            }
        }
    }

    #[test]
    fn test_id_scan_order() {
        // Width 4: id 0 is the origin, id 4 starts the second row.
        assert_eq!(TileId::new(0).solved_position(4), Position::new(0, 0));
        assert_eq!(TileId::new(3).solved_position(4), Position::new(3, 0));
        assert_eq!(TileId::new(4).solved_position(4), Position::new(0, 1));
        assert_eq!(TileId::new(11).solved_position(4), Position::new(3, 2));
    }

    #[test]
    fn test_display_and_conversion() {
        let id = TileId::new(12);
        assert_eq!(format!("{id}"), "12");
        assert_eq!(u16::from(id), 12);
        assert!(TileId::new(3) < TileId::new(4));
    }

    #[test]
    #[should_panic(expected = "columns must be positive")]
    fn test_solved_position_rejects_zero_columns() {
        let _ = TileId::new(0).solved_position(0);
    }

    #[test]
    #[should_panic(expected = "does not fit a board")]
    fn test_solved_position_rejects_overflowing_row() {
        let _ = TileId::new(u16::MAX).solved_position(1);
    }

    #[test]
    fn test_tile_accessors() {
        let tile = Tile::new(TileId::new(5), Position::new(0, 1), Position::new(2, 1));
        assert_eq!(tile.id(), TileId::new(5));
        assert_eq!(tile.position(), Position::new(0, 1));
        assert_eq!(tile.source(), Position::new(2, 1));
    }
}
