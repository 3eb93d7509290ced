//! The puzzle board: tile layout and the slide operation.

use std::fmt::{self, Display};

use crate::{Position, Tile, TileId};

/// Errors detected when constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The board must have at least one column and one row.
    #[display("board dimensions must be positive, got {columns}x{rows}")]
    ZeroDimension {
        /// Requested column count.
        columns: u8,
        /// Requested row count.
        rows: u8,
    },
    /// The designated empty cell must lie on the board.
    #[display("empty cell {empty} is outside the {columns}x{rows} board")]
    EmptyOutOfBounds {
        /// Requested empty cell.
        empty: Position,
        /// Requested column count.
        columns: u8,
        /// Requested row count.
        rows: u8,
    },
}

/// A sliding-tile board.
///
/// The board owns `columns * rows` tiles, one per cell, in row-major scan
/// order. Exactly one cell is designated **empty**: the tile occupying it
/// (the *empty tile*) marks the hole and is never drawn. Sliding swaps an
/// orthogonally adjacent tile with the hole; the empty tile otherwise
/// behaves like any other tile, which is what lets a finished board show
/// every tile on its solved cell, hole included.
///
/// Boards start solved via [`Grid::solved`]. Shufflers permute them with
/// [`Grid::swap_cells`] or sequences of legal [`Grid::slide`]s; play goes
/// through [`Grid::slide`] alone.
///
/// # Examples
///
/// ```
/// use pictile_core::{Grid, Position};
///
/// let mut grid = Grid::solved(3, 3, Position::new(2, 0)).unwrap();
/// assert!(grid.is_solved());
///
/// // Slide the tile left of the hole into it, then undo.
/// assert!(grid.slide(Position::new(1, 0)));
/// assert_eq!(grid.empty_position(), Position::new(1, 0));
/// assert!(!grid.is_solved());
/// assert!(grid.slide(Position::new(2, 0)));
/// assert!(grid.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: u8,
    rows: u8,
    /// One tile per cell, indexed by `y * columns + x`.
    tiles: Vec<Tile>,
    empty: Position,
}

impl Grid {
    /// Creates a solved board with the given dimensions and empty cell.
    ///
    /// Every tile starts on its solved cell, its id and source recording
    /// that cell for the rest of the board's life.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] if `columns` or `rows` is
    /// zero, and [`ConfigError::EmptyOutOfBounds`] if `empty` lies outside
    /// the board. No board is constructed in either case.
    pub fn solved(columns: u8, rows: u8, empty: Position) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::ZeroDimension { columns, rows });
        }
        if empty.x() >= columns || empty.y() >= rows {
            return Err(ConfigError::EmptyOutOfBounds {
                empty,
                columns,
                rows,
            });
        }

        let mut tiles = Vec::with_capacity(usize::from(columns) * usize::from(rows));
        for y in 0..rows {
            for x in 0..columns {
                let position = Position::new(x, y);
                let id = TileId::from_solved(position, columns);
                tiles.push(Tile::new(id, position, position));
            }
        }
        Ok(Self {
            columns,
            rows,
            tiles,
            empty,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> u16 {
        u16::from(self.columns) * u16::from(self.rows)
    }

    /// Returns the cell currently holding the hole.
    #[must_use]
    pub const fn empty_position(&self) -> Position {
        self.empty
    }

    /// Returns the empty tile, wherever it currently sits.
    ///
    /// Its id still names the hole's solved cell, which is how a shuffled
    /// board remembers where the hole belongs.
    #[must_use]
    pub fn empty_tile(&self) -> &Tile {
        &self.tiles[self.index(self.empty)]
    }

    /// Returns whether `position` lies on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x() < self.columns && position.y() < self.rows
    }

    /// Converts raw coordinates into an on-board position.
    ///
    /// Returns `None` for coordinates outside the board, including negative
    /// ones. This is the bounds filter for callers holding unchecked
    /// derived values, such as pointer math or directional offsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictile_core::{Grid, Position};
    ///
    /// let grid = Grid::solved(3, 3, Position::new(2, 0)).unwrap();
    /// assert_eq!(grid.position(1, 2), Some(Position::new(1, 2)));
    /// assert_eq!(grid.position(-1, 0), None);
    /// assert_eq!(grid.position(0, 3), None);
    /// ```
    #[must_use]
    pub fn position(&self, x: i32, y: i32) -> Option<Position> {
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        let position = Position::new(x, y);
        self.contains(position).then_some(position)
    }

    /// Returns the tile occupying `position`, or `None` if the position is
    /// off the board.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.contains(position)
            .then(|| &self.tiles[self.index(position)])
    }

    /// Returns the tiles in row-major scan order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Slides the tile at `target` into the empty cell.
    ///
    /// The move applies only when `target` is on the board and orthogonally
    /// adjacent to the empty cell; the tile and the hole then swap cells
    /// and the method returns `true`. Any other target, including the empty
    /// cell itself, leaves the board unchanged and returns `false`.
    pub fn slide(&mut self, target: Position) -> bool {
        if !self.contains(target) || !target.is_adjacent(self.empty) {
            return false;
        }
        self.swap_cells(target, self.empty);
        true
    }

    /// Swaps the tiles occupying cells `a` and `b`.
    ///
    /// The hole follows the empty tile: when either cell is the empty cell,
    /// the empty marker moves with it. Shufflers build arbitrary
    /// permutations out of this primitive; play goes through
    /// [`Grid::slide`], which adds the adjacency check.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` lies outside the board.
    pub fn swap_cells(&mut self, a: Position, b: Position) {
        assert!(
            self.contains(a),
            "cell {a} is outside the {columns}x{rows} board",
            columns = self.columns,
            rows = self.rows,
        );
        assert!(
            self.contains(b),
            "cell {b} is outside the {columns}x{rows} board",
            columns = self.columns,
            rows = self.rows,
        );

        let (ia, ib) = (self.index(a), self.index(b));
        self.tiles.swap(ia, ib);
        self.tiles[ia].set_position(a);
        self.tiles[ib].set_position(b);

        if self.empty == a {
            self.empty = b;
        } else if self.empty == b {
            self.empty = a;
        }
    }

    /// Returns whether every tile sits on its solved cell.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, tile)| usize::from(tile.id().value()) == i)
    }

    /// Counts the out-of-order id pairs in scan order, skipping the empty
    /// tile.
    ///
    /// A pair is out of order when a higher id precedes a lower one. The
    /// count feeds the solvability analysis of shuffled layouts; a solved
    /// board has zero inversions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictile_core::{Grid, Position};
    ///
    /// let mut grid = Grid::solved(3, 3, Position::new(2, 0)).unwrap();
    /// assert_eq!(grid.inversions(), 0);
    /// grid.swap_cells(Position::new(0, 0), Position::new(1, 0));
    /// assert_eq!(grid.inversions(), 1);
    /// ```
    #[must_use]
    pub fn inversions(&self) -> usize {
        let ids: Vec<u16> = self
            .tiles
            .iter()
            .filter(|tile| tile.position() != self.empty)
            .map(|tile| tile.id().value())
            .collect();
        ids.iter()
            .enumerate()
            .map(|(i, a)| ids[i + 1..].iter().filter(|&&b| b < *a).count())
            .sum()
    }

    fn index(&self, position: Position) -> usize {
        usize::from(position.y()) * usize::from(self.columns) + usize::from(position.x())
    }
}

impl Display for Grid {
    /// Formats the board as rows of tile ids with a dot for the hole.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cell_count() - 1).to_string().len();
        for y in 0..self.rows {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.columns {
                if x > 0 {
                    write!(f, " ")?;
                }
                let position = Position::new(x, y);
                if position == self.empty {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", self.tiles[self.index(position)].id())?;
                }
            }
        }
        Ok(())
    }
}
