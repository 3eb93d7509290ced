//! Core board model for sliding-tile picture puzzles.
//!
//! This crate provides the data model shared by the shuffling, game, and
//! application layers: cells, tiles, and the board they live on, together
//! with the slide operation and the completion test.
//!
//! # Overview
//!
//! 1. **Cells and directions**
//!    - [`position`]: plain `(x, y)` cell coordinates and adjacency
//!    - [`direction`]: the four slide directions and the cells they move
//!
//! 2. **Tiles**
//!    - [`tile`]: tile identities ([`TileId`]) and the tiles themselves,
//!      each carrying its solved cell as the artwork source region
//!
//! 3. **The board**
//!    - [`grid`]: the [`Grid`] itself, holding one tile per cell plus the
//!      hole, with slide legality, occupant swapping, the completion
//!      predicate, and the inversion count used by solvability analysis
//!
//! # Examples
//!
//! ```
//! use pictile_core::{Direction, Grid, Position};
//!
//! let mut grid = Grid::solved(3, 3, Position::new(2, 0)).unwrap();
//! assert!(grid.is_solved());
//!
//! // The tile left of the hole slides right into it.
//! let (x, y) = Direction::Right.tile_position(grid.empty_position());
//! let target = grid.position(x, y).unwrap();
//! assert!(grid.slide(target));
//! assert!(!grid.is_solved());
//! assert_eq!(grid.empty_position(), Position::new(1, 0));
//! ```

pub mod direction;
pub mod grid;
pub mod position;
pub mod tile;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    grid::{ConfigError, Grid},
    position::Position,
    tile::{Tile, TileId},
};
