//! Reachability test for sliding-tile boards.
//!
//! Sliding a tile never changes the parity of the inversion count plus,
//! on boards with an even number of columns, the row of the hole. That
//! quantity is therefore the same for every board reachable from the
//! solved layout, and comparing it against the solved layout decides
//! whether a permutation can be solved at all.
//!
//! The solved layout is the one the [`Grid`] was created with, so the
//! hole does not have to sit in the bottom-right corner. On even-width
//! boards the test compares the hole's current row against the row it
//! occupies when solved.

use pictile_core::Grid;

/// Returns whether `grid` can reach its solved layout through slide moves.
///
/// # Examples
///
/// ```
/// use pictile_core::{Grid, Position};
/// use pictile_shuffler::is_solvable;
///
/// let mut grid = Grid::solved(3, 3, Position::new(2, 2)).unwrap();
/// assert!(is_solvable(&grid));
///
/// // Swapping two tiles directly is not a slide move and flips the parity.
/// grid.swap_cells(Position::new(0, 0), Position::new(1, 0));
/// assert!(!is_solvable(&grid));
/// ```
#[must_use]
pub fn is_solvable(grid: &Grid) -> bool {
    let inversions = grid.inversions();

    // On a single-row or single-column board tiles keep their scan order
    // forever, so only the already-ordered permutations are solvable.
    if grid.columns() == 1 || grid.rows() == 1 {
        return inversions == 0;
    }

    if grid.columns() % 2 == 1 {
        return inversions % 2 == 0;
    }

    let hole_row = usize::from(grid.empty_position().y());
    let solved_hole_row = usize::from(
        grid.empty_tile()
            .id()
            .solved_position(grid.columns())
            .y(),
    );
    (inversions + hole_row + solved_hole_row) % 2 == 0
}

#[cfg(test)]
mod tests {
    use pictile_core::Position;

    use super::*;

    #[test]
    fn test_solved_boards_are_solvable() {
        for (columns, rows, empty) in [
            (3, 3, Position::new(2, 0)),
            (3, 4, Position::new(2, 0)),
            (4, 4, Position::new(3, 0)),
            (4, 4, Position::new(3, 3)),
            (2, 2, Position::new(1, 1)),
        ] {
            let grid = Grid::solved(columns, rows, empty).expect("valid dimensions");
            assert!(is_solvable(&grid), "{columns}x{rows} empty {empty}");
        }
    }

    #[test]
    fn test_single_swap_is_unsolvable() {
        let mut grid = Grid::solved(3, 3, Position::new(2, 2)).expect("valid dimensions");
        grid.swap_cells(Position::new(0, 0), Position::new(1, 0));
        assert_eq!(grid.inversions(), 1);
        assert!(!is_solvable(&grid));
    }

    #[test]
    fn test_odd_width_depends_on_inversion_parity_alone() {
        // Reversing the first row puts the scan sequence at 2 1 0 3 4 ...,
        // which has three inversions.
        let mut grid = Grid::solved(3, 3, Position::new(2, 2)).expect("valid dimensions");
        grid.swap_cells(Position::new(0, 0), Position::new(2, 0));
        assert_eq!(grid.inversions(), 3);
        assert!(!is_solvable(&grid));

        // One more swap brings the count to four, an even number.
        grid.swap_cells(Position::new(0, 1), Position::new(1, 1));
        assert_eq!(grid.inversions(), 4);
        assert!(is_solvable(&grid));
    }

    #[test]
    fn test_slide_moves_preserve_solvability_on_even_width() {
        // With the hole solved at the top-right, sliding one tile up moves
        // the hole down a row and creates inversions. Both parities flip
        // together, so the board stays solvable.
        let mut grid = Grid::solved(4, 4, Position::new(3, 0)).expect("valid dimensions");
        assert!(grid.slide(Position::new(3, 1)));
        assert!(is_solvable(&grid));
        assert!(grid.slide(Position::new(2, 1)));
        assert!(is_solvable(&grid));
    }

    #[test]
    fn test_fourteen_fifteen_swap_is_unsolvable() {
        // The classic unsolvable configuration: swap the last two tiles of
        // a 4x4 board with the hole in the bottom-right corner.
        let mut grid = Grid::solved(4, 4, Position::new(3, 3)).expect("valid dimensions");
        grid.swap_cells(Position::new(1, 3), Position::new(2, 3));
        assert!(!is_solvable(&grid));
    }

    #[test]
    fn test_single_column_board_requires_scan_order() {
        let mut grid = Grid::solved(1, 4, Position::new(0, 3)).expect("valid dimensions");
        assert!(is_solvable(&grid));

        // Sliding keeps the tiles in order, only the hole moves.
        assert!(grid.slide(Position::new(0, 2)));
        assert!(is_solvable(&grid));

        // Reordering any two tiles can never be undone by slides.
        grid.swap_cells(Position::new(0, 0), Position::new(0, 1));
        assert!(!is_solvable(&grid));
    }

    #[test]
    fn test_single_row_board_requires_scan_order() {
        let mut grid = Grid::solved(4, 1, Position::new(0, 0)).expect("valid dimensions");
        assert!(is_solvable(&grid));
        grid.swap_cells(Position::new(1, 0), Position::new(2, 0));
        assert!(!is_solvable(&grid));
    }
}
