//! Seeded shuffling for sliding-tile picture puzzles.
//!
//! This crate scrambles a solved [`Grid`] into a starting position that is
//! guaranteed to be solvable. Shuffling is driven entirely by a
//! [`ShuffleSeed`], so a board can be reproduced from its seed alone:
//!
//! 1. The seed is stretched into a deterministic random number generator.
//! 2. A [`ShuffleStrategy`] scrambles the board with that generator.
//! 3. The scrambled board is returned together with its seed as a
//!    [`ShuffledGrid`].
//!
//! # Examples
//!
//! ```
//! use pictile_core::Position;
//! use pictile_shuffler::{ShuffleSeed, Shuffler};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let seed: ShuffleSeed =
//!     "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92".parse()?;
//!
//! let shuffler = Shuffler::default();
//! let first = shuffler.shuffle_with_seed(4, 4, Position::new(3, 0), seed)?;
//! let second = shuffler.shuffle_with_seed(4, 4, Position::new(3, 0), seed)?;
//!
//! // The same seed always reproduces the same board.
//! assert_eq!(first.grid, second.grid);
//! # Ok(())
//! # }
//! ```

use pictile_core::{ConfigError, Direction, Grid, Position, TileId};
use rand::RngExt as _;
use rand_pcg::Pcg64Mcg;

pub mod seed;
pub mod solvability;

pub use self::{
    seed::{ParseSeedError, ShuffleSeed},
    solvability::is_solvable,
};

/// Strategy used to scramble a solved board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleStrategy {
    /// Walks the board with random legal slide moves.
    ///
    /// The walk makes `columns * rows * 100` attempts, each picking one of
    /// the four directions uniformly. Attempts that point off the board are
    /// skipped but still consume an iteration. Every intermediate position
    /// is reachable by construction, so the result is always solvable.
    #[default]
    RandomWalk,
    /// Draws uniform random permutations until one is solvable.
    ///
    /// On boards with at least two columns and two rows, half of all
    /// permutations are solvable, so each draw succeeds with probability
    /// 1/2 and two draws are needed on average. There is no bound on the
    /// number of draws in the theoretical worst case. Unlike
    /// [`ShuffleStrategy::RandomWalk`] the result is uniformly distributed
    /// over all solvable positions.
    FilteredPermutation,
}

/// Shuffled board together with the seed that produced it.
#[derive(Debug, Clone)]
pub struct ShuffledGrid {
    /// The scrambled board.
    pub grid: Grid,
    /// Seed that reproduces `grid` when passed to
    /// [`Shuffler::shuffle_with_seed`] with the same dimensions and
    /// strategy.
    pub seed: ShuffleSeed,
}

/// Scrambles solved boards into solvable starting positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shuffler {
    strategy: ShuffleStrategy,
}

impl Shuffler {
    /// Creates a shuffler that scrambles boards with `strategy`.
    #[must_use]
    pub const fn new(strategy: ShuffleStrategy) -> Self {
        Self { strategy }
    }

    /// Shuffles a freshly created solved board with a random seed.
    ///
    /// The hole of the solved layout sits at `empty`, which is also where
    /// the board must return the hole to be solved.
    ///
    /// # Errors
    ///
    /// Returns an error when `columns` or `rows` is zero or `empty` lies
    /// outside the board.
    pub fn shuffle(
        &self,
        columns: u8,
        rows: u8,
        empty: Position,
    ) -> Result<ShuffledGrid, ConfigError> {
        self.shuffle_with_seed(columns, rows, empty, ShuffleSeed::random())
    }

    /// Shuffles a freshly created solved board with an explicit seed.
    ///
    /// Calling this twice with the same arguments produces the same board.
    ///
    /// # Errors
    ///
    /// Returns an error when `columns` or `rows` is zero or `empty` lies
    /// outside the board.
    pub fn shuffle_with_seed(
        &self,
        columns: u8,
        rows: u8,
        empty: Position,
        seed: ShuffleSeed,
    ) -> Result<ShuffledGrid, ConfigError> {
        let mut grid = Grid::solved(columns, rows, empty)?;
        let mut rng = seed.rng();
        match self.strategy {
            ShuffleStrategy::RandomWalk => random_walk(&mut grid, &mut rng),
            ShuffleStrategy::FilteredPermutation => filtered_permutation(&mut grid, &mut rng),
        }
        Ok(ShuffledGrid { grid, seed })
    }
}

fn random_walk(grid: &mut Grid, rng: &mut Pcg64Mcg) {
    let iterations = u32::from(grid.cell_count()) * 100;
    for _ in 0..iterations {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let (x, y) = direction.tile_position(grid.empty_position());
        if let Some(target) = grid.position(x, y) {
            grid.slide(target);
        }
    }
}

fn filtered_permutation(grid: &mut Grid, rng: &mut Pcg64Mcg) {
    // Every pass draws a fresh uniform permutation, so the previous
    // attempt does not have to be undone first.
    loop {
        fisher_yates(grid, rng);
        if is_solvable(grid) {
            return;
        }
    }
}

fn fisher_yates(grid: &mut Grid, rng: &mut Pcg64Mcg) {
    for i in (1..grid.cell_count()).rev() {
        let j = rng.random_range(0..=i);
        let a = scan_position(grid, i);
        let b = scan_position(grid, j);
        grid.swap_cells(a, b);
    }
}

fn scan_position(grid: &Grid, index: u16) -> Position {
    TileId::new(index).solved_position(grid.columns())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEED_A: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
    const SEED_B: &str = "ffeeddccbbaa99887766554433221100ffeeddccbbaa99887766554433221100";

    fn seed(hex: &str) -> ShuffleSeed {
        hex.parse().expect("valid seed literal")
    }

    #[test]
    fn test_same_seed_reproduces_the_board() {
        for strategy in [ShuffleStrategy::RandomWalk, ShuffleStrategy::FilteredPermutation] {
            let shuffler = Shuffler::new(strategy);
            let first = shuffler
                .shuffle_with_seed(4, 4, Position::new(3, 0), seed(SEED_A))
                .expect("valid dimensions");
            let second = shuffler
                .shuffle_with_seed(4, 4, Position::new(3, 0), seed(SEED_A))
                .expect("valid dimensions");
            assert_eq!(first.grid, second.grid, "{strategy:?}");
            assert_eq!(first.seed, second.seed, "{strategy:?}");
        }
    }

    #[test]
    fn test_different_seeds_produce_different_boards() {
        let shuffler = Shuffler::default();
        let first = shuffler
            .shuffle_with_seed(4, 4, Position::new(3, 0), seed(SEED_A))
            .expect("valid dimensions");
        let second = shuffler
            .shuffle_with_seed(4, 4, Position::new(3, 0), seed(SEED_B))
            .expect("valid dimensions");
        assert_ne!(first.grid, second.grid);
    }

    #[test]
    fn test_random_walk_scrambles_boards() {
        let shuffler = Shuffler::new(ShuffleStrategy::RandomWalk);
        for (columns, rows, empty) in [
            (3, 3, Position::new(2, 0)),
            (3, 4, Position::new(2, 0)),
            (4, 4, Position::new(3, 0)),
        ] {
            let shuffled = shuffler
                .shuffle_with_seed(columns, rows, empty, seed(SEED_A))
                .expect("valid dimensions");
            assert!(!shuffled.grid.is_solved(), "{columns}x{rows}");
            assert!(is_solvable(&shuffled.grid), "{columns}x{rows}");
        }
    }

    #[test]
    fn test_filtered_permutation_yields_solvable_boards() {
        let shuffler = Shuffler::new(ShuffleStrategy::FilteredPermutation);
        for (columns, rows, empty) in [
            (2, 2, Position::new(1, 1)),
            (3, 3, Position::new(2, 0)),
            (3, 4, Position::new(2, 0)),
            (4, 4, Position::new(3, 0)),
        ] {
            let shuffled = shuffler
                .shuffle_with_seed(columns, rows, empty, seed(SEED_B))
                .expect("valid dimensions");
            assert!(is_solvable(&shuffled.grid), "{columns}x{rows}");
            let empty_id = u16::from(empty.y()) * u16::from(columns) + u16::from(empty.x());
            assert_eq!(shuffled.grid.empty_tile().id().value(), empty_id);
        }
    }

    #[test]
    fn test_shuffle_rejects_invalid_dimensions() {
        let shuffler = Shuffler::default();
        assert!(shuffler.shuffle(0, 3, Position::new(0, 0)).is_err());
        assert!(shuffler.shuffle(3, 3, Position::new(3, 0)).is_err());
    }

    #[test]
    fn test_random_seed_produces_solvable_boards() {
        let shuffled = Shuffler::default()
            .shuffle(4, 4, Position::new(3, 0))
            .expect("valid dimensions");
        assert!(is_solvable(&shuffled.grid));
    }

    proptest! {
        #[test]
        fn test_random_walk_output_is_always_solvable(
            columns in 1_u8..=5,
            rows in 1_u8..=5,
            x in 0_u8..=4,
            y in 0_u8..=4,
            bytes in any::<[u8; 32]>(),
        ) {
            let empty = Position::new(x % columns, y % rows);
            let shuffled = Shuffler::new(ShuffleStrategy::RandomWalk)
                .shuffle_with_seed(columns, rows, empty, ShuffleSeed::from_bytes(bytes))
                .expect("valid dimensions");
            prop_assert!(is_solvable(&shuffled.grid));
        }

        #[test]
        fn test_filtered_permutation_output_is_always_solvable(
            columns in 2_u8..=4,
            rows in 2_u8..=4,
            bytes in any::<[u8; 32]>(),
        ) {
            let empty = Position::new(columns - 1, 0);
            let shuffled = Shuffler::new(ShuffleStrategy::FilteredPermutation)
                .shuffle_with_seed(columns, rows, empty, ShuffleSeed::from_bytes(bytes))
                .expect("valid dimensions");
            prop_assert!(is_solvable(&shuffled.grid));
        }
    }
}
