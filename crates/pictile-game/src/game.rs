//! Game state and move validation.

use pictile_core::{Direction, Grid, Position};
use pictile_shuffler::{ShuffleSeed, ShuffledGrid};

/// Progress of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Tiles next to the hole can still be moved.
    InProgress,
    /// The board reached its solved layout and is frozen.
    Won,
}

/// Result of attempting a slide move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SlideOutcome {
    /// The tile moved into the hole and the move was counted.
    Applied,
    /// The board did not change.
    Rejected,
}

/// A sliding-tile game session.
///
/// Manages the board state and the rules of play. Moves are accepted only
/// for tiles orthogonally adjacent to the hole, applied moves are counted,
/// and once the board reaches its solved layout it freezes: every further
/// slide is rejected.
///
/// # Example
///
/// ```
/// use pictile_core::Position;
/// use pictile_game::Game;
/// use pictile_shuffler::Shuffler;
///
/// let shuffled = Shuffler::default().shuffle(4, 4, Position::new(3, 0)).unwrap();
/// let game = Game::new(shuffled);
///
/// assert!(game.status().is_in_progress());
/// assert_eq!(game.moves(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    seed: Option<ShuffleSeed>,
    status: GameStatus,
    moves: u32,
}

impl Game {
    /// Creates a new game from a shuffled board.
    ///
    /// The seed is kept so that the session can be reproduced later.
    ///
    /// # Example
    ///
    /// ```
    /// use pictile_core::Position;
    /// use pictile_game::Game;
    /// use pictile_shuffler::Shuffler;
    ///
    /// let shuffled = Shuffler::default().shuffle(4, 4, Position::new(3, 0)).unwrap();
    /// let game = Game::new(shuffled);
    /// assert!(game.seed().is_some());
    /// ```
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(shuffled: ShuffledGrid) -> Self {
        let ShuffledGrid { grid, seed } = shuffled;
        Self {
            grid,
            seed: Some(seed),
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Creates a game directly from a board, without a seed.
    ///
    /// The game starts in progress even when `grid` is already solved;
    /// winning always happens through a slide.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            seed: None,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of columns on the board.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.grid.columns()
    }

    /// Returns the number of rows on the board.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.grid.rows()
    }

    /// Returns the seed the board was shuffled with, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<ShuffleSeed> {
        self.seed
    }

    /// Returns the progress of the session.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns whether the session has been won.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    /// Returns the number of applied moves.
    ///
    /// Rejected slides do not count.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the position of the hole, or `None` once the game is won.
    ///
    /// On a won board every cell shows its tile, so there is no hole left
    /// to report.
    #[must_use]
    pub fn empty_position(&self) -> Option<Position> {
        match self.status {
            GameStatus::InProgress => Some(self.grid.empty_position()),
            GameStatus::Won => None,
        }
    }

    /// Attempts to slide the tile at cell `(x, y)` into the hole.
    ///
    /// The coordinates may point anywhere; cells off the board, the hole
    /// itself, and cells not adjacent to the hole are rejected without
    /// changing the board. Once the game is won every slide is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use pictile_core::{Grid, Position};
    /// use pictile_game::{Game, SlideOutcome};
    ///
    /// let grid = Grid::solved(3, 3, Position::new(2, 0)).unwrap();
    /// let mut game = Game::from_grid(grid);
    ///
    /// // The cell below the hole holds a tile that can slide up.
    /// assert_eq!(game.slide_at(2, 1), SlideOutcome::Applied);
    /// // The cell we just emptied cannot slide.
    /// assert_eq!(game.slide_at(2, 1), SlideOutcome::Rejected);
    /// ```
    pub fn slide_at(&mut self, x: i32, y: i32) -> SlideOutcome {
        if self.status.is_won() {
            return SlideOutcome::Rejected;
        }
        let Some(target) = self.grid.position(x, y) else {
            return SlideOutcome::Rejected;
        };
        if !self.grid.slide(target) {
            return SlideOutcome::Rejected;
        }
        self.moves += 1;
        if self.grid.is_solved() {
            self.status = GameStatus::Won;
        }
        SlideOutcome::Applied
    }

    /// Attempts to slide a tile in `direction`.
    ///
    /// The moving tile is the one on the opposite side of the hole: sliding
    /// [`Direction::Up`] moves the tile below the hole. When that cell lies
    /// off the board the slide is rejected.
    pub fn slide(&mut self, direction: Direction) -> SlideOutcome {
        let Some(empty) = self.empty_position() else {
            return SlideOutcome::Rejected;
        };
        let (x, y) = direction.tile_position(empty);
        self.slide_at(x, y)
    }
}
