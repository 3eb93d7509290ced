//! Game session layer for sliding-tile picture puzzles.
//!
//! A [`Game`] wraps a scrambled [`Grid`](pictile_core::Grid) and enforces
//! the rules of play: only tiles next to the hole can move, every applied
//! move is counted, and the board freezes permanently once it reaches its
//! solved layout.
//!
//! # Examples
//!
//! ```
//! use pictile_core::{Direction, Position};
//! use pictile_game::{Game, SlideOutcome};
//! use pictile_shuffler::Shuffler;
//!
//! let shuffled = Shuffler::default().shuffle(3, 3, Position::new(2, 0)).unwrap();
//! let mut game = Game::new(shuffled);
//! assert!(game.status().is_in_progress());
//!
//! // Directions name the motion of the tile, so `Up` moves the tile below
//! // the hole. At the border there is no such tile and nothing happens.
//! match game.slide(Direction::Up) {
//!     SlideOutcome::Applied => assert_eq!(game.moves(), 1),
//!     SlideOutcome::Rejected => assert_eq!(game.moves(), 0),
//! }
//! ```

pub mod game;

pub use self::game::{Game, GameStatus, SlideOutcome};
