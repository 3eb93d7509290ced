use pictile_core::Direction;

use crate::app::Difficulty;

pub mod board;
pub mod dialogs;
pub mod input;
pub mod sidebar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SlideAt { x: i32, y: i32 },
    Slide(Direction),
    NewGame(Difficulty),
    StartNewGame(Difficulty),
    CloseModal,
    ToggleTileNumbers,
}
