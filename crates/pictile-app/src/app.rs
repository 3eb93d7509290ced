//! Pictile desktop application UI.
//!
//! # Design Notes
//! - Desktop-focused picture puzzle with procedurally generated artwork
//!   per difficulty.
//! - Pointer clicks, swipes, and keyboard (arrows/WASD) all slide tiles
//!   into the hole; move legality lives in `pictile_game::Game`.
//! - Winning freezes the board and completes the picture.
//!
//! # Future Enhancements
//! - User-supplied images, best-move records, and web/WASM support.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, TextureHandle},
};
use egui_extras::{Size, StripBuilder};
use pictile_core::{Direction, Position};
use pictile_game::{Game, SlideOutcome};
use pictile_shuffler::Shuffler;

use crate::{
    artwork,
    ui::{self, Action, input::SwipeTracker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn columns(self) -> u8 {
        match self {
            Self::Easy | Self::Medium => 3,
            Self::Hard => 4,
        }
    }

    pub const fn rows(self) -> u8 {
        match self {
            Self::Easy => 3,
            Self::Medium | Self::Hard => 4,
        }
    }

    /// Solved position of the hole, in the top-right corner of the board.
    pub const fn empty(self) -> Position {
        Position::new(self.columns() - 1, 0)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

pub struct PictileApp {
    game: Game,
    difficulty: Difficulty,
    artwork: TextureHandle,
    confirm_new_game: Option<Difficulty>,
    swipe: SwipeTracker,
    show_tile_numbers: bool,
}

impl PictileApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let difficulty = Difficulty::Medium;
        Self {
            game: new_game(difficulty),
            difficulty,
            artwork: artwork::load(&cc.egui_ctx, difficulty),
            confirm_new_game: None,
            swipe: SwipeTracker::default(),
            show_tile_numbers: true,
        }
    }

    fn apply(&mut self, ctx: &Context, action: Action) {
        match action {
            Action::SlideAt { x, y } => self.slide_at(x, y),
            Action::Slide(direction) => self.slide(direction),
            Action::NewGame(difficulty) => self.request_new_game(ctx, difficulty),
            Action::StartNewGame(difficulty) => self.start_new_game(ctx, difficulty),
            Action::CloseModal => self.confirm_new_game = None,
            Action::ToggleTileNumbers => self.show_tile_numbers = !self.show_tile_numbers,
        }
    }

    fn slide_at(&mut self, x: i32, y: i32) {
        match self.game.slide_at(x, y) {
            SlideOutcome::Applied => self.log_win(),
            SlideOutcome::Rejected => log::debug!("rejected slide at ({x}, {y})"),
        }
    }

    fn slide(&mut self, direction: Direction) {
        match self.game.slide(direction) {
            SlideOutcome::Applied => self.log_win(),
            SlideOutcome::Rejected => log::debug!("rejected {direction:?} slide"),
        }
    }

    fn log_win(&self) {
        if self.game.is_won() {
            log::info!("puzzle solved in {} moves", self.game.moves());
        }
    }

    fn request_new_game(&mut self, ctx: &Context, difficulty: Difficulty) {
        if self.game.status().is_in_progress() && self.game.moves() > 0 {
            self.confirm_new_game = Some(difficulty);
        } else {
            self.start_new_game(ctx, difficulty);
        }
    }

    fn start_new_game(&mut self, ctx: &Context, difficulty: Difficulty) {
        self.confirm_new_game = None;
        if difficulty != self.difficulty {
            self.artwork = artwork::load(ctx, difficulty);
        }
        self.difficulty = difficulty;
        self.game = new_game(difficulty);
    }
}

fn new_game(difficulty: Difficulty) -> Game {
    let shuffled = Shuffler::default()
        .shuffle(difficulty.columns(), difficulty.rows(), difficulty.empty())
        .expect("difficulty presets describe valid boards");
    log::info!(
        "new {} game: {}x{} random-walk shuffle, seed {}",
        difficulty.label(),
        difficulty.columns(),
        difficulty.rows(),
        shuffled.seed
    );
    Game::new(shuffled)
}

impl App for PictileApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut actions = vec![];

        if self.confirm_new_game.is_none() {
            ctx.input(|i| ui::input::handle_input(i, self.difficulty, &mut actions));
        }

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.75))
                .size(Size::relative(0.25))
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        actions.extend(ui::board::show(
                            ui,
                            &self.game,
                            &self.artwork,
                            self.show_tile_numbers,
                            &mut self.swipe,
                        ));
                    });
                    strip.cell(|ui| {
                        actions.extend(ui::sidebar::show(
                            ui,
                            &self.game,
                            self.difficulty,
                            self.show_tile_numbers,
                        ));
                    });
                });
        });

        if let Some(difficulty) = self.confirm_new_game {
            actions.extend(ui::dialogs::show_new_game_confirm(ctx, difficulty));
        }

        for action in actions {
            self.apply(ctx, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.columns(), 3);
        assert_eq!(Difficulty::Easy.rows(), 3);
        assert_eq!(Difficulty::Medium.columns(), 3);
        assert_eq!(Difficulty::Medium.rows(), 4);
        assert_eq!(Difficulty::Hard.columns(), 4);
        assert_eq!(Difficulty::Hard.rows(), 4);
    }

    #[test]
    fn test_difficulty_hole_rests_in_the_top_right_corner() {
        for difficulty in Difficulty::ALL {
            let empty = difficulty.empty();
            assert_eq!(empty.x(), difficulty.columns() - 1, "{difficulty:?}");
            assert_eq!(empty.y(), 0, "{difficulty:?}");
        }
    }

    #[test]
    fn test_difficulty_presets_describe_shuffleable_boards() {
        for difficulty in Difficulty::ALL {
            let shuffled = Shuffler::default()
                .shuffle(difficulty.columns(), difficulty.rows(), difficulty.empty())
                .expect("preset boards are valid");
            assert_eq!(shuffled.grid.columns(), difficulty.columns());
            assert_eq!(shuffled.grid.rows(), difficulty.rows());
        }
    }
}
