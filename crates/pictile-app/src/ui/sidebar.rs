use eframe::egui::{RichText, Ui};
use pictile_game::{Game, GameStatus};

use crate::{app::Difficulty, ui::Action};

pub fn show(
    ui: &mut Ui,
    game: &Game,
    difficulty: Difficulty,
    show_tile_numbers: bool,
) -> Vec<Action> {
    let mut actions = vec![];
    ui.vertical(|ui| {
        ui.group(|ui| {
            let text = match game.status() {
                GameStatus::InProgress => RichText::new("Game in progress"),
                GameStatus::Won => RichText::new("Congratulations! You solved the puzzle!")
                    .color(ui.visuals().warn_fg_color),
            };
            ui.label(text.size(20.0));
        });

        ui.add_space(8.0);
        ui.heading("Difficulty");
        for preset in Difficulty::ALL {
            if ui
                .selectable_label(preset == difficulty, preset.label())
                .clicked()
            {
                actions.push(Action::NewGame(preset));
            }
        }

        ui.add_space(8.0);
        if ui.button(RichText::new("New Game").size(20.0)).clicked() {
            actions.push(Action::NewGame(difficulty));
        }

        ui.add_space(8.0);
        ui.label(format!("Moves: {}", game.moves()));

        if let Some(seed) = game.seed() {
            ui.add_space(8.0);
            ui.label("Seed:");
            ui.label(RichText::new(seed.to_string()).monospace().size(10.0));
        }

        ui.add_space(8.0);
        let mut numbers = show_tile_numbers;
        if ui.checkbox(&mut numbers, "Show tile numbers").changed() {
            actions.push(Action::ToggleTileNumbers);
        }
    });
    actions
}
