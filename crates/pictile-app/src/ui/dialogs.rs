use eframe::egui::{Context, Id, Modal, Sides};

use crate::{app::Difficulty, ui::Action};

pub fn show_new_game_confirm(ctx: &Context, difficulty: Difficulty) -> Vec<Action> {
    let mut actions = vec![];
    let modal = Modal::new(Id::new("new_game_confirm")).show(ctx, |ui| {
        ui.heading("New Game?");
        ui.add_space(4.0);
        ui.label("Start a new game? Current progress will be lost.");
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let new_game = ui.button("New Game");
                if ui.memory(|memory| memory.focused().is_none()) {
                    new_game.request_focus();
                }
                if new_game.clicked() {
                    actions.push(Action::StartNewGame(difficulty));
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            },
        );
    });
    if modal.should_close() {
        actions.push(Action::CloseModal);
    }
    actions
}
