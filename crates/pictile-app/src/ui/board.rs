use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, TextureHandle, Ui, Vec2,
};
use pictile_core::Position;
use pictile_game::Game;

use crate::ui::{
    Action,
    input::{self, SwipeTracker},
};

pub fn show(
    ui: &mut Ui,
    game: &Game,
    artwork: &TextureHandle,
    show_tile_numbers: bool,
    swipe: &mut SwipeTracker,
) -> Vec<Action> {
    let mut actions = vec![];

    let columns = f32::from(game.columns());
    let rows = f32::from(game.rows());
    let avail = ui.available_size();
    let tile_size = f32::min(avail.x / columns, avail.y / rows);
    let board_size = Vec2::new(tile_size * columns, tile_size * rows);

    let (rect, response) = ui.allocate_exact_size(board_size, Sense::click_and_drag());

    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let border = Stroke::new(1.0, visuals.widgets.inactive.fg_stroke.color);
    let hole_color = visuals.extreme_bg_color;
    let in_progress = game.status().is_in_progress();
    let empty = game.empty_position();

    let painter = ui.painter();
    for y in 0..game.rows() {
        for x in 0..game.columns() {
            let position = Position::new(x, y);
            let cell_min =
                rect.min + Vec2::new(tile_size * f32::from(x), tile_size * f32::from(y));
            let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(tile_size));

            // While the game runs the hole stays blank; once it is won the
            // hidden tile is drawn too, completing the picture.
            if empty == Some(position) {
                painter.rect_filled(cell_rect, 0.0, hole_color);
                continue;
            }

            let tile = game
                .grid()
                .tile_at(position)
                .expect("every cell away from the hole holds a tile");
            painter.image(
                artwork.id(),
                cell_rect,
                source_uv(tile.source(), columns, rows),
                Color32::WHITE,
            );

            if in_progress {
                painter.rect_stroke(cell_rect, 0.0, border, StrokeKind::Inside);
                if show_tile_numbers {
                    let badge = Rect::from_center_size(
                        cell_rect.center(),
                        Vec2::splat(tile_size * 0.35),
                    );
                    painter.rect_filled(badge, tile_size * 0.08, Color32::from_black_alpha(110));
                    painter.text(
                        cell_rect.center(),
                        Align2::CENTER_CENTER,
                        (tile.id().value() + 1).to_string(),
                        FontId::proportional(tile_size * 0.25),
                        Color32::WHITE,
                    );
                }
            }
        }
    }

    if response.clicked()
        && let Some(pointer) = response.interact_pointer_pos()
    {
        let (x, y) = cell_at(rect.min, tile_size, pointer);
        actions.push(Action::SlideAt { x, y });
    }

    if let Some(total) = swipe.update(&response)
        && let Some(direction) = input::swipe_direction(total)
    {
        actions.push(Action::Slide(direction));
    }

    actions
}

/// Texture sub-rectangle holding a tile's piece of the picture.
fn source_uv(source: Position, columns: f32, rows: f32) -> Rect {
    let x = f32::from(source.x());
    let y = f32::from(source.y());
    Rect::from_min_max(
        Pos2::new(x / columns, y / rows),
        Pos2::new((x + 1.0) / columns, (y + 1.0) / rows),
    )
}

/// Board cell under a pointer position, unclamped.
///
/// Positions outside the board map to coordinates off the `0..columns` and
/// `0..rows` ranges; the game rejects those.
fn cell_at(origin: Pos2, tile_size: f32, pointer: Pos2) -> (i32, i32) {
    #[allow(clippy::cast_possible_truncation)]
    let x = ((pointer.x - origin.x) / tile_size).floor() as i32;
    #[allow(clippy::cast_possible_truncation)]
    let y = ((pointer.y - origin.y) / tile_size).floor() as i32;
    (x, y)
}
