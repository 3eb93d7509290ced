use eframe::egui::{InputState, Key, Response, Vec2};
use pictile_core::Direction;

use crate::{app::Difficulty, ui::Action};

/// Minimum accumulated drag length for a gesture to count as a swipe.
const MIN_SWIPE_DISTANCE: f32 = 24.0;

pub fn handle_input(i: &InputState, difficulty: Difficulty, actions: &mut Vec<Action>) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    if i.modifiers.command {
        if i.key_pressed(Key::N) {
            actions.push(Action::NewGame(difficulty));
        }
        return;
    }

    let pairs = [
        (Key::ArrowUp, Direction::Up),
        (Key::W, Direction::Up),
        (Key::ArrowDown, Direction::Down),
        (Key::S, Direction::Down),
        (Key::ArrowLeft, Direction::Left),
        (Key::A, Direction::Left),
        (Key::ArrowRight, Direction::Right),
        (Key::D, Direction::Right),
    ];
    for (key, direction) in pairs {
        if i.key_pressed(key) {
            actions.push(Action::Slide(direction));
        }
    }
}

/// Accumulates pointer drags on the board into a single swipe vector.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    delta: Vec2,
}

impl SwipeTracker {
    /// Feeds one frame of the board response; returns the total drag
    /// vector when the gesture ends.
    pub fn update(&mut self, response: &Response) -> Option<Vec2> {
        if response.drag_started() {
            self.delta = Vec2::ZERO;
        }
        if response.dragged() {
            self.delta += response.drag_delta();
        }
        if response.drag_stopped() {
            let total = self.delta;
            self.delta = Vec2::ZERO;
            return Some(total);
        }
        None
    }
}

/// Maps a swipe vector to the direction of the pushed tile.
///
/// The dominant axis decides, ties go to the vertical. Swipes shorter
/// than the threshold (including a zero-length press) are ignored.
pub fn swipe_direction(delta: Vec2) -> Option<Direction> {
    if delta.x.abs().max(delta.y.abs()) < MIN_SWIPE_DISTANCE {
        return None;
    }
    let direction = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}
