//! Procedural artwork for the puzzle boards.
//!
//! The repository ships no image assets, so each difficulty gets a
//! deterministic color-field picture generated at startup. The picture is
//! sized to the board so every tile covers the same number of pixels.

use std::f32::consts::PI;

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::app::Difficulty;

const TILE_PIXELS: u16 = 128;

pub fn load(ctx: &Context, difficulty: Difficulty) -> TextureHandle {
    ctx.load_texture(
        format!("artwork_{}", difficulty.label()),
        generate(difficulty),
        TextureOptions::LINEAR,
    )
}

fn generate(difficulty: Difficulty) -> ColorImage {
    let width = u16::from(difficulty.columns()) * TILE_PIXELS;
    let height = u16::from(difficulty.rows()) * TILE_PIXELS;
    let (phase_r, phase_g, phase_b) = phases(difficulty);

    let mut rgb = Vec::with_capacity(usize::from(width) * usize::from(height) * 3);
    for y in 0..height {
        for x in 0..width {
            let u = (f32::from(x) + 0.5) / f32::from(width);
            let v = (f32::from(y) + 0.5) / f32::from(height);
            let t = field(u, v) * PI;
            rgb.extend([
                channel(0.5 + 0.45 * (t + phase_r).sin()),
                channel(0.5 + 0.45 * (t + phase_g).sin()),
                channel(0.5 + 0.45 * (t + phase_b).sin()),
            ]);
        }
    }
    ColorImage::from_rgb([usize::from(width), usize::from(height)], &rgb)
}

/// Smooth scalar field over the unit square, roughly in `-1..=1`.
///
/// Overlapping waves and rings give every region of the picture a distinct
/// look, which is what makes the scrambled tiles tellable apart.
fn field(u: f32, v: f32) -> f32 {
    let x = u - 0.5;
    let y = v - 0.5;
    let waves = (u * 7.0).sin() + (v * 5.0).sin();
    let rings = (x.hypot(y) * 11.0).sin();
    let bands = ((u + v) * 6.0).sin();
    (waves + rings + bands) / 4.0
}

const fn phases(difficulty: Difficulty) -> (f32, f32, f32) {
    match difficulty {
        Difficulty::Easy => (0.0, 2.1, 4.2),
        Difficulty::Medium => (1.3, 3.4, 5.5),
        Difficulty::Hard => (2.6, 4.7, 0.4),
    }
}

fn channel(value: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    byte
}
