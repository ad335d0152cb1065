//! Target spawner
//!
//! A memoryless Bernoulli roll each tick: gaps between spawns are
//! geometric, averaging `1 / spawn_chance` ticks.

use glam::Vec2;
use rand::Rng;

use super::entity::Target;
use super::state::PlayArea;
use crate::color::Color;
use crate::tuning::Tuning;

/// Roll once; on success return a fresh target entering from the right
pub fn roll_spawn<R: Rng + ?Sized>(rng: &mut R, area: &PlayArea, tuning: &Tuning) -> Option<Target> {
    if rng.random::<f64>() < tuning.spawn_chance {
        Some(spawn_target(rng, area, tuning))
    } else {
        None
    }
}

/// Build a target just past the right edge, inside the vertical safe band
pub fn spawn_target<R: Rng + ?Sized>(rng: &mut R, area: &PlayArea, tuning: &Tuning) -> Target {
    let (min_r, max_r) = tuning.target_radius;
    let radius = min_r + rng.random::<f32>() * (max_r - min_r);

    let (top, bottom) = spawn_band(area, tuning);
    let y = top + rng.random::<f32>() * (bottom - top);

    let (min_speed, max_speed) = tuning.target_speed;
    let speed = min_speed + rng.random::<f32>() * (max_speed - min_speed);

    let (min_hue, max_hue) = tuning.target_hue;
    let hue = min_hue + rng.random::<f32>() * (max_hue - min_hue);

    Target::new(
        Vec2::new(area.width + radius, y),
        speed,
        radius,
        Color::from_hsl(hue, 0.7, 0.5),
    )
}

/// Vertical spawn band `[top, bottom]`, collapsed to `top` on tiny viewports
pub fn spawn_band(area: &PlayArea, tuning: &Tuning) -> (f32, f32) {
    let top = tuning.band_top;
    let bottom = area.ground_y(tuning.ground_height) - tuning.band_clearance;
    (top, bottom.max(top))
}
