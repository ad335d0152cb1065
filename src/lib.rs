//! Cannon Burst - charge a cannon, fire at drifting targets
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, charge/fire, collisions, tick)
//! - `renderer`: Render adapter over an abstract 2D draw surface
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences
//! - `autopilot` / `headless`: Self-playing sessions without a window

pub mod autopilot;
pub mod color;
pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// Velocities are in pixels per tick, one tick per animation frame.
pub mod consts {
    /// Downward acceleration applied to projectiles each tick
    pub const GRAVITY: f32 = 0.5;
    /// Height of the ground band at the bottom of the play area
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Cannon pivot x (fixed)
    pub const CANNON_X: f32 = 100.0;
    /// Cannon pivot sits this far above the ground line
    pub const CANNON_GROUND_OFFSET: f32 = 20.0;
    /// Barrel length; projectiles spawn at the tip
    pub const CANNON_LENGTH: f32 = 60.0;
    pub const CANNON_WIDTH: f32 = 20.0;
    /// Radius of the drawn cannon base
    pub const CANNON_BASE_RADIUS: f32 = 20.0;

    /// Charge power ceiling
    pub const MAX_POWER: f32 = 30.0;
    /// Power gained per charging tick
    pub const POWER_STEP: f32 = 0.5;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 8.0;

    /// Target defaults
    pub const TARGET_SPAWN_CHANCE: f64 = 0.02;
    pub const TARGET_MIN_RADIUS: f32 = 20.0;
    pub const TARGET_MAX_RADIUS: f32 = 40.0;
    pub const TARGET_MIN_SPEED: f32 = 1.0;
    pub const TARGET_MAX_SPEED: f32 = 3.0;
    /// Top edge of the target spawn band
    pub const TARGET_BAND_TOP: f32 = 50.0;
    /// Clearance kept between the spawn band and the ground
    pub const TARGET_BAND_CLEARANCE: f32 = 100.0;
    /// Target hue range (degrees), cyan through blue
    pub const TARGET_HUE_MIN: f32 = 180.0;
    pub const TARGET_HUE_MAX: f32 = 240.0;

    /// Particle defaults
    pub const BURST_SIZE: usize = 15;
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 4.0;
    pub const PARTICLE_DECAY: f32 = 0.02;

    /// Points per confirmed hit
    pub const HIT_SCORE: u64 = 100;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the ray from `from` toward `to` (screen coordinates, y down)
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_aim_angle_axes() {
        let origin = Vec2::new(100.0, 100.0);
        assert!(aim_angle(origin, Vec2::new(200.0, 100.0)).abs() < 1e-6);
        // Straight down on screen is +pi/2
        assert!((aim_angle(origin, Vec2::new(100.0, 200.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((aim_angle(origin, Vec2::new(100.0, 0.0)) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(60.0, 0.0);
        assert!((p - Vec2::new(60.0, 0.0)).length() < 1e-5);
        let p = polar_to_cartesian(2.0, FRAC_PI_2);
        assert!((p - Vec2::new(0.0, 2.0)).length() < 1e-5);
    }
}
