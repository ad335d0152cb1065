//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here. `Tuning::default()`
//! reproduces the stock game; a JSON file can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants read by the simulation each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub ground_height: f32,

    // === Cannon ===
    pub cannon_x: f32,
    pub cannon_ground_offset: f32,
    pub cannon_length: f32,
    pub max_power: f32,
    pub power_step: f32,

    // === Projectiles ===
    pub projectile_radius: f32,

    // === Targets ===
    /// Per-tick probability of spawning one target
    pub spawn_chance: f64,
    pub target_radius: (f32, f32),
    pub target_speed: (f32, f32),
    pub band_top: f32,
    pub band_clearance: f32,
    pub target_hue: (f32, f32),

    // === Particles ===
    pub burst_size: usize,
    pub particle_max_speed: f32,
    pub particle_radius: (f32, f32),
    pub particle_decay: f32,

    // === Scoring ===
    pub hit_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ground_height: GROUND_HEIGHT,

            cannon_x: CANNON_X,
            cannon_ground_offset: CANNON_GROUND_OFFSET,
            cannon_length: CANNON_LENGTH,
            max_power: MAX_POWER,
            power_step: POWER_STEP,

            projectile_radius: PROJECTILE_RADIUS,

            spawn_chance: TARGET_SPAWN_CHANCE,
            target_radius: (TARGET_MIN_RADIUS, TARGET_MAX_RADIUS),
            target_speed: (TARGET_MIN_SPEED, TARGET_MAX_SPEED),
            band_top: TARGET_BAND_TOP,
            band_clearance: TARGET_BAND_CLEARANCE,
            target_hue: (TARGET_HUE_MIN, TARGET_HUE_MAX),

            burst_size: BURST_SIZE,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_radius: (PARTICLE_MIN_RADIUS, PARTICLE_MAX_RADIUS),
            particle_decay: PARTICLE_DECAY,

            hit_score: HIT_SCORE,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Clamp every field into a range the simulation can run with
    ///
    /// Out-of-range values are pulled to the nearest bound rather than
    /// rejected, so a sloppy file never produces negative radii or a
    /// spawn chance above 1.
    pub fn sanitized(mut self) -> Self {
        self.gravity = self.gravity.max(0.0);
        self.ground_height = self.ground_height.max(0.0);
        self.cannon_length = self.cannon_length.max(0.0);
        self.max_power = self.max_power.max(0.0);
        self.power_step = self.power_step.max(0.0);
        self.projectile_radius = self.projectile_radius.max(0.0);
        self.spawn_chance = self.spawn_chance.clamp(0.0, 1.0);
        self.target_radius = ordered_nonneg(self.target_radius);
        self.target_speed = ordered_nonneg(self.target_speed);
        self.target_hue = ordered_nonneg(self.target_hue);
        self.band_clearance = self.band_clearance.max(0.0);
        self.particle_max_speed = self.particle_max_speed.max(0.0);
        self.particle_radius = ordered_nonneg(self.particle_radius);
        self.particle_decay = self.particle_decay.max(f32::EPSILON);
        self
    }
}

/// Clamp both ends to >= 0 and swap if reversed
fn ordered_nonneg((lo, hi): (f32, f32)) -> (f32, f32) {
    let (lo, hi) = (lo.max(0.0), hi.max(0.0));
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}
