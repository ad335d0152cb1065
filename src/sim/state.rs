//! Game state and session control
//!
//! Everything the tick mutates lives on `GameState`: the three live entity
//! collections, the cannon and its charge, score, phase and the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::charge::ChargeController;
use super::entity::{Particle, Projectile, Target};
use crate::color::Color;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start button
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Visible play-area dimensions, supplied by the host every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y of the ground line (top edge of the ground band)
    #[inline]
    pub fn ground_y(&self, ground_height: f32) -> f32 {
        self.height - ground_height
    }
}

/// The player's cannon
///
/// The aim angle is not stored; it is derived from the pointer whenever it
/// is needed so it can never go stale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cannon {
    /// Pivot position (x fixed, y follows the ground)
    pub pos: Vec2,
    /// Barrel length
    pub length: f32,
}

impl Cannon {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.cannon_x, 0.0),
            length: tuning.cannon_length,
        }
    }

    /// Re-pin the pivot above the current ground line
    pub fn update_pivot(&mut self, area: &PlayArea, tuning: &Tuning) {
        self.pos.y = area.ground_y(tuning.ground_height) - tuning.cannon_ground_offset;
    }

    /// Angle from the pivot toward the pointer
    #[inline]
    pub fn aim_angle(&self, pointer: Vec2) -> f32 {
        crate::aim_angle(self.pos, pointer)
    }

    /// Barrel tip for a given aim angle
    #[inline]
    pub fn tip(&self, angle: f32) -> Vec2 {
        self.pos + polar_to_cartesian(self.length, angle)
    }
}

/// Things that happened during the last tick, for HUD and logging
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A projectile left the barrel
    Fired { power: f32 },
    /// A new target entered from the right
    TargetSpawned,
    /// A projectile struck a target
    TargetHit { pos: Vec2, color: Color, score: u64 },
    /// A projectile hit the ground
    GroundImpact { pos: Vec2 },
    /// A target drifted off the left edge
    TargetEscaped,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Gameplay constants
    pub tuning: Tuning,
    /// Score
    pub score: u64,
    /// Playing ticks since the session began
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub cannon: Cannon,
    pub charge: ChargeController,
    pub projectiles: Vec<Projectile>,
    pub targets: Vec<Target>,
    pub particles: Vec<Particle>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and stock tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            cannon: Cannon::new(&tuning),
            tuning,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Start,
            charge: ChargeController::default(),
            projectiles: Vec::new(),
            targets: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Start -> Playing
    pub fn start(&mut self) {
        if self.phase != GamePhase::Start {
            log::warn!("Ignoring start request in phase {:?}", self.phase);
            return;
        }
        self.reset_session();
        log::info!("Session started (seed {})", self.seed);
    }

    /// GameOver (or Playing) -> Playing, from a clean slate
    pub fn restart(&mut self) {
        if self.phase == GamePhase::Start {
            log::warn!("Ignoring restart request before the first start");
            return;
        }
        let final_score = self.score;
        self.reset_session();
        log::info!("Session restarted (previous score {})", final_score);
    }

    /// Playing -> GameOver
    pub fn end(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            self.charge.reset();
            log::info!("Game over with score {}", self.score);
        }
    }

    /// Score reset, collections cleared, RNG reseeded, phase = Playing
    fn reset_session(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.time_ticks = 0;
        self.charge.reset();
        self.projectiles.clear();
        self.targets.clear();
        self.particles.clear();
        self.events.clear();
        self.phase = GamePhase::Playing;
    }

    /// Spawn one particle burst at `pos`
    pub fn spawn_burst(&mut self, pos: Vec2, color: Color) {
        Particle::burst_into(&mut self.particles, &mut self.rng, &self.tuning, pos, color);
    }

    /// Entity totals (projectiles, targets, particles)
    pub fn population(&self) -> (usize, usize, usize) {
        (self.projectiles.len(), self.targets.len(), self.particles.len())
    }
}
