//! Demo autopilot
//!
//! Plays the game through the same `TickInput` a human would produce:
//! press charge, hold for a fixed number of ticks, then release aimed at
//! the nearest target. The aim is found by stepping a trial projectile with
//! the real update rule against the target's predicted drift, so it leads
//! moving targets exactly.

use glam::Vec2;

use crate::polar_to_cartesian;
use crate::sim::{GamePhase, GameState, PlayArea, Projectile, Target, TickInput, circles_overlap};

/// Longest flight considered when planning
const MAX_FLIGHT_TICKS: u32 = 240;
/// Coarse aim sweep, from nearly straight up to slightly below horizontal
const SWEEP_MIN: f32 = -1.5;
const SWEEP_MAX: f32 = 0.3;
const SWEEP_STEPS: u32 = 120;
const REFINE_STEPS: u32 = 40;
/// Distance of the synthetic pointer from the pivot
const POINTER_REACH: f32 = 200.0;

/// A planned shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub angle: f32,
    /// Closest approach between projectile and target centers
    pub miss_distance: f32,
    /// Whether the trial projectile actually strikes the target
    pub hits: bool,
}

/// Input generator that plays on its own
#[derive(Debug, Clone)]
pub struct Autopilot {
    charge_ticks: u32,
    held: Option<u32>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(48)
    }
}

impl Autopilot {
    /// `charge_ticks` is how long the charge button is held per shot
    pub fn new(charge_ticks: u32) -> Self {
        Self {
            charge_ticks: charge_ticks.max(1),
            held: None,
        }
    }

    /// Produce the input for the next tick
    pub fn next_input(&mut self, state: &GameState, area: PlayArea) -> TickInput {
        let mut input = TickInput::default();
        if state.phase != GamePhase::Playing {
            self.held = None;
            return input;
        }

        let mut cannon = state.cannon;
        cannon.update_pivot(&area, &state.tuning);
        let target = pick_target(state);

        input.pointer = match target {
            Some(t) => t.pos,
            None => cannon.pos + Vec2::new(POINTER_REACH, -POINTER_REACH),
        };

        match self.held {
            None => {
                // One shot in the air at a time
                if target.is_some() && state.projectiles.is_empty() {
                    input.charge_begin = true;
                    self.held = Some(1);
                }
            }
            Some(held) if held < self.charge_ticks => {
                self.held = Some(held + 1);
            }
            Some(_) => {
                if let Some(aim) = target.and_then(|t| plan_shot(state, area, t, state.charge.power))
                {
                    log::trace!(
                        "Autopilot release at {:.2} rad (miss {:.1})",
                        aim.angle,
                        aim.miss_distance
                    );
                    input.pointer = cannon.pos + polar_to_cartesian(POINTER_REACH, aim.angle);
                }
                input.charge_end = true;
                self.held = None;
            }
        }

        input
    }
}

/// Nearest target that still has room to be reached
fn pick_target(state: &GameState) -> Option<&Target> {
    let min_x = state.cannon.pos.x + state.cannon.length * 2.0;
    state
        .targets
        .iter()
        .filter(|t| t.active && t.pos.x > min_x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
}

/// Best release angle for `power` against `target`, assuming release on the
/// next tick
pub fn plan_shot(state: &GameState, area: PlayArea, target: &Target, power: f32) -> Option<Aim> {
    let mut cannon = state.cannon;
    cannon.update_pivot(&area, &state.tuning);

    let trial = |angle: f32| -> Aim {
        let mut shot = Projectile::new(
            cannon.tip(angle),
            polar_to_cartesian(power, angle),
            state.tuning.projectile_radius,
        );
        let ground_y = area.ground_y(state.tuning.ground_height);
        let mut miss_distance = f32::INFINITY;
        let mut hits = false;

        for k in 1..=MAX_FLIGHT_TICKS {
            shot.update(state.tuning.gravity, &area, ground_y);
            if !shot.active {
                break;
            }
            let target_pos = target.pos + target.vel * k as f32;
            miss_distance = miss_distance.min(shot.pos.distance(target_pos));
            if circles_overlap(shot.pos, shot.radius, target_pos, target.radius) {
                hits = true;
                break;
            }
        }

        Aim {
            angle,
            miss_distance,
            hits,
        }
    };

    let sweep = |lo: f32, hi: f32, steps: u32| -> Option<Aim> {
        (0..=steps)
            .map(|i| trial(lo + (hi - lo) * i as f32 / steps as f32))
            .min_by(|a, b| a.miss_distance.total_cmp(&b.miss_distance))
    };

    let coarse = sweep(SWEEP_MIN, SWEEP_MAX, SWEEP_STEPS)?;
    let step = (SWEEP_MAX - SWEEP_MIN) / SWEEP_STEPS as f32;
    let fine = sweep(coarse.angle - step, coarse.angle + step, REFINE_STEPS)?;

    let best = if fine.miss_distance <= coarse.miss_distance {
        fine
    } else {
        coarse
    };
    best.miss_distance.is_finite().then_some(best)
}
