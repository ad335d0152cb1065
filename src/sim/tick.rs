//! Fixed-step simulation tick
//!
//! One call per animation frame. The step order matters: charge feeds the
//! projectile pass, and collisions run last against positions already
//! integrated this tick.

use glam::Vec2;

use super::collision::resolve_hits;
use super::entity::{Flight, Particle};
use super::spawner::roll_spawn;
use super::state::{GameEvent, GamePhase, GameState, PlayArea};
use crate::color::Color;

/// Input for a single tick
///
/// `pointer` is continuous; the flags are one-shot and should be cleared by
/// the host once the tick has consumed them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in play-area coordinates
    pub pointer: Vec2,
    /// Charge button pressed
    pub charge_begin: bool,
    /// Charge button released (fires)
    pub charge_end: bool,
    /// Start button (Start -> Playing)
    pub start: bool,
    /// Restart button (GameOver -> Playing)
    pub restart: bool,
    /// External end-of-run trigger (Playing -> GameOver)
    pub end: bool,
}

/// Advance the game state by one tick against the current play area
pub fn tick(state: &mut GameState, input: &TickInput, area: PlayArea) {
    state.events.clear();

    // The click that starts a session never also charges or fires
    let session_began = (input.start && state.phase == GamePhase::Start)
        || (input.restart && state.phase != GamePhase::Start);

    // Session transitions land on tick boundaries
    if input.start && state.phase == GamePhase::Start {
        state.start();
    }
    if input.restart && state.phase != GamePhase::Start {
        state.restart();
    }
    if input.end {
        state.end();
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Cannon follows the ground
    state.cannon.update_pivot(&area, &state.tuning);

    // 2. Charge / fire
    if input.charge_begin && !session_began {
        state.charge.begin();
    }
    if input.charge_end && !session_began {
        let power = state.charge.power;
        if let Some(projectile) =
            state
                .charge
                .release(&state.cannon, input.pointer, state.tuning.projectile_radius)
        {
            log::trace!("Fired at power {:.1}", power);
            state.projectiles.push(projectile);
            state.events.push(GameEvent::Fired { power });
        }
    }
    state
        .charge
        .advance(state.tuning.power_step, state.tuning.max_power);

    // 3. Projectiles
    update_projectiles(state, &area);

    // 4. Spawner, then targets
    if let Some(target) = roll_spawn(&mut state.rng, &area, &state.tuning) {
        log::trace!("Target spawned at y={:.0} r={:.0}", target.pos.y, target.radius);
        state.targets.push(target);
        state.events.push(GameEvent::TargetSpawned);
    }
    update_targets(state);

    // 5. Particles
    let decay = state.tuning.particle_decay;
    for particle in &mut state.particles {
        particle.update(decay);
    }
    state.particles.retain(|p| !p.is_dead());

    // 6. Collisions
    resolve_hits(state);
}

fn update_projectiles(state: &mut GameState, area: &PlayArea) {
    let GameState {
        projectiles,
        particles,
        rng,
        tuning,
        events,
        ..
    } = state;
    let ground_y = area.ground_y(tuning.ground_height);

    for projectile in projectiles.iter_mut() {
        if projectile.update(tuning.gravity, area, ground_y) == Flight::Landed {
            log::debug!("Ground impact at x={:.0}", projectile.pos.x);
            Particle::burst_into(particles, &mut *rng, tuning, projectile.pos, Color::WHITE);
            events.push(GameEvent::GroundImpact {
                pos: projectile.pos,
            });
        }
    }
    projectiles.retain(|p| p.active);
}

fn update_targets(state: &mut GameState) {
    let GameState {
        targets, events, ..
    } = state;

    for target in targets.iter_mut() {
        if target.update() {
            events.push(GameEvent::TargetEscaped);
        }
    }
    targets.retain(|t| t.active);
}
