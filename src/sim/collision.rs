//! Collision detection between projectiles and targets
//!
//! Plain all-pairs circle overlap. Populations stay small (a handful of
//! shots, a few targets on screen), so there is no spatial index.

use glam::Vec2;

use super::entity::Particle;
use super::state::{GameEvent, GameState};

/// Strict circle overlap: touching circles do not collide
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Resolve every projectile/target hit for this tick
///
/// Both sides of a hit are deactivated, a burst in the target's color is
/// emitted at the target, and the score is awarded. A projectile stops
/// scanning as soon as it scores, so it can never score twice in a tick.
/// Returns the number of hits.
pub fn resolve_hits(state: &mut GameState) -> u32 {
    let GameState {
        projectiles,
        targets,
        particles,
        rng,
        tuning,
        score,
        events,
        ..
    } = state;

    let mut hits = 0;

    for projectile in projectiles.iter_mut() {
        for target in targets.iter_mut() {
            if !projectile.active {
                break;
            }
            if !target.active {
                continue;
            }
            if !circles_overlap(projectile.pos, projectile.radius, target.pos, target.radius) {
                continue;
            }

            projectile.active = false;
            target.active = false;
            Particle::burst_into(particles, &mut *rng, tuning, target.pos, target.color);
            *score += tuning.hit_score;
            hits += 1;

            log::debug!("Hit at ({:.0}, {:.0}), score {}", target.pos.x, target.pos.y, score);
            events.push(GameEvent::TargetHit {
                pos: target.pos,
                color: target.color,
                score: *score,
            });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::sim::entity::{Projectile, Target};
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(77);
        state.start();
        state
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        // Exactly touching: 3-4-5 triangle, distance 5 == 2 + 3
        assert!(!circles_overlap(a, 2.0, Vec2::new(3.0, 4.0), 3.0));
        assert!(circles_overlap(a, 2.01, Vec2::new(3.0, 4.0), 3.0));
        assert!(!circles_overlap(a, 1.0, Vec2::new(10.0, 0.0), 1.0));
    }

    #[test]
    fn test_hit_scores_and_bursts() {
        let color = Color::rgb(40, 120, 220);
        let mut state = playing_state();
        state
            .targets
            .push(Target::new(Vec2::new(500.0, 300.0), 2.0, 20.0, color));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(480.0, 300.0), Vec2::ZERO, 8.0));

        assert_eq!(resolve_hits(&mut state), 1);
        assert_eq!(state.score, 100);
        assert!(!state.projectiles[0].active);
        assert!(!state.targets[0].active);
        assert_eq!(state.particles.len(), 15);
        assert!(state
            .particles
            .iter()
            .all(|p| p.pos == Vec2::new(500.0, 300.0) && p.color == color));
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::TargetHit { score: 100, .. }]
        ));
    }

    #[test]
    fn test_single_hit_per_projectile() {
        let mut state = playing_state();
        // Two overlapping targets around one projectile
        state
            .targets
            .push(Target::new(Vec2::new(400.0, 200.0), 1.0, 30.0, Color::WHITE));
        state
            .targets
            .push(Target::new(Vec2::new(410.0, 200.0), 1.0, 30.0, Color::WHITE));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(405.0, 200.0), Vec2::ZERO, 8.0));

        assert_eq!(resolve_hits(&mut state), 1);
        assert_eq!(state.score, 100);
        assert_eq!(state.particles.len(), 15);
        // The second target survives
        assert_eq!(state.targets.iter().filter(|t| t.active).count(), 1);
    }

    #[test]
    fn test_target_only_hit_once() {
        let mut state = playing_state();
        state
            .targets
            .push(Target::new(Vec2::new(400.0, 200.0), 1.0, 30.0, Color::WHITE));
        for dx in [-5.0, 0.0, 5.0] {
            state
                .projectiles
                .push(Projectile::new(Vec2::new(400.0 + dx, 200.0), Vec2::ZERO, 8.0));
        }

        assert_eq!(resolve_hits(&mut state), 1);
        assert_eq!(state.score, 100);
        // Only the first shot is spent
        assert_eq!(state.projectiles.iter().filter(|p| p.active).count(), 2);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = playing_state();
        state
            .targets
            .push(Target::new(Vec2::new(500.0, 300.0), 1.0, 20.0, Color::WHITE));
        // Distance 28 == 20 + 8: touching, not overlapping
        state
            .projectiles
            .push(Projectile::new(Vec2::new(472.0, 300.0), Vec2::ZERO, 8.0));

        assert_eq!(resolve_hits(&mut state), 0);
        assert_eq!(state.score, 0);
        assert!(state.particles.is_empty());
        assert!(state.projectiles[0].active && state.targets[0].active);
    }

    proptest! {
        #[test]
        fn prop_overlap_matches_distance(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 0.0f32..50.0, rb in 0.0f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let expected = a.distance(b) < ra + rb;
            prop_assert_eq!(circles_overlap(a, ra, b, rb), expected);
            // Symmetric
            prop_assert_eq!(circles_overlap(b, rb, a, ra), circles_overlap(a, ra, b, rb));
        }
    }
}
