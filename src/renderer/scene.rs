//! Scene drawing: game state to draw calls

use glam::Vec2;

use super::DrawSurface;
use crate::color::Color;
use crate::consts::{CANNON_BASE_RADIUS, CANNON_WIDTH};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, PlayArea};

/// Outline width around targets
const TARGET_STROKE: f32 = 2.0;

/// Draw one frame
///
/// Background and ground are always drawn; the cannon and entities only
/// while playing. The aim angle is derived from `pointer` here, the same
/// way the fire controller derives it.
pub fn draw_frame<S: DrawSurface + ?Sized>(
    state: &GameState,
    pointer: Vec2,
    area: PlayArea,
    settings: &Settings,
    surface: &mut S,
) {
    let ground_height = state.tuning.ground_height;

    surface.clear(Color::BACKGROUND, area.width, area.height);
    surface.fill_rect(
        0.0,
        area.ground_y(ground_height),
        area.width,
        ground_height,
        Color::GROUND,
    );

    if state.phase != GamePhase::Playing {
        return;
    }

    // Cannon: barrel first so the base covers the pivot
    let cannon = &state.cannon;
    let angle = cannon.aim_angle(pointer);
    surface.fill_rotated_rect(cannon.pos, angle, cannon.length, CANNON_WIDTH, Color::BARREL);
    surface.fill_circle(cannon.pos, CANNON_BASE_RADIUS, Color::CANNON_BASE);

    // Projectiles
    let glow = settings.effective_glow();
    if glow > 0.0 {
        surface.set_glow(glow, Color::PROJECTILE);
    }
    for projectile in &state.projectiles {
        surface.fill_circle(projectile.pos, projectile.radius, Color::PROJECTILE);
    }
    if glow > 0.0 {
        surface.set_glow(0.0, Color::PROJECTILE);
    }

    // Targets
    for target in &state.targets {
        surface.fill_circle(target.pos, target.radius, target.color);
        surface.stroke_circle(target.pos, target.radius, Color::WHITE, TARGET_STROKE);
    }

    // Particles
    if settings.particles && !state.particles.is_empty() {
        let fade = settings.effective_particle_fade();
        for particle in &state.particles {
            if fade {
                surface.set_alpha(particle.life.clamp(0.0, 1.0));
            }
            surface.fill_circle(particle.pos, particle.radius, particle.color);
        }
        if fade {
            surface.set_alpha(1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::{Projectile, Target};

    const AREA: PlayArea = PlayArea {
        width: 800.0,
        height: 600.0,
    };

    fn playing_state() -> GameState {
        let mut state = GameState::new(3);
        state.start();
        state.cannon.update_pivot(&AREA, &state.tuning);
        state
            .projectiles
            .push(Projectile::new(Vec2::new(200.0, 200.0), Vec2::ZERO, 8.0));
        state.targets.push(Target::new(
            Vec2::new(600.0, 250.0),
            2.0,
            30.0,
            Color::rgb(30, 140, 200),
        ));
        state.spawn_burst(Vec2::new(400.0, 300.0), Color::WHITE);
        for particle in &mut state.particles {
            particle.life = 0.5;
        }
        state
    }

    #[test]
    fn test_start_screen_draws_only_backdrop() {
        let state = GameState::new(1);
        let mut list = DrawList::new();
        draw_frame(&state, Vec2::ZERO, AREA, &Settings::default(), &mut list);

        assert_eq!(list.commands.len(), 2);
        assert_eq!(
            list.commands[1],
            DrawCommand::Rect {
                x: 0.0,
                y: 550.0,
                width: 800.0,
                height: 50.0,
                color: Color::GROUND,
            }
        );
    }

    #[test]
    fn test_playing_draws_every_entity() {
        let state = playing_state();
        let mut list = DrawList::new();
        draw_frame(&state, Vec2::new(500.0, 100.0), AREA, &Settings::default(), &mut list);

        assert_eq!(list.circles_of(Color::PROJECTILE), 1);
        assert_eq!(list.circles_of(Color::rgb(30, 140, 200)), 1);
        assert_eq!(list.circles_of(Color::WHITE), 15);
        assert_eq!(list.circles_of(Color::CANNON_BASE), 1);
        // Particles faded by life, alpha restored afterwards
        assert!(list.commands.contains(&DrawCommand::Alpha(0.5)));
        assert_eq!(list.commands.last(), Some(&DrawCommand::Alpha(1.0)));
    }

    #[test]
    fn test_barrel_follows_pointer() {
        let state = playing_state();
        let mut list = DrawList::new();
        let pointer = state.cannon.pos + Vec2::new(100.0, -100.0);
        draw_frame(&state, pointer, AREA, &Settings::default(), &mut list);

        let angle = list
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::RotatedRect { angle, .. } => Some(*angle),
                _ => None,
            })
            .expect("barrel drawn");
        assert!((angle + std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn test_settings_hide_particles_and_glow() {
        let state = playing_state();
        let settings = Settings {
            particles: false,
            glow: false,
            ..Settings::default()
        };
        let mut list = DrawList::new();
        draw_frame(&state, Vec2::ZERO, AREA, &settings, &mut list);

        assert_eq!(list.circles_of(Color::WHITE), 0);
        assert!(!list
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Glow { .. } | DrawCommand::Alpha(_))));
    }
}
