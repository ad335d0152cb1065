//! Projectiles, targets and particles
//!
//! Plain value records owned by the live collections on `GameState`. Each
//! kind has its own per-tick update rule; nothing here knows about the
//! other kinds.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::PlayArea;
use crate::color::Color;
use crate::tuning::Tuning;

/// Life below this counts as spent (absorbs f32 drift from repeated decay)
pub const LIFE_EPSILON: f32 = 1e-4;

/// A cannon shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cleared exactly once, when the shot lands, leaves the area or scores
    pub active: bool,
}

/// What happened to a projectile during its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    /// Still in the air
    Airborne,
    /// Lower edge crossed the ground line; burst at the projectile position
    Landed,
    /// Left through the left or right edge; no burst
    OutOfBounds,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            active: true,
        }
    }

    /// Apply gravity, integrate, then check ground before side bounds
    pub fn update(&mut self, gravity: f32, area: &PlayArea, ground_y: f32) -> Flight {
        self.vel.y += gravity;
        self.pos += self.vel;

        let mut flight = Flight::Airborne;

        if self.pos.y + self.radius > ground_y {
            self.active = false;
            flight = Flight::Landed;
        }

        if self.pos.x > area.width || self.pos.x < 0.0 {
            self.active = false;
            if flight == Flight::Airborne {
                flight = Flight::OutOfBounds;
            }
        }

        flight
    }
}

/// A drifting target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    /// Always (negative, 0)
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub active: bool,
}

impl Target {
    /// `speed` is the leftward speed magnitude
    pub fn new(pos: Vec2, speed: f32, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::new(-speed.abs(), 0.0),
            radius,
            color,
            active: true,
        }
    }

    /// Drift left. Returns true on the tick the target escapes.
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        if self.pos.x + self.radius < 0.0 {
            self.active = false;
            return true;
        }
        false
    }
}

/// A short-lived spark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at birth, falls linearly to 0
    pub life: f32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    /// Random spark at `pos`: velocity in [-max, max)² and radius in the tuned range
    pub fn random<R: Rng + ?Sized>(rng: &mut R, pos: Vec2, color: Color, tuning: &Tuning) -> Self {
        let spread = tuning.particle_max_speed * 2.0;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * spread,
            (rng.random::<f32>() - 0.5) * spread,
        );
        let (min_r, max_r) = tuning.particle_radius;
        Self {
            pos,
            vel,
            life: 1.0,
            radius: min_r + rng.random::<f32>() * (max_r - min_r),
            color,
        }
    }

    /// Push one burst (`tuning.burst_size` sparks) onto `particles`
    pub fn burst_into<R: Rng + ?Sized>(
        particles: &mut Vec<Particle>,
        rng: &mut R,
        tuning: &Tuning,
        pos: Vec2,
        color: Color,
    ) {
        particles.reserve(tuning.burst_size);
        for _ in 0..tuning.burst_size {
            particles.push(Particle::random(rng, pos, color, tuning));
        }
    }

    /// Drift without gravity and fade
    pub fn update(&mut self, decay: f32) {
        self.pos += self.vel;
        self.life = (self.life - decay).max(0.0);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= LIFE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const AREA: PlayArea = PlayArea {
        width: 800.0,
        height: 600.0,
    };
    const GROUND_Y: f32 = 550.0;

    #[test]
    fn test_projectile_gravity_then_integrate() {
        let mut p = Projectile::new(Vec2::new(200.0, 100.0), Vec2::new(3.0, -10.0), 8.0);
        assert_eq!(p.update(0.5, &AREA, GROUND_Y), Flight::Airborne);
        // Velocity updated before position
        assert_eq!(p.vel, Vec2::new(3.0, -9.5));
        assert_eq!(p.pos, Vec2::new(203.0, 90.5));
        assert!(p.active);
    }

    #[test]
    fn test_projectile_lands() {
        let mut p = Projectile::new(Vec2::new(300.0, 535.0), Vec2::ZERO, 8.0);
        // 535 + 0.5 + 8 = 543.5: still above ground
        assert_eq!(p.update(0.5, &AREA, GROUND_Y), Flight::Airborne);
        let mut flight = Flight::Airborne;
        for _ in 0..10 {
            flight = p.update(0.5, &AREA, GROUND_Y);
            if flight != Flight::Airborne {
                break;
            }
        }
        assert_eq!(flight, Flight::Landed);
        assert!(!p.active);
        assert!(p.pos.y + p.radius > GROUND_Y);
    }

    #[test]
    fn test_projectile_leaves_sides_silently() {
        let mut right = Projectile::new(Vec2::new(795.0, 100.0), Vec2::new(10.0, 0.0), 8.0);
        assert_eq!(right.update(0.5, &AREA, GROUND_Y), Flight::OutOfBounds);
        assert!(!right.active);

        let mut left = Projectile::new(Vec2::new(2.0, 100.0), Vec2::new(-5.0, 0.0), 8.0);
        assert_eq!(left.update(0.5, &AREA, GROUND_Y), Flight::OutOfBounds);
        assert!(!left.active);
    }

    #[test]
    fn test_ground_takes_priority_over_bounds() {
        // Crosses the right edge and the ground in the same tick
        let mut p = Projectile::new(Vec2::new(795.0, 540.0), Vec2::new(10.0, 5.0), 8.0);
        assert_eq!(p.update(0.5, &AREA, GROUND_Y), Flight::Landed);
        assert!(!p.active);
    }

    #[test]
    fn test_target_escapes_when_trailing_edge_passes() {
        let mut t = Target::new(Vec2::new(-18.0, 200.0), 1.0, 20.0, Color::WHITE);
        // -19 + 20 = 1: still visible
        assert!(!t.update());
        assert!(t.active);
        // -20 + 20 = 0: still not < 0
        assert!(!t.update());
        assert!(t.update());
        assert!(!t.active);
    }

    #[test]
    fn test_target_velocity_is_leftward() {
        let t = Target::new(Vec2::ZERO, 2.5, 30.0, Color::WHITE);
        assert_eq!(t.vel, Vec2::new(-2.5, 0.0));
        let t = Target::new(Vec2::ZERO, -2.5, 30.0, Color::WHITE);
        assert_eq!(t.vel, Vec2::new(-2.5, 0.0));
    }

    #[test]
    fn test_particle_dies_after_fifty_ticks() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut p = Particle::random(&mut rng, Vec2::ZERO, Color::WHITE, &Tuning::default());
        for tick in 1..=49 {
            p.update(0.02);
            assert!(!p.is_dead(), "died early at tick {tick}");
        }
        p.update(0.02);
        assert!(p.is_dead());
    }

    #[test]
    fn test_particle_ignores_gravity() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -2.0),
            life: 1.0,
            radius: 2.0,
            color: Color::WHITE,
        };
        p.update(0.02);
        p.update(0.02);
        assert_eq!(p.vel, Vec2::new(1.0, -2.0));
        assert_eq!(p.pos, Vec2::new(2.0, -4.0));
    }

    #[test]
    fn test_particle_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, Vec2::ZERO, Color::WHITE, &tuning);
            assert!(p.vel.x >= -4.0 && p.vel.x <= 4.0);
            assert!(p.vel.y >= -4.0 && p.vel.y <= 4.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert_eq!(p.life, 1.0);
        }
    }
}
