//! Charge and fire controller
//!
//! Holding the charge button builds power a fixed step per tick up to the
//! tuned ceiling; releasing fires a projectile from the barrel tip toward
//! the pointer with speed equal to the accumulated power.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Projectile;
use super::state::Cannon;
use crate::polar_to_cartesian;

/// Charge button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargeState {
    #[default]
    Idle,
    Charging,
}

/// Power accumulator driven by charge-begin / charge-end
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChargeController {
    pub state: ChargeState,
    /// Always within [0, max_power]
    pub power: f32,
}

impl ChargeController {
    /// Idle -> Charging (no-op if already charging)
    pub fn begin(&mut self) {
        if self.state == ChargeState::Idle {
            self.state = ChargeState::Charging;
        }
    }

    /// One tick of charging
    pub fn advance(&mut self, step: f32, max_power: f32) {
        if self.state == ChargeState::Charging {
            self.power = (self.power + step).clamp(0.0, max_power);
        }
    }

    /// Charging -> Idle, firing toward `pointer`
    ///
    /// Returns `None` if no charge was in progress. Zero power still fires:
    /// the shot simply drops from the barrel tip.
    pub fn release(
        &mut self,
        cannon: &Cannon,
        pointer: Vec2,
        projectile_radius: f32,
    ) -> Option<Projectile> {
        if self.state != ChargeState::Charging {
            return None;
        }

        let angle = cannon.aim_angle(pointer);
        let vel = polar_to_cartesian(self.power, angle);
        let projectile = Projectile::new(cannon.tip(angle), vel, projectile_radius);

        self.state = ChargeState::Idle;
        self.power = 0.0;
        Some(projectile)
    }

    /// Drop any charge in progress without firing
    pub fn reset(&mut self) {
        self.state = ChargeState::Idle;
        self.power = 0.0;
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        self.state == ChargeState::Charging
    }

    /// Power as a 0-1 fraction for the power bar
    pub fn power_fraction(&self, max_power: f32) -> f32 {
        if max_power <= 0.0 {
            0.0
        } else {
            (self.power / max_power).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayArea;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn cannon() -> Cannon {
        let tuning = Tuning::default();
        let mut cannon = Cannon::new(&tuning);
        cannon.update_pivot(&PlayArea::new(800.0, 600.0), &tuning);
        cannon
    }

    #[test]
    fn test_advance_only_while_charging() {
        let mut charge = ChargeController::default();
        charge.advance(0.5, 30.0);
        assert_eq!(charge.power, 0.0);

        charge.begin();
        charge.advance(0.5, 30.0);
        charge.advance(0.5, 30.0);
        assert_eq!(charge.power, 1.0);
        assert_eq!(charge.power_fraction(30.0), 1.0 / 30.0);
    }

    #[test]
    fn test_release_fires_from_tip_toward_pointer() {
        let cannon = cannon();
        let mut charge = ChargeController::default();
        charge.begin();
        for _ in 0..20 {
            charge.advance(0.5, 30.0);
        }

        // Pointer straight right of the pivot
        let pointer = cannon.pos + Vec2::new(300.0, 0.0);
        let shot = charge.release(&cannon, pointer, 8.0).expect("should fire");
        assert!((shot.pos - (cannon.pos + Vec2::new(60.0, 0.0))).length() < 1e-4);
        assert!((shot.vel - Vec2::new(10.0, 0.0)).length() < 1e-4);
        assert_eq!(shot.radius, 8.0);
        assert!(shot.active);

        // Reset after firing
        assert_eq!(charge.power, 0.0);
        assert_eq!(charge.state, ChargeState::Idle);
    }

    #[test]
    fn test_release_when_idle_fires_nothing() {
        let mut charge = ChargeController::default();
        assert!(charge.release(&cannon(), Vec2::new(500.0, 100.0), 8.0).is_none());
    }

    #[test]
    fn test_zero_power_release_is_legal() {
        let cannon = cannon();
        let mut charge = ChargeController::default();
        charge.begin();
        let shot = charge
            .release(&cannon, Vec2::new(400.0, 100.0), 8.0)
            .expect("zero power still fires");
        assert_eq!(shot.vel.length(), 0.0);
        let angle = cannon.aim_angle(Vec2::new(400.0, 100.0));
        assert!((shot.pos - cannon.tip(angle)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_power_stays_in_bounds(ticks in 0usize..500, step in 0.0f32..5.0) {
            let mut charge = ChargeController::default();
            charge.begin();
            for _ in 0..ticks {
                charge.advance(step, 30.0);
                prop_assert!(charge.power >= 0.0);
                prop_assert!(charge.power <= 30.0);
            }
        }

        #[test]
        fn prop_launch_speed_equals_power(
            ticks in 0usize..100,
            px in 0.0f32..1000.0,
            py in 0.0f32..1000.0,
        ) {
            let cannon = cannon();
            let mut charge = ChargeController::default();
            charge.begin();
            for _ in 0..ticks {
                charge.advance(0.5, 30.0);
            }
            let power = charge.power;
            let shot = charge.release(&cannon, Vec2::new(px, py), 8.0).unwrap();
            prop_assert!((shot.vel.length() - power).abs() < 1e-3);
            prop_assert!(((shot.pos - cannon.pos).length() - 60.0).abs() < 1e-3);
        }
    }
}
