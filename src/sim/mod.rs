//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Play-area geometry passed in every tick, never cached
//! - No rendering or platform dependencies

pub mod charge;
pub mod collision;
pub mod entity;
pub mod spawner;
pub mod state;
pub mod tick;

pub use charge::{ChargeController, ChargeState};
pub use collision::{circles_overlap, resolve_hits};
pub use entity::{Flight, Particle, Projectile, Target};
pub use spawner::{roll_spawn, spawn_target};
pub use state::{Cannon, GameEvent, GamePhase, GameState, PlayArea};
pub use tick::{TickInput, tick};
