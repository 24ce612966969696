//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies
//!
//! The host calls [`tick`] once per fixed step and reads the public state
//! fields back as render snapshots.

pub mod collision;
pub mod physics;
pub mod scroll;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, coin_hitbox, first_obstacle_hit, obstacle_hitbox, player_hitbox};
pub use state::{Coin, GameState, Obstacle, ObstacleKind, Player, RunPhase};
pub use tick::{RunEvent, TickInput, tick};
