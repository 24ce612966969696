//! Run state and core simulation types
//!
//! Everything the host snapshots for rendering lives here and is
//! serializable end to end.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    Playing,
    /// Fatal collision registered; short freeze before the run ends
    Hit,
    /// Run ended
    GameOver,
}

/// The runner. Horizontal position is fixed at `PLAYER_X`; only vertical
/// motion is simulated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Height of the sprite's feet above the ground plane (never negative)
    pub pos_y: f32,
    /// Vertical velocity in pixels per tick (positive = up)
    pub vel_y: f32,
    /// Standing on the ground; jumps are only accepted while grounded
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos_y: 0.0,
            vel_y: 0.0,
            grounded: true,
        }
    }
}

/// Obstacle flavors, each with fixed sprite dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Bush,
    Tree,
}

impl ObstacleKind {
    /// Sprite (width, height) for this kind
    pub const fn dimensions(self) -> (f32, f32) {
        match self {
            ObstacleKind::Rock => (46.0, 38.0),
            ObstacleKind::Bush => (68.0, 44.0),
            ObstacleKind::Tree => (42.0, 78.0),
        }
    }
}

/// A ground obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge of the sprite in world pixels
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Sprite center: x in world pixels, y as height above the ground
    pub pos: Vec2,
    /// Set by the collision pass; pruned on the next world advance
    pub collected: bool,
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; advances only while Playing
    pub(crate) rng: Pcg32,
    /// Playing ticks elapsed this run
    pub time_ticks: u64,
    /// Current phase
    pub phase: RunPhase,
    /// Ticks left in the Hit freeze before GameOver
    pub hit_ticks: u32,
    /// Runner vertical state
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live coins in spawn order
    pub coins: Vec<Coin>,
    /// Scroll speed in pixels per tick; ramps up for the whole run
    pub scroll_speed: f32,
    /// Background scroll offset for parallax, wraps at `VIEW_WIDTH`
    pub bg_offset: f32,
    /// Distance travelled in meters (floor for display)
    pub score: f32,
    /// Coins collected this run
    pub coin_count: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: RunPhase::Playing,
            hit_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            scroll_speed: SCROLL_SPEED_START,
            bg_offset: 0.0,
            score: 0.0,
            coin_count: 0,
            next_id: 1,
        }
    }

    /// Reset the run in place: entities cleared, counters zeroed, scroll
    /// speed and RNG back to their initial values. Accepted from any phase,
    /// and calling it twice leaves the same state as calling it once.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Allocate a new entity ID (unique and monotonic within a run)
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whole meters travelled, as shown on the HUD
    pub fn score_meters(&self) -> u32 {
        self.score as u32
    }
}
