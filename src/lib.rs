//! Bramble Dash - a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//!
//! Rendering, audio, and page chrome belong to the host page. The simulation
//! exposes state snapshots and per-tick events and nothing else.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible world width in pixels; entities spawn just beyond it
    pub const VIEW_WIDTH: f32 = 960.0;
    /// Visible world height in pixels (hint for the host renderer)
    pub const VIEW_HEIGHT: f32 = 540.0;
    /// Entities whose x drops below this are pruned
    pub const PRUNE_X: f32 = -120.0;

    /// Player sprite anchor and size
    pub const PLAYER_X: f32 = 120.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Hitbox inset per horizontal side (forgives near-misses)
    pub const PLAYER_INSET_X: f32 = 10.0;
    /// Hitbox inset from the sprite top
    pub const PLAYER_INSET_TOP: f32 = 6.0;

    /// Gravity applied to vertical velocity every tick
    pub const GRAVITY_PER_TICK: f32 = -0.9;
    /// Vertical velocity set on jump
    pub const JUMP_IMPULSE: f32 = 16.5;

    /// Scroll speed at the start of a run (pixels per tick)
    pub const SCROLL_SPEED_START: f32 = 6.0;
    /// Scroll speed gained every tick (the ramp never stops)
    pub const SCROLL_ACCEL: f32 = 0.0015;

    /// Per-tick obstacle spawn probability
    pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.015;
    /// Per-tick coin spawn probability
    pub const COIN_SPAWN_CHANCE: f64 = 0.018;
    /// Spawn-x jitter band beyond the right edge
    pub const SPAWN_JITTER: f32 = 240.0;
    /// Minimum horizontal gap behind the most recently spawned obstacle
    pub const MIN_OBSTACLE_GAP: f32 = 340.0;
    /// Obstacle hitbox inset per horizontal side
    pub const OBSTACLE_INSET_X: f32 = 7.0;
    /// Obstacle hitbox inset from the sprite top
    pub const OBSTACLE_INSET_TOP: f32 = 8.0;

    /// Coin sprite size (square)
    pub const COIN_SIZE: f32 = 28.0;
    /// Extra pickup tolerance around the coin sprite
    pub const COIN_PICKUP_PAD: f32 = 8.0;
    /// Lane heights a coin can spawn at (center above ground)
    pub const COIN_LANES: [f32; 3] = [64.0, 118.0, 172.0];
    /// Coins refuse to spawn within this distance of an obstacle center
    pub const COIN_CLEARANCE: f32 = 90.0;

    /// Ticks spent frozen in the Hit phase before the run ends
    pub const HIT_GRACE_TICKS: u32 = 36;

    /// Pixels per displayed meter of score
    pub const PIXELS_PER_METER: f32 = 60.0;
}
