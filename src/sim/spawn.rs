//! Procedural spawning
//!
//! A Bernoulli process, not a timer: every tick rolls a fixed independent
//! probability for one obstacle and one coin, so inter-arrival times are
//! geometric in ticks. Spawns land just beyond the right edge with a
//! jittered offset. Obstacles keep a minimum gap behind the most recently
//! spawned one and coins refuse to sit on top of an obstacle.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::state::{Coin, GameState, Obstacle, ObstacleKind};

/// Weighted 3-way partition of a uniform roll into an obstacle kind.
fn roll_kind(roll: f32) -> ObstacleKind {
    if roll < 0.40 {
        ObstacleKind::Rock
    } else if roll < 0.75 {
        ObstacleKind::Bush
    } else {
        ObstacleKind::Tree
    }
}

/// True when an obstacle center sits within `COIN_CLEARANCE` of the
/// candidate x, which would make the coin uncollectable on foot.
fn coin_blocked(obstacles: &[Obstacle], x: f32) -> bool {
    obstacles
        .iter()
        .any(|o| (o.x + o.width / 2.0 - x).abs() < COIN_CLEARANCE)
}

/// Run both spawn rolls for this tick.
pub(crate) fn spawn_entities(state: &mut GameState) {
    maybe_spawn_obstacle(state);
    maybe_spawn_coin(state);
}

fn maybe_spawn_obstacle(state: &mut GameState) {
    if !state.rng.random_bool(OBSTACLE_SPAWN_CHANCE) {
        return;
    }
    let x = VIEW_WIDTH + state.rng.random_range(0.0..SPAWN_JITTER);

    // Push order is spawn order, so the newest obstacle is the last entry.
    if let Some(last) = state.obstacles.last() {
        if x - (last.x + last.width) < MIN_OBSTACLE_GAP {
            return;
        }
    }

    let kind = roll_kind(state.rng.random::<f32>());
    let (width, height) = kind.dimensions();
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        x,
        width,
        height,
        kind,
    });
}

fn maybe_spawn_coin(state: &mut GameState) {
    if !state.rng.random_bool(COIN_SPAWN_CHANCE) {
        return;
    }
    let x = VIEW_WIDTH + state.rng.random_range(0.0..SPAWN_JITTER);
    let lane = COIN_LANES[state.rng.random_range(0..COIN_LANES.len())];

    if coin_blocked(&state.obstacles, x) {
        return;
    }

    let id = state.next_entity_id();
    state.coins.push(Coin {
        id,
        pos: Vec2::new(x, lane),
        collected: false,
    });
}
