//! World advancement
//!
//! Every live entity shares one leftward scroll. The scroll speed ramps up
//! for the whole run and anything far enough past the left edge is pruned
//! so the entity lists stay bounded.

use crate::consts::*;

use super::state::GameState;

/// Ramp the scroll speed, shift all entities left, advance the parallax
/// offset, and prune dead entities.
pub(crate) fn advance_world(state: &mut GameState) {
    state.scroll_speed += SCROLL_ACCEL;
    let speed = state.scroll_speed;

    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }
    for coin in &mut state.coins {
        coin.pos.x -= speed;
    }

    // Presentational only: the host wraps its background layers off this.
    state.bg_offset = (state.bg_offset + speed) % VIEW_WIDTH;

    state.obstacles.retain(|o| o.x >= PRUNE_X);
    state.coins.retain(|c| !c.collected && c.pos.x >= PRUNE_X);
}
