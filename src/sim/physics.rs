//! Vertical physics for the runner
//!
//! One-dimensional motion: constant gravity, a fixed jump impulse, and a
//! hard clamp at the ground plane. All constants are per tick.

use crate::consts::{GRAVITY_PER_TICK, JUMP_IMPULSE};

use super::state::Player;

/// Advance the player by one tick of gravity.
///
/// Semi-implicit Euler: velocity first, then position. Crossing the ground
/// plane clamps position to zero, kills the velocity, and grounds the
/// player.
pub fn integrate(player: &mut Player) {
    player.vel_y += GRAVITY_PER_TICK;
    player.pos_y += player.vel_y;

    if player.pos_y <= 0.0 {
        player.pos_y = 0.0;
        player.vel_y = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
}

/// Apply the jump impulse if the player is on the ground.
///
/// Returns whether the jump was accepted; airborne requests are no-ops.
pub fn try_jump(player: &mut Player) -> bool {
    if !player.grounded {
        return false;
    }
    player.vel_y = JUMP_IMPULSE;
    player.grounded = false;
    true
}
