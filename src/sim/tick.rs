//! Fixed-order simulation tick
//!
//! One call advances the run by exactly one step: physics, then spawning,
//! then world advance, then collision, then score. A fatal obstacle
//! overlap aborts the tick before the coin pass and the score update.

use serde::Serialize;

use crate::consts::*;

use super::collision::{collect_coins, first_obstacle_hit};
use super::physics;
use super::scroll::advance_world;
use super::spawn::spawn_entities;
use super::state::{GameState, RunPhase};

/// Input commands for a single tick (one-shot; the host clears them after
/// each processed tick)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump request (key/click/tap since the previous tick)
    pub jump: bool,
}

/// Discrete things that happened during one tick, for host-side feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunEvent {
    Jumped,
    CoinCollected { id: u32 },
    Hit { id: u32 },
    GameOver,
}

/// Advance the run by one fixed step.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<RunEvent> {
    let mut events = Vec::new();

    match state.phase {
        RunPhase::GameOver => return events,
        RunPhase::Hit => {
            // The freeze between impact and the end screen. Nothing moves;
            // only reset() leaves early.
            state.hit_ticks = state.hit_ticks.saturating_sub(1);
            if state.hit_ticks == 0 {
                state.phase = RunPhase::GameOver;
                events.push(RunEvent::GameOver);
            }
            return events;
        }
        RunPhase::Playing => {}
    }

    state.time_ticks += 1;

    // Jump requests buffered since the last tick apply before integration.
    if input.jump && physics::try_jump(&mut state.player) {
        events.push(RunEvent::Jumped);
    }

    physics::integrate(&mut state.player);
    spawn_entities(state);
    advance_world(state);

    if let Some(id) = first_obstacle_hit(&state.player, &state.obstacles) {
        // First overlap wins and the rest of the tick is skipped, so
        // neither score nor coins move on the tick the run ends.
        state.phase = RunPhase::Hit;
        state.hit_ticks = HIT_GRACE_TICKS;
        events.push(RunEvent::Hit { id });
        return events;
    }

    for id in collect_coins(&state.player, &mut state.coins) {
        state.coin_count += 1;
        events.push(RunEvent::CoinCollected { id });
    }

    state.score += state.scroll_speed / PIXELS_PER_METER;

    events
}
