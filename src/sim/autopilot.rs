//! Idle/demo mode - the simulation plays itself
//!
//! Steers toward a point slightly below the middle of the next gap. A jump
//! rises about 60 units before gravity wins, so holding the flyer just under
//! the gap center keeps the whole bounce inside the gap.

use super::state::{GamePhase, GameState};

/// How far below the gap center the flyer's center is allowed to sink
const AIM_BELOW_CENTER: f32 = 20.0;

/// Y the flyer's center should hover around, if there is a pipe to aim for
pub fn target_y(state: &GameState) -> Option<f32> {
    let pipe = state.next_pipe()?;
    Some(pipe.gap_top + state.tuning.pipe_gap / 2.0 + AIM_BELOW_CENTER)
}

/// Whether the autopilot would jump this tick
pub fn wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    let center = state.flyer.y + state.tuning.flyer_height / 2.0;
    match target_y(state) {
        Some(target) => center > target,
        // Nothing ahead: hold the middle of the screen
        None => center > state.tuning.screen_height / 2.0,
    }
}
