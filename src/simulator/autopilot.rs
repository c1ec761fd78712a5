//! A simple scripted player used by the simulator.

use crate::core::game_state::{GameState, PipeKind};

/// Pixels kept between the bird's bottom edge and the gap's lower edge.
pub const AUTOPILOT_MARGIN: i32 = 12;

/// Decide whether to press the action key before the next tick.
///
/// Aims to keep the bird just above the lower edge of the next gap. It only
/// jumps while falling (or at the apex) so it never stacks jumps into the
/// top pipe.
pub fn should_jump(state: &GameState) -> bool {
    if state.game_over || state.bird.velocity < 0 {
        return false;
    }

    let bird = &state.bird;
    let projected_bottom = bird.y + bird.height + bird.velocity + state.gravity;
    let target = match state.next_pipe(PipeKind::Bottom) {
        Some(pipe) => pipe.y - AUTOPILOT_MARGIN,
        None => state.board_height * 2 / 3,
    };

    projected_bottom >= target
}
