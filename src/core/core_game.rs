//! CoreGame - the game state paired with its clock.
//!
//! Both the terminal driver and the simulator go through this type so that
//! they share the exact timing and restart behavior.

use super::game_loop::{GameClock, TickResult};
use super::game_state::GameState;
use crate::config::GameConfig;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct CoreGame {
    state: GameState,
    clock: GameClock,
    /// Completed games (crashes) since construction.
    games_played: u32,
}

impl CoreGame {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            clock: GameClock::new(config),
            games_played: 0,
        }
    }

    /// Feed `dt_ms` of elapsed time to the clock.
    pub fn frame<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> TickResult {
        let result = self.clock.update(&mut self.state, dt_ms, rng);
        if result.game_over {
            self.games_played += 1;
            log::info!(
                "game over: score {} (best {})",
                self.state.display_score(),
                self.state.best_score.floor() as u32
            );
        }
        result
    }

    /// Jump, or restart and resume the timers once the game is over.
    pub fn primary_action(&mut self) {
        if self.state.game_over {
            self.state.restart();
            self.clock.resume();
            log::info!("restarted (game {})", self.games_played + 1);
        } else {
            self.state.jump();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn is_running(&self) -> bool {
        self.clock.running
    }
}
