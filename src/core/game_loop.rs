//! Fixed-rate driver shared by the terminal game and the simulator.
//!
//! The game runs on two independent timers: a physics tick every
//! `tick_interval_ms` and a pipe spawn every `spawn_interval_ms`. Drivers
//! hand the clock however much wall time has elapsed since the last frame;
//! the clock replays every timer expiry that fell inside it, in order.

use super::constants::{MAX_FRAME_DT_MS, SCORE_PER_PIPE};
use super::game_state::GameState;
use crate::config::GameConfig;
use rand::Rng;

/// What happened during one `GameClock::update` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Physics ticks executed.
    pub ticks: u32,
    /// Pipe pairs appended.
    pub pairs_spawned: u32,
    /// Individual pipes the bird cleared (two per pair).
    pub pipes_passed: u32,
    /// The bird crashed during this update.
    pub game_over: bool,
}

impl TickResult {
    pub fn is_empty(&self) -> bool {
        *self == TickResult::default()
    }
}

#[derive(Debug, Clone)]
pub struct GameClock {
    pub tick_interval_ms: u64,
    pub spawn_interval_ms: u64,
    /// Time since the last tick fired.
    pub tick_elapsed_ms: u64,
    /// Time since the last spawn fired.
    pub spawn_elapsed_ms: u64,
    /// False once the game is over; both timers are stopped.
    pub running: bool,
    /// Ticks since the last `resume`.
    pub tick_count: u64,
}

impl GameClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tick_interval_ms: config.tick_interval_ms,
            spawn_interval_ms: config.spawn_interval_ms,
            tick_elapsed_ms: 0,
            spawn_elapsed_ms: 0,
            running: true,
            tick_count: 0,
        }
    }

    /// Restart both timers from zero.
    pub fn resume(&mut self) {
        self.tick_elapsed_ms = 0;
        self.spawn_elapsed_ms = 0;
        self.tick_count = 0;
        self.running = true;
    }

    /// Advance wall time by `dt_ms`, firing due spawns and ticks.
    ///
    /// A spawn that falls due at the same instant as a tick runs first, so
    /// the new pair already scrolls on that tick. When a tick ends the game
    /// both timers stop and the remainder of `dt_ms` is discarded.
    pub fn update<R: Rng>(&mut self, state: &mut GameState, dt_ms: u64, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();
        if !self.running {
            return result;
        }

        let mut remaining = dt_ms.min(MAX_FRAME_DT_MS);
        while remaining > 0 {
            let until_tick = self.tick_interval_ms - self.tick_elapsed_ms;
            let until_spawn = self.spawn_interval_ms - self.spawn_elapsed_ms;
            let step = remaining.min(until_tick).min(until_spawn);

            self.tick_elapsed_ms += step;
            self.spawn_elapsed_ms += step;
            remaining -= step;

            if self.spawn_elapsed_ms >= self.spawn_interval_ms {
                self.spawn_elapsed_ms = 0;
                state.spawn_pipe_pair(rng);
                result.pairs_spawned += 1;
            }

            if self.tick_elapsed_ms >= self.tick_interval_ms {
                self.tick_elapsed_ms = 0;

                let score_before = state.score;
                state.advance();
                self.tick_count += 1;
                result.ticks += 1;
                result.pipes_passed +=
                    ((state.score - score_before) / SCORE_PER_PIPE).round() as u32;

                if state.game_over {
                    self.running = false;
                    result.game_over = true;
                    break;
                }
            }
        }

        result
    }
}
