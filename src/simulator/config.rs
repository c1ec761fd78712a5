//! Simulation configuration.

use crate::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a game still in progress is cut off
    pub max_ticks_per_run: u64,

    /// Tunables every simulated game runs with
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 60 * 60 * 5, // five minutes of play at 60 Hz
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch for smoke tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_ticks_per_run: 3_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
