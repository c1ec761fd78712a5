//! Main simulation runner.
//!
//! Every run drives a real `CoreGame` in tick-sized frames, so simulated
//! games follow exactly the same timing as interactive ones.

use super::autopilot::should_jump;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::core_game::CoreGame;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        log::debug!(
            "run {} finished: score {}, ticks {}",
            run_idx + 1,
            run.score,
            run.ticks
        );
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Ticks {}{}",
                run_idx + 1,
                config.num_runs,
                run.score,
                run.ticks,
                if run.timed_out { " (cut off)" } else { "" }
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.max_ticks_per_run)
}

/// Play one game until the bird crashes or the tick cap is reached.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = CoreGame::new(&config.game);
    let frame_ms = config.game.tick_interval_ms;
    let mut ticks = 0u64;
    let mut max_pipes_alive = 0usize;

    while ticks < config.max_ticks_per_run {
        if should_jump(game.state()) {
            game.primary_action();
        }

        let result = game.frame(frame_ms, rng);
        ticks += result.ticks as u64;
        max_pipes_alive = max_pipes_alive.max(game.state().pipes.len());

        if result.game_over {
            break;
        }
    }

    let state = game.state();
    RunStats {
        score: state.display_score(),
        ticks,
        timed_out: !state.game_over,
        max_pipes_alive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig::quick(42);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_runs_respect_tick_cap() {
        let config = SimConfig {
            max_ticks_per_run: 500,
            ..SimConfig::quick(7)
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 10);
        for run in &report.run_stats {
            assert!(run.ticks <= 500);
            if run.timed_out {
                assert_eq!(run.ticks, 500);
            }
        }
    }
}
