//! Integration test: timed sessions
//!
//! Drives `CoreGame` the way the terminal loop does, frame by frame, and
//! checks timer cadence, scoring over many pipes, and the pipe list size.

use flappy::config::GameConfig;
use flappy::core::{CoreGame, PipeKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME_MS: u64 = 16;

/// Park the bird in the middle of the upcoming gap before each frame.
fn steer_into_gap(game: &mut CoreGame) {
    let target = game
        .state()
        .next_pipe(PipeKind::Bottom)
        .map(|p| p.y - 80)
        .unwrap_or(300);
    let state = game.state_mut();
    state.bird.y = target;
    state.bird.velocity = -1;
}

fn play_steered(game: &mut CoreGame, rng: &mut ChaCha8Rng, total_ms: u64) {
    let mut elapsed = 0;
    while elapsed < total_ms {
        steer_into_gap(game);
        let result = game.frame(FRAME_MS, rng);
        assert!(!result.game_over, "steered bird crashed at {}ms", elapsed);
        elapsed += FRAME_MS;
    }
}

#[test]
fn test_spawn_cadence_over_one_minute() {
    let mut game = CoreGame::new(&GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut spawned = 0;
    let mut ticks = 0;

    let mut elapsed = 0;
    while elapsed < 60_000 {
        steer_into_gap(&mut game);
        let result = game.frame(10, &mut rng);
        spawned += result.pairs_spawned;
        ticks += result.ticks;
        elapsed += 10;
    }

    assert_eq!(spawned, 40);
    assert_eq!(ticks, 3750);
}

#[test]
fn test_score_counts_whole_pairs() {
    let mut game = CoreGame::new(&GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    play_steered(&mut game, &mut rng, 60_000);

    let state = game.state();
    assert!(state.score >= 30.0, "score was {}", state.score);
    assert_eq!(state.score.fract(), 0.0);
    assert_eq!(state.best_score, state.score);
}

#[test]
fn test_eviction_bounds_pipe_list() {
    let mut game = CoreGame::new(&GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let mut peak = 0;
    let mut elapsed = 0;
    while elapsed < 120_000 {
        steer_into_gap(&mut game);
        game.frame(FRAME_MS, &mut rng);
        peak = peak.max(game.state().pipes.len());
        elapsed += FRAME_MS;
    }

    // A pair lives for ~1.6 s on screen and one spawns every 1.5 s
    assert!(peak <= 6, "peak pipe count {}", peak);
    assert!(game.state().pipes.iter().all(|p| p.x + p.width >= 0));
}

#[test]
fn test_without_eviction_pipes_accumulate() {
    let config = GameConfig {
        evict_offscreen_pipes: false,
        ..GameConfig::default()
    };
    let mut game = CoreGame::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    play_steered(&mut game, &mut rng, 30_000);

    assert_eq!(game.state().pipes.len(), 40);
}

#[test]
fn test_nothing_moves_after_crash_until_restart() {
    let mut game = CoreGame::new(&GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let mut crashed = false;
    for _ in 0..10_000 {
        if game.frame(FRAME_MS, &mut rng).game_over {
            crashed = true;
            break;
        }
    }
    assert!(crashed);

    let frozen = game.state().snapshot();
    for _ in 0..200 {
        let result = game.frame(FRAME_MS, &mut rng);
        assert!(result.is_empty());
    }
    assert_eq!(game.state().snapshot(), frozen);

    // Jump is ignored while crashed; the action restarts instead
    game.primary_action();
    assert!(!game.state().game_over);
    assert!(game.is_running());
    assert_eq!(game.state().score, 0.0);

    let result = game.frame(FRAME_MS, &mut rng);
    assert_eq!(result.ticks, 1);
}

#[test]
fn test_first_spawn_after_restart_waits_full_interval() {
    let mut game = CoreGame::new(&GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    // Run 1 s, then crash the bird by dropping it onto the floor
    for _ in 0..62 {
        steer_into_gap(&mut game);
        game.frame(FRAME_MS, &mut rng);
    }
    let floor = game.state().floor_y();
    game.state_mut().bird.y = floor;
    game.state_mut().bird.velocity = 5;
    assert!(game.frame(FRAME_MS, &mut rng).game_over);

    game.primary_action();

    let mut spawned_at = None;
    let mut elapsed = 0;
    while elapsed < 3_000 && spawned_at.is_none() {
        steer_into_gap(&mut game);
        let result = game.frame(10, &mut rng);
        elapsed += 10;
        if result.pairs_spawned > 0 {
            spawned_at = Some(elapsed);
        }
    }
    assert_eq!(spawned_at, Some(1_500));
}
