//! Game state: the bird, the pipes, and the score.

use super::geometry::Rect;
use crate::config::GameConfig;
use serde::Serialize;

/// The player-controlled bird. `x` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in pixels per tick (positive = downward).
    pub velocity: i32,
}

impl Bird {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the bird's x is past the pipe's trailing edge. Measured from
    /// the bird's left edge, not its right edge, as in the classic game.
    pub fn has_cleared(&self, pipe: &Pipe) -> bool {
        self.x > pipe.trailing_edge()
    }

    /// True if the bird's box overlaps the pipe's box.
    pub fn hits(&self, pipe: &Pipe) -> bool {
        self.rect().intersects(&pipe.rect())
    }
}

/// Which half of a pipe pair a pipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipeKind {
    /// Hangs from above; its bottom edge is the top of the gap.
    Top,
    /// Rises from below; its top edge is the bottom of the gap.
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    pub kind: PipeKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Set the first tick the bird clears this pipe's trailing edge.
    pub passed: bool,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Right edge, the last part of the pipe the bird has to clear.
    pub fn trailing_edge(&self) -> i32 {
        self.x + self.width
    }
}

/// Everything the tick and input handlers mutate.
#[derive(Debug, Clone)]
pub struct GameState {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    /// Grows by 0.5 per pipe passed, so one full pair is worth 1.0.
    pub score: f64,
    /// Highest score reached since the process started.
    pub best_score: f64,
    /// Latches true on a crash; only `restart` clears it.
    pub game_over: bool,

    // Cached tunables
    /// Where the bird's top edge sits at the start of every game.
    pub bird_start_y: i32,
    pub board_width: i32,
    pub board_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,
    pub pipe_gap: i32,
    pub velocity_x: i32,
    pub gravity: i32,
    pub jump_velocity: i32,
    pub evict_offscreen_pipes: bool,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Bird {
                x: config.bird_x,
                y: config.bird_start_y(),
                width: config.bird_width,
                height: config.bird_height,
                velocity: 0,
            },
            pipes: Vec::new(),
            score: 0.0,
            best_score: 0.0,
            game_over: false,

            bird_start_y: config.bird_start_y(),
            board_width: config.board_width,
            board_height: config.board_height,
            pipe_width: config.pipe_width,
            pipe_height: config.pipe_height,
            pipe_gap: config.pipe_gap,
            velocity_x: config.velocity_x,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            evict_offscreen_pipes: config.evict_offscreen_pipes,
        }
    }

    /// Put the bird back at its start, clear pipes, and zero the score.
    /// `best_score` is kept.
    pub fn restart(&mut self) {
        self.bird.y = self.bird_start_y;
        self.bird.velocity = 0;
        self.pipes.clear();
        self.game_over = false;
        self.score = 0.0;
    }

    /// Lowest y the bird's top edge may reach.
    pub fn floor_y(&self) -> i32 {
        self.board_height - self.bird.height
    }

    /// Score as the whole number shown to the player.
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// The first pipe of `kind` that the bird has not yet fully cleared.
    pub fn next_pipe(&self, kind: PipeKind) -> Option<&Pipe> {
        self.pipes
            .iter()
            .find(|p| p.kind == kind && p.trailing_edge() >= self.bird.x)
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            bird: self.bird.rect(),
            bird_velocity: self.bird.velocity,
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeSnapshot {
                    kind: p.kind,
                    rect: p.rect(),
                    passed: p.passed,
                })
                .collect(),
            score: self.score,
            best_score: self.best_score,
            game_over: self.game_over,
            board_width: self.board_width,
            board_height: self.board_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeSnapshot {
    pub kind: PipeKind,
    pub rect: Rect,
    pub passed: bool,
}

/// Frame-ready copy of the state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub bird: Rect,
    pub bird_velocity: i32,
    pub pipes: Vec<PipeSnapshot>,
    pub score: f64,
    pub best_score: f64,
    pub game_over: bool,
    pub board_width: i32,
    pub board_height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.bird.x, 45);
        assert_eq!(state.bird.y, 320);
        assert_eq!(state.bird.width, 34);
        assert_eq!(state.bird.height, 24);
        assert_eq!(state.bird.velocity, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0.0);
        assert!(!state.game_over);
        assert_eq!(state.floor_y(), 616);
    }

    #[test]
    fn test_restart_keeps_best_score() {
        let mut state = GameState::new(&GameConfig::default());
        state.bird.y = 600;
        state.bird.velocity = 7;
        state.score = 3.5;
        state.best_score = 3.5;
        state.game_over = true;
        state.pipes.push(Pipe {
            kind: PipeKind::Top,
            x: 10,
            y: -100,
            width: 64,
            height: 512,
            passed: true,
        });

        state.restart();

        assert_eq!(state.bird.y, 320);
        assert_eq!(state.bird.velocity, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0.0);
        assert!(!state.game_over);
        assert_eq!(state.best_score, 3.5);
    }

    #[test]
    fn test_restart_returns_to_configured_start() {
        let config = GameConfig {
            board_height: 500,
            ..GameConfig::default()
        };
        let mut state = GameState::new(&config);
        assert_eq!(state.bird.y, 250);

        state.bird.y = 40;
        state.game_over = true;
        state.restart();
        assert_eq!(state.bird.y, state.bird_start_y);
        assert_eq!(state.bird.y, 250);
    }

    #[test]
    fn test_bird_clears_pipe_from_its_left_edge() {
        let state = GameState::new(&GameConfig::default());
        let mut pipe = Pipe {
            kind: PipeKind::Bottom,
            x: 0,
            y: 600,
            width: 64,
            height: 512,
            passed: false,
        };
        // Right edge 79 is past the trailing edge 64, left edge 45 is not
        assert!(!state.bird.has_cleared(&pipe));
        pipe.x = -20;
        assert!(state.bird.has_cleared(&pipe));
    }

    #[test]
    fn test_bird_hits_overlapping_pipe_only() {
        let state = GameState::new(&GameConfig::default());
        let mut pipe = Pipe {
            kind: PipeKind::Bottom,
            x: 40,
            y: 330,
            width: 64,
            height: 512,
            passed: false,
        };
        assert!(state.bird.hits(&pipe));
        // Top of the pipe exactly at the bird's bottom edge (344)
        pipe.y = 344;
        assert!(!state.bird.hits(&pipe));
    }

    #[test]
    fn test_display_score_floors_half_points() {
        let mut state = GameState::new(&GameConfig::default());
        state.score = 2.5;
        assert_eq!(state.display_score(), 2);
        state.score = 3.0;
        assert_eq!(state.display_score(), 3);
    }

    #[test]
    fn test_next_pipe_skips_cleared_pipes() {
        let mut state = GameState::new(&GameConfig::default());
        let behind = Pipe {
            kind: PipeKind::Bottom,
            x: -30,
            y: 400,
            width: 64,
            height: 512,
            passed: true,
        };
        let ahead = Pipe { x: 200, ..behind.clone() };
        state.pipes.push(behind);
        state.pipes.push(ahead);

        let next = state.next_pipe(PipeKind::Bottom).unwrap();
        assert_eq!(next.x, 200);
        assert!(state.next_pipe(PipeKind::Top).is_none());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(&GameConfig::default());
        state.pipes.push(Pipe {
            kind: PipeKind::Top,
            x: 300,
            y: -412,
            width: 64,
            height: 512,
            passed: false,
        });
        state.score = 1.0;

        let snap = state.snapshot();
        assert_eq!(snap.bird, Rect::new(45, 320, 34, 24));
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].rect, Rect::new(300, -412, 64, 512));
        assert_eq!(snap.pipes[0].kind, PipeKind::Top);
        assert_eq!(snap.score, 1.0);
        assert!(!snap.game_over);
    }
}
