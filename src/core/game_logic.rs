//! Per-tick game logic: gravity, pipe scrolling, scoring, and collisions.

use super::constants::SCORE_PER_PIPE;
use super::game_state::{GameState, Pipe, PipeKind};
use rand::Rng;

impl GameState {
    /// Run one fixed-rate tick.
    ///
    /// Order matters and follows the classic game: the bird falls first
    /// (and may hit the floor), then every pipe scrolls, scores and is
    /// tested for collision against the bird's new position.
    pub fn advance(&mut self) {
        self.bird.velocity += self.gravity;
        self.bird.y += self.bird.velocity;

        let floor = self.floor_y();
        if self.bird.y > floor {
            self.bird.y = floor;
            self.game_over = true;
        }

        let bird = &self.bird;
        for pipe in &mut self.pipes {
            pipe.x += self.velocity_x;

            // Left edge of the bird against the pipe's right edge
            if !pipe.passed && bird.has_cleared(pipe) {
                pipe.passed = true;
                self.score += SCORE_PER_PIPE;
            }

            if bird.hits(pipe) {
                self.game_over = true;
            }
        }

        if self.score > self.best_score {
            self.best_score = self.score;
        }

        if self.evict_offscreen_pipes {
            self.evict_offscreen();
        }
    }

    /// Drop pipes whose right edge has scrolled left of the board.
    fn evict_offscreen(&mut self) {
        let before = self.pipes.len();
        self.pipes.retain(|p| p.trailing_edge() >= 0);
        let evicted = before - self.pipes.len();
        if evicted > 0 {
            log::trace!("evicted {} off-screen pipes", evicted);
        }
    }

    /// Append a top/bottom pipe pair at the right edge of the board.
    ///
    /// The gap's upper edge is drawn uniformly from the top half of the
    /// board; the bottom pipe starts `pipe_gap` pixels below it.
    pub fn spawn_pipe_pair<R: Rng>(&mut self, rng: &mut R) {
        let gap_top = rng.gen_range(0..(self.board_height / 2).max(1));

        self.pipes.push(Pipe {
            kind: PipeKind::Top,
            x: self.board_width,
            y: gap_top - self.pipe_height,
            width: self.pipe_width,
            height: self.pipe_height,
            passed: false,
        });
        self.pipes.push(Pipe {
            kind: PipeKind::Bottom,
            x: self.board_width,
            y: gap_top + self.pipe_gap,
            width: self.pipe_width,
            height: self.pipe_height,
            passed: false,
        });

        log::debug!(
            "spawned pipe pair with gap {}..{}",
            gap_top,
            gap_top + self.pipe_gap
        );
    }

    /// Set the bird's velocity to the jump impulse. Ignored after a crash.
    pub fn jump(&mut self) {
        if self.game_over {
            return;
        }
        self.bird.velocity = self.jump_velocity;
    }

    /// The single player input: jump while alive, restart once crashed.
    pub fn primary_action(&mut self) {
        if self.game_over {
            self.restart();
        } else {
            self.jump();
        }
    }
}
