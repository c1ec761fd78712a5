//! Core game state and logic.

pub mod constants;
pub mod core_game;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;
pub mod geometry;

pub use constants::*;
pub use core_game::CoreGame;
pub use game_loop::{GameClock, TickResult};
pub use game_state::*;
pub use geometry::Rect;
