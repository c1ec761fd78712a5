//! Flappy - a terminal side-scroller.
//!
//! The game logic lives in [`crate::core`] and has no terminal dependencies; the
//! `flappy` binary only reads its state and forwards key presses.

pub mod build_info;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod simulator;

pub use config::GameConfig;
pub use crate::core::{CoreGame, GameSnapshot, GameState, TickResult};
