//! Headless simulator for tuning the game.
//!
//! Plays many games with a scripted autopilot to see how a set of tunables
//! feels: how long games last, how scores spread, and how large the pipe
//! list grows.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::{should_jump, AUTOPILOT_MARGIN};
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
