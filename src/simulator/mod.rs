//! Monte Carlo encounter simulator.
//!
//! Runs many seeded encounters through [`CombatSession`](crate::combat::CombatSession)
//! with a fixed player policy, so balance numbers come from the same code
//! paths real play uses.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{choose_command, run_simulation, simulate_encounter};
