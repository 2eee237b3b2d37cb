//! Shared constants, configuration, errors and randomness.

pub mod config;
pub mod constants;
pub mod error;
pub mod rng;

pub use config::CombatConfig;
pub use error::{CombatError, ConfigError, ErrorKind};
pub use rng::{CombatRng, ScriptedRng};
