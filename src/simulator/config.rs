//! Simulation configuration.

use crate::core::config::CombatConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of encounters to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Enemies in each encounter's roster
    pub enemies_per_encounter: usize,

    /// Max health of each simulated enemy
    pub enemy_health: u32,

    /// Fixed enemy damage (None = the configured default range)
    pub enemy_damage: Option<u32>,

    /// Loop passes (player actions and manual enemy turns) before an
    /// encounter is abandoned as timed out
    pub max_actions_per_run: u32,

    /// Heal when health drops below this fraction of max
    pub heal_threshold: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,

    /// Combat tuning used by every encounter
    pub combat: CombatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            enemies_per_encounter: 3,
            enemy_health: 25,
            enemy_damage: None,
            max_actions_per_run: 200,
            heal_threshold: 0.3,
            verbosity: 1,
            combat: CombatConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small seeded config for tests and quick checks
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 50,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
