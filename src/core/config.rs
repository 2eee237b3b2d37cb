//! Combat tuning configuration.

use super::constants::*;
use super::error::ConfigError;
use crate::combat::types::RollRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable numbers used by the encounter engine.
///
/// Every field has a default, so a JSON file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Base chance for a basic attack to crit
    pub crit_base_chance: f64,
    /// Added crit chance per point of luck
    pub crit_chance_per_luck: f64,
    /// Crit damage multiplier (result is floored)
    pub crit_multiplier: f64,

    /// Base chance to escape an encounter
    pub flee_base_chance: f64,
    /// Added escape chance per point of dexterity
    pub flee_chance_per_dexterity: f64,
    /// Optional upper bound on the escape chance (None = uncapped)
    pub flee_chance_cap: Option<f64>,

    /// Drop chance for enemies whose template has a drop table but no chance
    pub default_drop_chance: f64,
    /// Damage range for enemies without a base damage
    pub default_enemy_damage: RollRange,
    /// Essence range for enemies without an essence reward
    pub default_essence_reward: RollRange,
    /// Experience range for enemies without an experience reward
    pub default_experience_reward: RollRange,

    pub player_initiative_die: RollRange,
    pub enemy_initiative_die: RollRange,

    pub notify_info_ms: u64,
    pub notify_success_ms: u64,
    pub notify_warning_ms: u64,
    pub notify_error_ms: u64,

    /// Resolve the enemy turn automatically after each player action
    pub auto_enemy_turn: bool,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            crit_base_chance: BASE_CRIT_CHANCE,
            crit_chance_per_luck: CRIT_CHANCE_PER_LUCK,
            crit_multiplier: CRIT_MULTIPLIER,
            flee_base_chance: BASE_FLEE_CHANCE,
            flee_chance_per_dexterity: FLEE_CHANCE_PER_DEXTERITY,
            flee_chance_cap: None,
            default_drop_chance: DEFAULT_DROP_CHANCE,
            default_enemy_damage: RollRange::from(DEFAULT_ENEMY_DAMAGE),
            default_essence_reward: RollRange::from(DEFAULT_ESSENCE_REWARD),
            default_experience_reward: RollRange::from(DEFAULT_EXPERIENCE_REWARD),
            player_initiative_die: RollRange::from(PLAYER_INITIATIVE_DIE),
            enemy_initiative_die: RollRange::from(ENEMY_INITIATIVE_DIE),
            notify_info_ms: NOTIFY_INFO_MS,
            notify_success_ms: NOTIFY_SUCCESS_MS,
            notify_warning_ms: NOTIFY_WARNING_MS,
            notify_error_ms: NOTIFY_ERROR_MS,
            auto_enemy_turn: true,
        }
    }
}

impl CombatConfig {
    /// Config for driving the resolver step by step (no automatic enemy turn).
    pub fn manual_turns() -> Self {
        Self {
            auto_enemy_turn: false,
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("default_enemy_damage", self.default_enemy_damage),
            ("default_essence_reward", self.default_essence_reward),
            ("default_experience_reward", self.default_experience_reward),
            ("player_initiative_die", self.player_initiative_die),
            ("enemy_initiative_die", self.enemy_initiative_die),
        ];
        for (field, range) in ranges {
            if range.min > range.max {
                return Err(ConfigError::InvalidRange {
                    field,
                    lo: range.min,
                    hi: range.max,
                });
            }
        }

        let mut probabilities = vec![
            ("crit_base_chance", self.crit_base_chance),
            ("flee_base_chance", self.flee_base_chance),
            ("default_drop_chance", self.default_drop_chance),
        ];
        if let Some(cap) = self.flee_chance_cap {
            probabilities.push(("flee_chance_cap", cap));
        }
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { field, value });
            }
        }
        Ok(())
    }

    /// Crit chance for the given luck.
    pub fn crit_chance(&self, luck: u32) -> f64 {
        self.crit_base_chance + luck as f64 * self.crit_chance_per_luck
    }

    /// Escape chance for the given dexterity, capped only if a cap is configured.
    pub fn flee_chance(&self, dexterity: u32) -> f64 {
        let chance = self.flee_base_chance + dexterity as f64 * self.flee_chance_per_dexterity;
        match self.flee_chance_cap {
            Some(cap) => chance.min(cap),
            None => chance,
        }
    }
}
