use super::attributes::Attributes;
use super::stats::CombatStats;
use crate::combat::skills::Skill;
use crate::core::constants::{BASE_PLAYER_ENERGY, BASE_PLAYER_HEALTH, BASE_WEAPON_DAMAGE};
use crate::items::Inventory;
use serde::{Deserialize, Serialize};

/// The persistent player record the combat engine reads and mutates.
///
/// Health and energy live here rather than on the encounter, so damage taken
/// in combat carries over once the encounter is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub experience: u64,
    /// Primary progression currency
    pub essence: u64,
    pub attributes: Attributes,
    /// Damage of the equipped weapon before strength is added
    pub weapon_base_damage: u32,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub stats: CombatStats,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            health: BASE_PLAYER_HEALTH,
            max_health: BASE_PLAYER_HEALTH,
            energy: BASE_PLAYER_ENERGY,
            max_energy: BASE_PLAYER_ENERGY,
            experience: 0,
            essence: 0,
            attributes: Attributes::new(),
            weapon_base_damage: BASE_WEAPON_DAMAGE,
            skills: Vec::new(),
            inventory: Inventory::new(),
            stats: CombatStats::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage, floored at zero health. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }

    /// Restores health up to the maximum. Returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    pub fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }
}
