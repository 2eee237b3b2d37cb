//! Player skills usable in combat.

use super::types::StatusEffect;
use serde::{Deserialize, Serialize};

/// Template for a status effect applied by a buff or debuff skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTemplate {
    pub name: String,
    pub duration: u32,
    pub magnitude: i32,
}

impl EffectTemplate {
    pub fn new(name: impl Into<String>, duration: u32, magnitude: i32) -> Self {
        Self {
            name: name.into(),
            duration,
            magnitude,
        }
    }

    /// Creates a fresh effect instance with a unique id.
    pub fn instantiate(&self) -> StatusEffect {
        StatusEffect {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name.clone(),
            remaining_duration: self.duration,
            magnitude: self.magnitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SkillKind {
    /// Damages every living enemy.
    Area { base_damage: u32 },
    /// Restores player health.
    Healing { base_healing: u32 },
    /// Applies an effect to the player.
    Buff { effect: EffectTemplate },
    /// Applies an effect to each targeted enemy.
    Debuff { effect: EffectTemplate },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub energy_cost: u32,
    pub kind: SkillKind,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        energy_cost: u32,
        kind: SkillKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            energy_cost,
            kind,
        }
    }

    pub fn is_healing(&self) -> bool {
        matches!(self.kind, SkillKind::Healing { .. })
    }
}
