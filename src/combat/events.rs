//! Commands accepted by the engine and events it reports back.

use super::types::{CombatResult, EnemyTemplate, RewardSummary};
use serde::{Deserialize, Serialize};

/// A request from the game session to the combat engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatCommand {
    StartEncounter {
        enemies: Vec<EnemyTemplate>,
        location: String,
        ambush: bool,
    },
    Attack {
        target_id: String,
    },
    UseSkill {
        skill_id: String,
        target_ids: Vec<String>,
    },
    EndTurn,
    Flee,
    EndCombat {
        result: CombatResult,
    },
    CollectLoot,
}

impl CombatCommand {
    pub fn attack(target_id: impl Into<String>) -> Self {
        CombatCommand::Attack {
            target_id: target_id.into(),
        }
    }

    pub fn use_skill(skill_id: impl Into<String>, target_ids: &[&str]) -> Self {
        CombatCommand::UseSkill {
            skill_id: skill_id.into(),
            target_ids: target_ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CombatCommand::StartEncounter { .. } => "start_encounter",
            CombatCommand::Attack { .. } => "attack",
            CombatCommand::UseSkill { .. } => "use_skill",
            CombatCommand::EndTurn => "end_turn",
            CombatCommand::Flee => "flee",
            CombatCommand::EndCombat { .. } => "end_combat",
            CombatCommand::CollectLoot => "collect_loot",
        }
    }
}

/// Something that happened while resolving a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    EncounterStarted {
        location: String,
        enemy_count: usize,
        ambush: bool,
    },
    PlayerAttack {
        target: String,
        damage: u32,
        critical: bool,
    },
    SkillUsed {
        skill: String,
        energy_spent: u32,
    },
    AreaDamage {
        target: String,
        damage: u32,
    },
    Healed {
        amount: u32,
    },
    EffectApplied {
        target: String,
        effect: String,
    },
    EnemyAttack {
        enemy: String,
        damage: u32,
    },
    FleeFailed {
        chance: f64,
    },
    TurnPassed,
    Concluded {
        result: CombatResult,
    },
    LootCollected {
        rewards: RewardSummary,
    },
}
