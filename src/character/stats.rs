use serde::{Deserialize, Serialize};

/// How and where the player last fell in combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub cause: String,
    pub location: String,
    pub at: i64,
}

/// Lifetime combat statistics kept on the player record.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so older
/// records still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub total_combats: u64,
    pub combats_won: u64,
    pub combats_lost: u64,
    pub combats_fled: u64,
    pub total_essence_from_combat: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub last_death: Option<DeathRecord>,
}

impl CombatStats {
    pub fn record_death(&mut self, cause: &str, location: &str, at: i64) {
        self.deaths += 1;
        self.last_death = Some(DeathRecord {
            cause: cause.to_string(),
            location: location.to_string(),
            at,
        });
    }
}
