//! Builds the opening state of an encounter.

use super::types::{
    now_millis, Actor, Encounter, Enemy, EnemyTemplate, LogEntry, LogKind, PlayerCombatant,
};
use crate::character::PlayerRecord;
use crate::core::config::CombatConfig;
use crate::core::constants::DEXTERITY_PER_INITIATIVE;
use crate::core::error::CombatError;
use crate::core::rng::CombatRng;

/// Player initiative: one initiative die plus a third of dexterity.
pub fn roll_player_initiative(
    player: &PlayerRecord,
    config: &CombatConfig,
    rng: &mut impl CombatRng,
) -> u32 {
    config.player_initiative_die.roll(rng) + player.attributes.dexterity() / DEXTERITY_PER_INITIATIVE
}

/// Picks who acts first. An ambush always hands the opening to the enemies;
/// otherwise the player wins ties against the first enemy in the roster.
pub fn first_actor(ambush: bool, player_initiative: u32, first_enemy_initiative: u32) -> Actor {
    if ambush {
        Actor::Enemy
    } else if player_initiative >= first_enemy_initiative {
        Actor::Player
    } else {
        Actor::Enemy
    }
}

/// Creates a new active encounter from an enemy roster.
///
/// Enemy templates are normalized here so the resolver never has to fall
/// back to defaults mid-turn. A template with zero max health is rejected,
/// since an encounter must open with every enemy still standing.
pub fn start_encounter(
    roster: &[EnemyTemplate],
    location: &str,
    ambush: bool,
    player: &PlayerRecord,
    config: &CombatConfig,
    rng: &mut impl CombatRng,
) -> Result<Encounter, CombatError> {
    if roster.is_empty() {
        return Err(CombatError::EmptyRoster);
    }
    if let Some(template) = roster.iter().find(|t| t.max_health == 0) {
        return Err(CombatError::EnemyWithoutHealth(template.name.clone()));
    }

    let enemies: Vec<Enemy> = roster
        .iter()
        .map(|template| Enemy::from_template(template, config, rng))
        .collect();
    let player_initiative = roll_player_initiative(player, config, rng);
    let current_actor = first_actor(ambush, player_initiative, enemies[0].initiative);

    let now = now_millis();
    let names: Vec<&str> = enemies.iter().map(|e| e.name.as_str()).collect();
    let message = if ambush {
        format!("Ambushed at {} by {}!", location, names.join(", "))
    } else {
        format!("Combat started at {} against {}.", location, names.join(", "))
    };

    let encounter = Encounter {
        id: uuid::Uuid::new_v4().to_string(),
        active: true,
        turn_count: 0,
        current_actor,
        location: location.to_string(),
        started_at: now,
        ended_at: None,
        result: None,
        log: vec![LogEntry::new(LogKind::Start, message, now)],
        loot_collected: false,
        rewards: None,
        player: PlayerCombatant {
            initiative: player_initiative,
            status_effects: Vec::new(),
        },
        enemies,
    };

    tracing::info!(
        encounter = %encounter.id,
        location,
        enemies = encounter.enemies.len(),
        ambush,
        player_initiative,
        first = ?current_actor,
        "encounter started"
    );
    Ok(encounter)
}
