//! Victory and defeat detection, and the bookkeeping that closes an encounter.

use super::events::CombatEvent;
use super::types::{now_millis, CombatResult, Encounter, LogEntry, LogKind};
use crate::character::PlayerRecord;
use crate::core::error::CombatError;

/// Inspects health totals. Defeat takes precedence if both sides are down.
pub fn detect_outcome(encounter: &Encounter, player: &PlayerRecord) -> Option<CombatResult> {
    if !player.is_alive() {
        Some(CombatResult::Defeat)
    } else if encounter.all_enemies_defeated() {
        Some(CombatResult::Victory)
    } else {
        None
    }
}

fn summary_message(result: CombatResult, location: &str) -> String {
    match result {
        CombatResult::Victory => "Victory! All enemies have been defeated.".to_string(),
        CombatResult::Defeat => format!("You were defeated at {}.", location),
        CombatResult::Fled => format!("You escaped from {}.", location),
    }
}

/// Closes an active encounter with the given result.
///
/// Updates aggregate statistics for defeats and flights. Wins are credited
/// when the loot is collected. Calling this on an inactive encounter does
/// nothing and returns `None`.
pub fn conclude(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    result: CombatResult,
) -> Option<CombatEvent> {
    if !encounter.active {
        return None;
    }
    let now = now_millis();
    encounter.active = false;
    encounter.result = Some(result);
    encounter.ended_at = Some(now);

    if !encounter.has_summary_entry() {
        let kind = match result {
            CombatResult::Victory => LogKind::Victory,
            CombatResult::Defeat => LogKind::Defeat,
            CombatResult::Fled => LogKind::Fled,
        };
        let message = summary_message(result, &encounter.location);
        encounter.push_log(LogEntry::new(kind, message, now));
    }

    player.stats.total_combats += 1;
    match result {
        CombatResult::Victory => {}
        CombatResult::Defeat => player.stats.combats_lost += 1,
        CombatResult::Fled => player.stats.combats_fled += 1,
    }

    tracing::info!(
        encounter = %encounter.id,
        result = result.name(),
        turns = encounter.turn_count,
        "encounter concluded"
    );
    Some(CombatEvent::Concluded { result })
}

/// Runs outcome detection and concludes the encounter if it is over.
pub fn check_outcome(encounter: &mut Encounter, player: &mut PlayerRecord) -> Option<CombatEvent> {
    let result = detect_outcome(encounter, player)?;
    conclude(encounter, player, result)
}

/// Forces an active encounter to end with the given result.
pub fn end_combat(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    result: CombatResult,
) -> Result<Vec<CombatEvent>, CombatError> {
    if !encounter.active {
        return Err(match encounter.result {
            Some(existing) => CombatError::AlreadyEnded(existing),
            None => CombatError::NotActive,
        });
    }
    Ok(conclude(encounter, player, result).into_iter().collect())
}
