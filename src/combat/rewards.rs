//! Reward distribution for won encounters.

use super::types::{now_millis, CombatResult, Encounter, RewardSummary};
use crate::character::PlayerRecord;
use crate::core::error::CombatError;
use crate::core::rng::CombatRng;

/// Rolls essence, experience and item drops for every enemy in the roster.
///
/// Draws happen per enemy in roster order: essence, experience, then the
/// drop check and pick for enemies that carry a drop table.
pub fn roll_rewards(encounter: &Encounter, rng: &mut impl CombatRng) -> RewardSummary {
    let mut summary = RewardSummary::default();
    for enemy in &encounter.enemies {
        summary.essence += enemy.essence_reward.roll(rng) as u64;
        summary.experience += enemy.experience_reward.roll(rng) as u64;

        if enemy.drop_table.is_empty() {
            continue;
        }
        if rng.roll_chance(enemy.drop_chance) {
            let index = rng.pick_index(enemy.drop_table.len());
            if let Some(entry) = enemy.drop_table.get(index) {
                summary.items.push(entry.clone());
            }
        }
    }
    summary
}

/// Grants the rewards of a victory to the player. Succeeds once per encounter.
pub fn collect_loot(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    rng: &mut impl CombatRng,
) -> Result<RewardSummary, CombatError> {
    if encounter.active || encounter.result != Some(CombatResult::Victory) {
        return Err(CombatError::NothingToCollect);
    }
    if encounter.loot_collected {
        return Err(CombatError::LootAlreadyCollected);
    }

    let summary = roll_rewards(encounter, rng);
    let now = now_millis();

    player.experience += summary.experience;
    player.essence += summary.essence;
    for item in &summary.items {
        player.inventory.add(item, now, &encounter.location);
    }
    player.stats.combats_won += 1;
    player.stats.total_essence_from_combat += summary.essence;

    encounter.loot_collected = true;
    encounter.rewards = Some(summary.clone());

    tracing::info!(
        encounter = %encounter.id,
        essence = summary.essence,
        experience = summary.experience,
        items = summary.items.len(),
        "loot collected"
    );
    Ok(summary)
}

/// One-line description of a reward summary.
pub fn describe_rewards(summary: &RewardSummary) -> String {
    let mut message = format!(
        "Collected {} essence and {} experience",
        summary.essence, summary.experience
    );
    if !summary.items.is_empty() {
        let items: Vec<String> = summary
            .items
            .iter()
            .map(|item| {
                if item.quantity > 1 {
                    format!("{} x{}", item.name, item.quantity)
                } else {
                    item.name.clone()
                }
            })
            .collect();
        message.push_str(&format!(", plus {}", items.join(", ")));
    }
    message.push('.');
    message
}
