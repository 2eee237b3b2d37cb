//! Status effect bookkeeping.

use super::types::{Encounter, StatusEffect};

/// Advances every effect by one turn and drops the ones that ran out.
pub fn tick_status_effects(effects: &[StatusEffect]) -> Vec<StatusEffect> {
    effects
        .iter()
        .filter_map(|effect| {
            let remaining = effect.remaining_duration.saturating_sub(1);
            (remaining > 0).then(|| StatusEffect {
                remaining_duration: remaining,
                ..effect.clone()
            })
        })
        .collect()
}

/// Net damage modifier of every active effect on one combatant.
///
/// Each magnitude is fixed when the effect is applied and stays the same
/// until it expires; ticking never compounds it.
pub fn net_magnitude(effects: &[StatusEffect]) -> i32 {
    effects.iter().map(|effect| effect.magnitude).sum()
}

/// Shifts an outgoing damage value by a status modifier, never below zero.
pub fn apply_modifier(base: u32, modifier: i32) -> u32 {
    (i64::from(base) + i64::from(modifier)).clamp(0, i64::from(u32::MAX)) as u32
}

/// Ticks the effects on the player and on every enemy, living or not.
pub fn tick_all(encounter: &mut Encounter) {
    encounter.player.status_effects = tick_status_effects(&encounter.player.status_effects);
    for enemy in &mut encounter.enemies {
        enemy.status_effects = tick_status_effects(&enemy.status_effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(id: &str, duration: u32) -> StatusEffect {
        StatusEffect {
            id: id.to_string(),
            name: id.to_string(),
            remaining_duration: duration,
            magnitude: 1,
        }
    }

    #[test]
    fn test_tick_decrements_durations() {
        let ticked = tick_status_effects(&[effect("a", 3), effect("b", 2)]);
        assert_eq!(ticked.len(), 2);
        assert_eq!(ticked[0].remaining_duration, 2);
        assert_eq!(ticked[1].remaining_duration, 1);
    }

    #[test]
    fn test_tick_removes_expired() {
        let ticked = tick_status_effects(&[effect("a", 1), effect("b", 2), effect("c", 0)]);
        assert_eq!(ticked.len(), 1);
        assert_eq!(ticked[0].id, "b");
        assert_eq!(ticked[0].remaining_duration, 1);
    }

    #[test]
    fn test_tick_preserves_order_and_magnitude() {
        let mut strong = effect("strong", 4);
        strong.magnitude = -3;
        let ticked = tick_status_effects(&[strong, effect("weak", 5)]);
        assert_eq!(ticked[0].id, "strong");
        assert_eq!(ticked[0].magnitude, -3);
        assert_eq!(ticked[1].id, "weak");
    }

    #[test]
    fn test_net_magnitude_sums_effects() {
        let mut hex = effect("hex", 2);
        hex.magnitude = -4;
        assert_eq!(net_magnitude(&[effect("ward", 3), hex]), -3);
        assert_eq!(net_magnitude(&[]), 0);
    }

    #[test]
    fn test_apply_modifier_floors_at_zero() {
        assert_eq!(apply_modifier(5, 3), 8);
        assert_eq!(apply_modifier(5, -2), 3);
        assert_eq!(apply_modifier(2, -7), 0);
        assert_eq!(apply_modifier(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_tick_empty() {
        assert!(tick_status_effects(&[]).is_empty());
    }
}
