//! Resolves one actor's action against the current encounter.
//!
//! Every function validates first and mutates only once validation passes, so
//! a rejected action leaves both the encounter and the player untouched.
//! Whenever health changes, the outcome detector runs before the turn is
//! handed over.

use super::events::CombatEvent;
use super::outcome::{check_outcome, conclude};
use super::skills::SkillKind;
use super::status::{apply_modifier, net_magnitude, tick_all};
use super::types::{now_millis, Actor, CombatResult, Encounter, LogEntry, LogKind};
use crate::character::PlayerRecord;
use crate::core::config::CombatConfig;
use crate::core::constants::{
    CONSTITUTION_ARMOR_DIVISOR, INTELLIGENCE_DAMAGE_DIVISOR, MIN_ENEMY_DAMAGE,
    STRENGTH_DAMAGE_DIVISOR, WISDOM_HEALING_DIVISOR,
};
use crate::core::error::CombatError;
use crate::core::rng::CombatRng;

fn ensure_active(encounter: &Encounter) -> Result<(), CombatError> {
    if encounter.active {
        Ok(())
    } else {
        Err(CombatError::NotActive)
    }
}

fn ensure_player_turn(encounter: &Encounter) -> Result<(), CombatError> {
    ensure_active(encounter)?;
    if encounter.current_actor == Actor::Player {
        Ok(())
    } else {
        Err(CombatError::NotPlayerTurn)
    }
}

/// Damage of a basic attack before the crit roll.
pub fn basic_attack_damage(player: &PlayerRecord) -> u32 {
    player.weapon_base_damage + player.attributes.strength() / STRENGTH_DAMAGE_DIVISOR
}

/// Applies the crit multiplier, flooring the result.
pub fn critical_damage(damage: u32, config: &CombatConfig) -> u32 {
    (damage as f64 * config.crit_multiplier).floor() as u32
}

/// Damage an enemy deals after the player's constitution soaks part of it.
pub fn mitigated_enemy_damage(raw: u32, player: &PlayerRecord) -> u32 {
    let armor = player.attributes.constitution() / CONSTITUTION_ARMOR_DIVISOR;
    raw.saturating_sub(armor).max(MIN_ENEMY_DAMAGE)
}

/// Player basic attack against one enemy.
pub fn player_attack(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    config: &CombatConfig,
    target_id: &str,
    rng: &mut impl CombatRng,
) -> Result<Vec<CombatEvent>, CombatError> {
    ensure_player_turn(encounter)?;
    let target = encounter
        .enemy(target_id)
        .ok_or_else(|| CombatError::TargetNotFound(target_id.to_string()))?;
    if !target.is_alive() {
        return Err(CombatError::TargetDefeated(target.name.clone()));
    }

    let base = apply_modifier(
        basic_attack_damage(player),
        net_magnitude(&encounter.player.status_effects),
    );
    let critical = rng.roll_chance(config.crit_chance(player.attributes.luck()));
    let damage = if critical {
        critical_damage(base, config)
    } else {
        base
    };

    let mut events = Vec::new();
    if let Some(target) = encounter.enemy_mut(target_id) {
        target.take_damage(damage);
        let name = target.name.clone();
        let message = if critical {
            format!("Critical hit! You strike {} for {} damage.", name, damage)
        } else {
            format!("You strike {} for {} damage.", name, damage)
        };
        encounter.push_log(
            LogEntry::new(LogKind::PlayerAttack, message, now_millis())
                .actor(player.name.clone())
                .damage(damage)
                .critical(critical),
        );
        tracing::debug!(defender = %name, damage, critical, "player attack");
        events.push(CombatEvent::PlayerAttack {
            target: name,
            damage,
            critical,
        });
    }

    if let Some(event) = check_outcome(encounter, player) {
        events.push(event);
        return Ok(events);
    }
    encounter.advance_turn();
    Ok(events)
}

/// Player skill use. Energy is spent as soon as validation passes.
pub fn use_skill(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    skill_id: &str,
    target_ids: &[String],
) -> Result<Vec<CombatEvent>, CombatError> {
    ensure_player_turn(encounter)?;
    let skill = player
        .skill(skill_id)
        .cloned()
        .ok_or_else(|| CombatError::UnknownSkill(skill_id.to_string()))?;
    if player.energy < skill.energy_cost {
        return Err(CombatError::InsufficientEnergy {
            skill: skill.name,
            required: skill.energy_cost,
            available: player.energy,
        });
    }

    player.energy -= skill.energy_cost;
    let now = now_millis();
    let mut events = vec![CombatEvent::SkillUsed {
        skill: skill.name.clone(),
        energy_spent: skill.energy_cost,
    }];
    tracing::debug!(skill = %skill.id, cost = skill.energy_cost, "skill used");

    match &skill.kind {
        SkillKind::Area { base_damage } => {
            let damage = apply_modifier(
                base_damage + player.attributes.intelligence() / INTELLIGENCE_DAMAGE_DIVISOR,
                net_magnitude(&encounter.player.status_effects),
            );
            for enemy in encounter.enemies.iter_mut().filter(|e| e.is_alive()) {
                enemy.take_damage(damage);
                events.push(CombatEvent::AreaDamage {
                    target: enemy.name.clone(),
                    damage,
                });
            }
            encounter.push_log(
                LogEntry::new(
                    LogKind::Skill,
                    format!("{} hits every enemy for {} damage.", skill.name, damage),
                    now,
                )
                .actor(player.name.clone())
                .damage(damage),
            );
            if let Some(event) = check_outcome(encounter, player) {
                events.push(event);
                return Ok(events);
            }
        }
        SkillKind::Healing { base_healing } => {
            let amount = base_healing + player.attributes.wisdom() / WISDOM_HEALING_DIVISOR;
            let healed = player.heal(amount);
            encounter.push_log(
                LogEntry::new(
                    LogKind::Heal,
                    format!("{} restores {} health.", skill.name, healed),
                    now,
                )
                .actor(player.name.clone())
                .healing(healed),
            );
            events.push(CombatEvent::Healed { amount: healed });
        }
        SkillKind::Buff { effect } => {
            encounter.player.status_effects.push(effect.instantiate());
            encounter.push_log(
                LogEntry::new(
                    LogKind::Buff,
                    format!("{} grants {} for {} turns.", skill.name, effect.name, effect.duration),
                    now,
                )
                .actor(player.name.clone()),
            );
            events.push(CombatEvent::EffectApplied {
                target: player.name.clone(),
                effect: effect.name.clone(),
            });
        }
        SkillKind::Debuff { effect } => {
            for target_id in target_ids {
                let Some(enemy) = encounter.enemy_mut(target_id) else {
                    continue;
                };
                enemy.status_effects.push(effect.instantiate());
                let name = enemy.name.clone();
                encounter.push_log(
                    LogEntry::new(
                        LogKind::Debuff,
                        format!("{} afflicts {} with {}.", skill.name, name, effect.name),
                        now,
                    )
                    .actor(player.name.clone()),
                );
                events.push(CombatEvent::EffectApplied {
                    target: name,
                    effect: effect.name.clone(),
                });
            }
        }
    }

    encounter.advance_turn();
    Ok(events)
}

/// Every living enemy attacks the player once, in roster order. An enemy's
/// own status effects shift its roll before constitution soaks it.
///
/// Stops at the killing blow and concludes the encounter as a defeat. Returns
/// the events plus whether the player died.
fn enemy_strikes(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    rng: &mut impl CombatRng,
) -> (Vec<CombatEvent>, bool) {
    let mut events = Vec::new();
    let attackers: Vec<usize> = encounter
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_alive())
        .map(|(i, _)| i)
        .collect();

    for index in attackers {
        let (name, raw) = {
            let enemy = &encounter.enemies[index];
            let rolled = enemy.damage.roll(rng);
            (
                enemy.name.clone(),
                apply_modifier(rolled, net_magnitude(&enemy.status_effects)),
            )
        };
        let damage = mitigated_enemy_damage(raw, player);
        player.take_damage(damage);
        let now = now_millis();
        encounter.push_log(
            LogEntry::new(
                LogKind::EnemyAttack,
                format!("{} hits you for {} damage.", name, damage),
                now,
            )
            .actor(name.clone())
            .damage(damage),
        );
        tracing::debug!(enemy = %name, damage, health = player.health, "enemy attack");
        events.push(CombatEvent::EnemyAttack {
            enemy: name.clone(),
            damage,
        });

        if !player.is_alive() {
            let location = encounter.location.clone();
            player.stats.record_death(&name, &location, now);
            if let Some(event) = conclude(encounter, player, CombatResult::Defeat) {
                events.push(event);
            }
            return (events, true);
        }
    }
    (events, false)
}

/// The enemy side's turn. Runs without player input.
pub fn enemy_turn(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    rng: &mut impl CombatRng,
) -> Result<Vec<CombatEvent>, CombatError> {
    ensure_active(encounter)?;
    if encounter.current_actor != Actor::Enemy {
        return Err(CombatError::NotEnemyTurn);
    }

    let (events, player_died) = enemy_strikes(encounter, player, rng);
    if !player_died {
        encounter.advance_turn();
    }
    Ok(events)
}

/// Attempts to escape. On failure every living enemy gets a free attack and
/// the turn counter advances without handing over the turn.
pub fn flee(
    encounter: &mut Encounter,
    player: &mut PlayerRecord,
    config: &CombatConfig,
    rng: &mut impl CombatRng,
) -> Result<Vec<CombatEvent>, CombatError> {
    ensure_active(encounter)?;
    let chance = config.flee_chance(player.attributes.dexterity());

    if rng.roll_chance(chance) {
        tracing::debug!(chance, "flee succeeded");
        return Ok(conclude(encounter, player, CombatResult::Fled)
            .into_iter()
            .collect());
    }

    tracing::debug!(chance, "flee failed");
    encounter.push_log(LogEntry::new(
        LogKind::FleeFailed,
        "You failed to escape!",
        now_millis(),
    ));
    let mut events = vec![CombatEvent::FleeFailed { chance }];
    let (strikes, player_died) = enemy_strikes(encounter, player, rng);
    events.extend(strikes);
    if !player_died {
        encounter.turn_count += 1;
    }
    Ok(events)
}

/// Passes the turn. Status effects on every combatant tick down by one.
pub fn end_turn(encounter: &mut Encounter) -> Result<Vec<CombatEvent>, CombatError> {
    ensure_active(encounter)?;
    tick_all(encounter);
    let message = match encounter.current_actor {
        Actor::Player => "You end your turn.",
        Actor::Enemy => "The enemies end their turn.",
    };
    encounter.push_log(LogEntry::new(LogKind::TurnEnd, message, now_millis()));
    encounter.advance_turn();
    Ok(vec![CombatEvent::TurnPassed])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{AttributeType, Attributes};
    use crate::combat::initializer::start_encounter;
    use crate::combat::skills::{EffectTemplate, Skill};
    use crate::combat::types::EnemyTemplate;
    use crate::core::rng::ScriptedRng;

    fn hero(attributes: Attributes) -> PlayerRecord {
        PlayerRecord::new("Hero").with_attributes(attributes)
    }

    fn encounter_with(roster: &[EnemyTemplate], player: &PlayerRecord) -> Encounter {
        // Player initiative die lands on 6 so the player opens
        let mut rng = ScriptedRng::new().with_ints([6]);
        start_encounter(roster, "Test Grounds", false, player, &CombatConfig::default(), &mut rng)
            .unwrap()
    }

    fn goblin(id: &str, hp: u32) -> EnemyTemplate {
        EnemyTemplate::new(id, format!("Goblin {}", id), hp)
            .with_initiative(1)
            .with_damage(2)
    }

    #[test]
    fn test_attack_kills_single_enemy_for_victory() {
        let mut player = hero(Attributes::zeroed().with(AttributeType::Strength, 10));
        let mut encounter = encounter_with(&[goblin("g1", 10)], &player);
        let config = CombatConfig::default();
        let mut rng = ScriptedRng::new().with_units([0.99]);

        let events = player_attack(&mut encounter, &mut player, &config, "g1", &mut rng).unwrap();

        assert_eq!(encounter.enemies[0].current_health, 0);
        assert!(!encounter.active);
        assert_eq!(encounter.result, Some(CombatResult::Victory));
        assert_eq!(encounter.turn_count, 0);
        assert!(events.contains(&CombatEvent::PlayerAttack {
            target: "Goblin g1".to_string(),
            damage: 10,
            critical: false,
        }));
    }

    #[test]
    fn test_attack_flips_turn_when_enemies_remain() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 10), goblin("g2", 10)], &player);
        let config = CombatConfig::default();

        player_attack(&mut encounter, &mut player, &config, "g1", &mut ScriptedRng::new()).unwrap();

        assert_eq!(encounter.enemies[0].current_health, 5);
        assert!(encounter.active);
        assert_eq!(encounter.current_actor, Actor::Enemy);
        assert_eq!(encounter.turn_count, 1);
    }

    #[test]
    fn test_critical_hit_multiplies_and_floors() {
        // 5 + floor(5/2) = 7, crit 7 * 1.5 = 10.5 -> 10
        let mut player = hero(Attributes::zeroed().with(AttributeType::Strength, 5));
        let mut encounter = encounter_with(&[goblin("g1", 30)], &player);
        let config = CombatConfig::default();
        let mut rng = ScriptedRng::new().with_units([0.0]);

        let events = player_attack(&mut encounter, &mut player, &config, "g1", &mut rng).unwrap();

        assert_eq!(encounter.enemies[0].current_health, 20);
        assert!(encounter.log.last().unwrap().critical);
        assert!(matches!(
            events[0],
            CombatEvent::PlayerAttack {
                damage: 10,
                critical: true,
                ..
            }
        ));
    }

    #[test]
    fn test_attack_unknown_target_is_noop() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 10)], &player);
        let before = encounter.clone();

        let err = player_attack(
            &mut encounter,
            &mut player,
            &CombatConfig::default(),
            "nobody",
            &mut ScriptedRng::new(),
        )
        .unwrap_err();

        assert_eq!(err, CombatError::TargetNotFound("nobody".to_string()));
        assert_eq!(encounter, before);
    }

    #[test]
    fn test_attack_out_of_turn_rejected() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 10)], &player);
        encounter.current_actor = Actor::Enemy;

        let err = player_attack(
            &mut encounter,
            &mut player,
            &CombatConfig::default(),
            "g1",
            &mut ScriptedRng::new(),
        )
        .unwrap_err();
        assert_eq!(err, CombatError::NotPlayerTurn);
        assert_eq!(encounter.enemies[0].current_health, 10);
    }

    #[test]
    fn test_enemy_turn_damage_mitigated_with_minimum() {
        // CON 8 -> armor 2; goblins hit for 2 -> floored to 1 each
        let mut player = hero(Attributes::zeroed().with(AttributeType::Constitution, 8));
        let mut encounter = encounter_with(&[goblin("g1", 10), goblin("g2", 10)], &player);
        encounter.current_actor = Actor::Enemy;
        let start_hp = player.health;

        let events = enemy_turn(&mut encounter, &mut player, &mut ScriptedRng::new()).unwrap();

        assert_eq!(player.health, start_hp - 2);
        assert_eq!(events.len(), 2);
        assert_eq!(encounter.current_actor, Actor::Player);
        assert_eq!(encounter.turn_count, 1);
    }

    #[test]
    fn test_enemy_turn_default_damage_rolled() {
        let mut player = hero(Attributes::zeroed());
        let roster = [EnemyTemplate::new("s1", "Slime", 5).with_initiative(1)];
        let mut encounter = encounter_with(&roster, &player);
        encounter.current_actor = Actor::Enemy;
        let start_hp = player.health;

        enemy_turn(&mut encounter, &mut player, &mut ScriptedRng::new().with_ints([3])).unwrap();
        assert_eq!(player.health, start_hp - 3);
    }

    #[test]
    fn test_dead_enemies_do_not_attack() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 10), goblin("g2", 10)], &player);
        encounter.enemies[0].current_health = 0;
        encounter.current_actor = Actor::Enemy;

        let events = enemy_turn(&mut encounter, &mut player, &mut ScriptedRng::new()).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_enemy_turn_defeat_records_death() {
        let mut player = hero(Attributes::zeroed());
        player.health = 3;
        let mut encounter = encounter_with(&[goblin("g1", 10), goblin("g2", 10)], &player);
        encounter.current_actor = Actor::Enemy;

        enemy_turn(&mut encounter, &mut player, &mut ScriptedRng::new()).unwrap();

        assert_eq!(player.health, 0);
        assert!(!encounter.active);
        assert_eq!(encounter.result, Some(CombatResult::Defeat));
        assert_eq!(player.stats.deaths, 1);
        assert_eq!(player.stats.combats_lost, 1);
        let death = player.stats.last_death.as_ref().unwrap();
        assert_eq!(death.cause, "Goblin g2");
        assert_eq!(death.location, "Test Grounds");
    }

    #[test]
    fn test_enemy_turn_requires_enemy_actor() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 10)], &player);
        let err = enemy_turn(&mut encounter, &mut player, &mut ScriptedRng::new()).unwrap_err();
        assert_eq!(err, CombatError::NotEnemyTurn);
    }

    #[test]
    fn test_flee_success() {
        let mut player = hero(Attributes::zeroed().with(AttributeType::Dexterity, 10));
        let mut encounter = encounter_with(&[goblin("g1", 10)], &player);
        let mut rng = ScriptedRng::new().with_units([0.4]);

        flee(&mut encounter, &mut player, &CombatConfig::default(), &mut rng).unwrap();

        assert!(!encounter.active);
        assert_eq!(encounter.result, Some(CombatResult::Fled));
        assert_eq!(player.stats.combats_fled, 1);
    }

    #[test]
    fn test_flee_failure_grants_free_attacks() {
        let mut player = hero(Attributes::zeroed().with(AttributeType::Dexterity, 10));
        let mut encounter = encounter_with(&[goblin("g1", 10), goblin("g2", 10)], &player);
        let start_hp = player.health;
        let mut rng = ScriptedRng::new().with_units([0.6]);

        let events = flee(&mut encounter, &mut player, &CombatConfig::default(), &mut rng).unwrap();

        assert!(encounter.active);
        assert_eq!(encounter.turn_count, 1);
        assert_eq!(encounter.current_actor, Actor::Player);
        assert_eq!(player.health, start_hp - 4);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, CombatEvent::EnemyAttack { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_area_skill_can_win() {
        let mut player = hero(Attributes::zeroed().with(AttributeType::Intelligence, 4))
            .with_skill(Skill::new("quake", "Quake", 5, SkillKind::Area { base_damage: 4 }));
        let mut encounter = encounter_with(&[goblin("g1", 6), goblin("g2", 6)], &player);
        let energy = player.energy;

        use_skill(&mut encounter, &mut player, "quake", &[]).unwrap();

        assert_eq!(player.energy, energy - 5);
        assert_eq!(encounter.result, Some(CombatResult::Victory));
        assert_eq!(encounter.turn_count, 0);
    }

    #[test]
    fn test_area_skill_without_victory_flips_turn() {
        let mut player = hero(Attributes::zeroed())
            .with_skill(Skill::new("quake", "Quake", 5, SkillKind::Area { base_damage: 4 }));
        let mut encounter = encounter_with(&[goblin("g1", 6), goblin("g2", 3)], &player);

        use_skill(&mut encounter, &mut player, "quake", &[]).unwrap();

        assert_eq!(encounter.enemies[0].current_health, 2);
        assert_eq!(encounter.enemies[1].current_health, 0);
        assert!(encounter.active);
        assert_eq!(encounter.current_actor, Actor::Enemy);
        assert_eq!(encounter.turn_count, 1);
    }

    #[test]
    fn test_healing_skill_clamps_to_max() {
        let mut player = hero(Attributes::zeroed().with(AttributeType::Wisdom, 6))
            .with_skill(Skill::new("mend", "Mend", 3, SkillKind::Healing { base_healing: 5 }));
        player.health = player.max_health - 4;
        let mut encounter = encounter_with(&[goblin("g1", 6)], &player);

        let events = use_skill(&mut encounter, &mut player, "mend", &[]).unwrap();

        assert_eq!(player.health, player.max_health);
        assert!(events.contains(&CombatEvent::Healed { amount: 4 }));
        assert_eq!(encounter.log.last().unwrap().healing, Some(4));
    }

    #[test]
    fn test_buff_and_debuff_attach_effects() {
        let mut player = hero(Attributes::zeroed())
            .with_skill(Skill::new(
                "ward",
                "Ward",
                2,
                SkillKind::Buff {
                    effect: EffectTemplate::new("Warded", 3, 2),
                },
            ))
            .with_skill(Skill::new(
                "hex",
                "Hex",
                2,
                SkillKind::Debuff {
                    effect: EffectTemplate::new("Hexed", 2, -1),
                },
            ));
        let mut encounter = encounter_with(&[goblin("g1", 6), goblin("g2", 6)], &player);

        use_skill(&mut encounter, &mut player, "ward", &[]).unwrap();
        assert_eq!(encounter.player.status_effects.len(), 1);

        encounter.current_actor = Actor::Player;
        use_skill(
            &mut encounter,
            &mut player,
            "hex",
            &["g2".to_string(), "ghost".to_string()],
        )
        .unwrap();
        assert!(encounter.enemies[0].status_effects.is_empty());
        assert_eq!(encounter.enemies[1].status_effects.len(), 1);
        assert_eq!(encounter.enemies[1].status_effects[0].name, "Hexed");
    }

    #[test]
    fn test_buff_magnitude_raises_attack_until_expiry() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 30)], &player);
        encounter
            .player
            .status_effects
            .push(EffectTemplate::new("Fury", 1, 3).instantiate());
        let config = CombatConfig::default();

        player_attack(&mut encounter, &mut player, &config, "g1", &mut ScriptedRng::new()).unwrap();
        assert_eq!(encounter.enemies[0].current_health, 22);

        // Fury expires on the enemy's end of turn
        end_turn(&mut encounter).unwrap();
        assert!(encounter.player.status_effects.is_empty());

        player_attack(&mut encounter, &mut player, &config, "g1", &mut ScriptedRng::new()).unwrap();
        assert_eq!(encounter.enemies[0].current_health, 17);
    }

    #[test]
    fn test_debuff_magnitude_weakens_enemy_hits() {
        // Hexed goblin: 4 - 3 = 1; untouched goblin hits for 4
        let mut player = hero(Attributes::zeroed()).with_skill(Skill::new(
            "hex",
            "Hex",
            2,
            SkillKind::Debuff {
                effect: EffectTemplate::new("Hexed", 2, -3),
            },
        ));
        let roster = [
            EnemyTemplate::new("g1", "Goblin g1", 10)
                .with_initiative(1)
                .with_damage(4),
            EnemyTemplate::new("g2", "Goblin g2", 10)
                .with_initiative(1)
                .with_damage(4),
        ];
        let mut encounter = encounter_with(&roster, &player);
        let start_hp = player.health;

        use_skill(&mut encounter, &mut player, "hex", &["g1".to_string()]).unwrap();
        assert_eq!(encounter.current_actor, Actor::Enemy);
        enemy_turn(&mut encounter, &mut player, &mut ScriptedRng::new()).unwrap();

        assert_eq!(player.health, start_hp - 5);
        assert_eq!(encounter.enemies[0].status_effects[0].magnitude, -3);
    }

    #[test]
    fn test_skill_validation_leaves_state_untouched() {
        let mut player = hero(Attributes::zeroed())
            .with_skill(Skill::new("nova", "Nova", 100, SkillKind::Area { base_damage: 50 }));
        let mut encounter = encounter_with(&[goblin("g1", 6)], &player);
        let before = encounter.clone();
        let energy = player.energy;

        let err = use_skill(&mut encounter, &mut player, "nova", &[]).unwrap_err();
        assert!(matches!(err, CombatError::InsufficientEnergy { required: 100, .. }));

        let err = use_skill(&mut encounter, &mut player, "missing", &[]).unwrap_err();
        assert_eq!(err, CombatError::UnknownSkill("missing".to_string()));

        assert_eq!(encounter, before);
        assert_eq!(player.energy, energy);
    }

    #[test]
    fn test_end_turn_ticks_effects_and_flips() {
        let player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 6)], &player);
        encounter
            .player
            .status_effects
            .push(EffectTemplate::new("Warded", 1, 2).instantiate());
        encounter.enemies[0]
            .status_effects
            .push(EffectTemplate::new("Hexed", 2, -1).instantiate());
        let hp = player.health;

        end_turn(&mut encounter).unwrap();

        assert!(encounter.player.status_effects.is_empty());
        assert_eq!(encounter.enemies[0].status_effects[0].remaining_duration, 1);
        assert_eq!(encounter.current_actor, Actor::Enemy);
        assert_eq!(encounter.turn_count, 1);
        assert_eq!(player.health, hp);
    }

    #[test]
    fn test_actions_rejected_after_conclusion() {
        let mut player = hero(Attributes::zeroed());
        let mut encounter = encounter_with(&[goblin("g1", 6)], &player);
        conclude(&mut encounter, &mut player, CombatResult::Fled);

        assert_eq!(end_turn(&mut encounter).unwrap_err(), CombatError::NotActive);
        assert_eq!(
            flee(&mut encounter, &mut player, &CombatConfig::default(), &mut ScriptedRng::new())
                .unwrap_err(),
            CombatError::NotActive
        );
    }
}
