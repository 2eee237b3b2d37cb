//! Simulation runner driving real combat sessions.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::PlayerRecord;
use crate::combat::{
    Actor, CombatCommand, CombatResult, CombatSession, Encounter, EnemyTemplate, Skill, SkillKind,
};
use crate::core::rng::CombatRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const HEAL_SKILL_ID: &str = "mend";

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_encounter(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?} in {} turns, {} essence, {} xp, {} HP left",
                run_idx + 1,
                config.num_runs,
                run.result,
                run.turns,
                run.essence,
                run.experience,
                run.final_health
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

fn sim_player() -> PlayerRecord {
    PlayerRecord::new("Simulated Hero").with_skill(Skill::new(
        HEAL_SKILL_ID,
        "Mend",
        6,
        SkillKind::Healing { base_healing: 10 },
    ))
}

fn sim_roster(config: &SimConfig) -> Vec<EnemyTemplate> {
    (0..config.enemies_per_encounter)
        .map(|i| {
            let template = EnemyTemplate::new(
                format!("enemy-{}", i),
                format!("Raider {}", i + 1),
                config.enemy_health,
            );
            match config.enemy_damage {
                Some(damage) => template.with_damage(damage),
                None => template,
            }
        })
        .collect()
}

/// Policy: heal when low and a heal is affordable, otherwise attack the first
/// living enemy. Returns `None` when the player cannot act.
pub fn choose_command(
    encounter: &Encounter,
    player: &PlayerRecord,
    heal_threshold: f64,
) -> Option<CombatCommand> {
    if !encounter.active || encounter.current_actor != Actor::Player {
        return None;
    }
    let low = (player.health as f64) < player.max_health as f64 * heal_threshold;
    let can_heal = player
        .skill(HEAL_SKILL_ID)
        .is_some_and(|skill| skill.is_healing() && player.energy >= skill.energy_cost);
    if low && can_heal {
        return Some(CombatCommand::use_skill(HEAL_SKILL_ID, &[]));
    }
    encounter
        .living_enemies()
        .next()
        .map(|enemy| CombatCommand::attack(enemy.id.clone()))
}

/// Plays one encounter to completion and collects loot on victory.
pub fn simulate_encounter(config: &SimConfig, rng: &mut impl CombatRng) -> RunStats {
    let mut session = CombatSession::new(sim_player(), config.combat.clone());
    session.dispatch(
        CombatCommand::StartEncounter {
            enemies: sim_roster(config),
            location: "Simulation".to_string(),
            ambush: false,
        },
        rng,
    );

    let mut actions = 0;
    let mut timed_out = false;
    loop {
        let Some(encounter) = session.encounter() else {
            break;
        };
        if !encounter.active {
            break;
        }
        if actions >= config.max_actions_per_run {
            timed_out = true;
            session.dispatch(
                CombatCommand::EndCombat {
                    result: CombatResult::Fled,
                },
                rng,
            );
            break;
        }

        // Every pass counts toward the cap, enemy turns included
        actions += 1;
        match choose_command(encounter, session.player(), config.heal_threshold) {
            Some(command) => {
                session.dispatch(command, rng);
            }
            // Manual enemy turns: drive them from here
            None if encounter.current_actor == Actor::Enemy => {
                session.resolve_enemy_turn(rng);
            }
            None => break,
        }
    }

    let result = session.encounter().and_then(|e| e.result);
    let turns = session.encounter().map_or(0, |e| e.turn_count);
    if result == Some(CombatResult::Victory) {
        session.dispatch(CombatCommand::CollectLoot, rng);
    }

    let player = session.player();
    RunStats {
        result,
        timed_out,
        turns,
        essence: player.essence,
        experience: player.experience,
        items: player.inventory.stacks().iter().map(|s| s.quantity as u64).sum(),
        final_health: player.health,
        max_health: player.max_health,
    }
}
