//! Command dispatch over a single owned encounter.
//!
//! The session owns the player record and at most one encounter. Each
//! command is resolved to completion, including any follow-up work it
//! schedules (the automatic enemy turn), before `dispatch` returns.

use std::collections::VecDeque;

use super::events::{CombatCommand, CombatEvent};
use super::initializer::start_encounter;
use super::notify::{Notification, NotificationSink, NullSink};
use super::outcome::end_combat;
use super::resolver::{end_turn, enemy_turn, flee, player_attack, use_skill};
use super::rewards::{collect_loot, describe_rewards};
use super::types::{Actor, CombatResult, Encounter, EnemyTemplate};
use crate::character::PlayerRecord;
use crate::core::config::CombatConfig;
use crate::core::error::CombatError;
use crate::core::rng::CombatRng;

/// Work items drained by the dispatch loop.
#[derive(Debug, Clone)]
enum Step {
    Command(CombatCommand),
    EnemyTurn,
}

pub struct CombatSession<S: NotificationSink = NullSink> {
    player: PlayerRecord,
    encounter: Option<Encounter>,
    config: CombatConfig,
    queue: VecDeque<Step>,
    sink: S,
}

impl CombatSession<NullSink> {
    pub fn new(player: PlayerRecord, config: CombatConfig) -> Self {
        Self::with_sink(player, config, NullSink)
    }
}

impl<S: NotificationSink> CombatSession<S> {
    pub fn with_sink(player: PlayerRecord, config: CombatConfig, sink: S) -> Self {
        Self {
            player,
            encounter: None,
            config,
            queue: VecDeque::new(),
            sink,
        }
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    /// Mutable access for the external store between encounters.
    pub fn player_mut(&mut self) -> &mut PlayerRecord {
        &mut self.player
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Processes one command and every follow-up it triggers.
    ///
    /// Rejected commands never escape as errors: they become a warning or
    /// error notification and leave state untouched.
    pub fn dispatch(
        &mut self,
        command: CombatCommand,
        rng: &mut impl CombatRng,
    ) -> Vec<Notification> {
        self.queue.push_back(Step::Command(command));
        self.drain(rng)
    }

    /// Resolves a pending enemy turn. Only needed with `auto_enemy_turn` off.
    pub fn resolve_enemy_turn(&mut self, rng: &mut impl CombatRng) -> Vec<Notification> {
        self.queue.push_back(Step::EnemyTurn);
        self.drain(rng)
    }

    /// Takes a finished encounter out of the session so a new one can start.
    pub fn leave_combat(&mut self) -> Result<Encounter, CombatError> {
        match self.encounter.as_ref().map(|e| e.active) {
            None => Err(CombatError::NotActive),
            Some(true) => Err(CombatError::StillActive),
            Some(false) => self.encounter.take().ok_or(CombatError::NotActive),
        }
    }

    fn drain(&mut self, rng: &mut impl CombatRng) -> Vec<Notification> {
        let mut notifications = Vec::new();
        while let Some(step) = self.queue.pop_front() {
            let label = match &step {
                Step::Command(command) => command.name(),
                Step::EnemyTurn => "enemy_turn",
            };
            match self.run(step, rng) {
                Ok(events) => {
                    for event in &events {
                        if let Some(notification) = self.notification_for(event) {
                            notifications.push(notification);
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(command = label, error = %err, "command rejected");
                    notifications.push(Notification::from_error(&err, &self.config));
                }
            }
            self.schedule_follow_up();
        }

        for notification in &notifications {
            self.sink.notify(notification.clone());
        }
        notifications
    }

    fn schedule_follow_up(&mut self) {
        if !self.config.auto_enemy_turn {
            return;
        }
        let enemy_to_act = self
            .encounter
            .as_ref()
            .is_some_and(|e| e.active && e.current_actor == Actor::Enemy);
        let already_queued = self.queue.iter().any(|s| matches!(s, Step::EnemyTurn));
        if enemy_to_act && !already_queued {
            self.queue.push_back(Step::EnemyTurn);
        }
    }

    fn parts(
        &mut self,
    ) -> Result<(&mut Encounter, &mut PlayerRecord, &CombatConfig), CombatError> {
        let encounter = self.encounter.as_mut().ok_or(CombatError::NotActive)?;
        Ok((encounter, &mut self.player, &self.config))
    }

    fn start(
        &mut self,
        enemies: Vec<EnemyTemplate>,
        location: String,
        ambush: bool,
        rng: &mut impl CombatRng,
    ) -> Result<Vec<CombatEvent>, CombatError> {
        if self.encounter.as_ref().is_some_and(|e| e.active) {
            return Err(CombatError::AlreadyInCombat);
        }
        let encounter =
            start_encounter(&enemies, &location, ambush, &self.player, &self.config, rng)?;
        let event = CombatEvent::EncounterStarted {
            location,
            enemy_count: encounter.enemies.len(),
            ambush,
        };
        self.encounter = Some(encounter);
        Ok(vec![event])
    }

    fn run(
        &mut self,
        step: Step,
        rng: &mut impl CombatRng,
    ) -> Result<Vec<CombatEvent>, CombatError> {
        let command = match step {
            Step::EnemyTurn => {
                let (encounter, player, _) = self.parts()?;
                return enemy_turn(encounter, player, rng);
            }
            Step::Command(command) => command,
        };

        match command {
            CombatCommand::StartEncounter {
                enemies,
                location,
                ambush,
            } => self.start(enemies, location, ambush, rng),
            CombatCommand::Attack { target_id } => {
                let (encounter, player, config) = self.parts()?;
                player_attack(encounter, player, config, &target_id, rng)
            }
            CombatCommand::UseSkill {
                skill_id,
                target_ids,
            } => {
                let (encounter, player, _) = self.parts()?;
                use_skill(encounter, player, &skill_id, &target_ids)
            }
            CombatCommand::EndTurn => {
                let (encounter, _, _) = self.parts()?;
                end_turn(encounter)
            }
            CombatCommand::Flee => {
                let (encounter, player, config) = self.parts()?;
                flee(encounter, player, config, rng)
            }
            CombatCommand::EndCombat { result } => {
                let (encounter, player, _) = self.parts()?;
                end_combat(encounter, player, result)
            }
            CombatCommand::CollectLoot => {
                let (encounter, player, _) = self.parts()?;
                let rewards = collect_loot(encounter, player, rng)?;
                Ok(vec![CombatEvent::LootCollected { rewards }])
            }
        }
    }

    fn notification_for(&self, event: &CombatEvent) -> Option<Notification> {
        let config = &self.config;
        let notification = match event {
            CombatEvent::EncounterStarted {
                location, ambush, ..
            } => {
                if *ambush {
                    Notification::warning(format!("Ambushed at {}!", location), config)
                } else {
                    Notification::info(format!("Combat started at {}!", location), config)
                }
            }
            CombatEvent::SkillUsed { skill, .. } => {
                Notification::info(format!("Used {}", skill), config)
            }
            CombatEvent::Healed { amount } => {
                Notification::success(format!("Healed {} health", amount), config)
            }
            CombatEvent::FleeFailed { .. } => {
                Notification::warning("Failed to escape!", config)
            }
            CombatEvent::Concluded { result } => match result {
                CombatResult::Victory => Notification::success("Victory!", config),
                CombatResult::Defeat => Notification::error("You have been defeated", config),
                CombatResult::Fled => Notification::info("You escaped!", config),
            },
            CombatEvent::LootCollected { rewards } => {
                Notification::success(describe_rewards(rewards), config)
            }
            CombatEvent::PlayerAttack { .. }
            | CombatEvent::AreaDamage { .. }
            | CombatEvent::EffectApplied { .. }
            | CombatEvent::EnemyAttack { .. }
            | CombatEvent::TurnPassed => return None,
        };
        Some(notification)
    }
}
