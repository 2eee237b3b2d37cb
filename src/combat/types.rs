use crate::core::config::CombatConfig;
use crate::core::rng::CombatRng;
use crate::items::DropEntry;
use serde::{Deserialize, Serialize};

/// Current wall-clock time in unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Inclusive integer range rolled uniformly. A fixed value is `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn fixed(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.min >= self.max
    }

    /// Rolls a value. Fixed ranges return immediately without drawing.
    pub fn roll(&self, rng: &mut impl CombatRng) -> u32 {
        if self.is_fixed() {
            return self.min;
        }
        rng.roll_range(self.min, self.max)
    }
}

impl From<(u32, u32)> for RollRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Player,
    Enemy,
}

impl Actor {
    pub fn other(self) -> Actor {
        match self {
            Actor::Player => Actor::Enemy,
            Actor::Enemy => Actor::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatResult {
    Victory,
    Defeat,
    Fled,
}

impl CombatResult {
    pub fn name(&self) -> &'static str {
        match self {
            CombatResult::Victory => "Victory",
            CombatResult::Defeat => "Defeat",
            CombatResult::Fled => "Fled",
        }
    }
}

/// A timed modifier attached to a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub id: String,
    pub name: String,
    pub remaining_duration: u32,
    pub magnitude: i32,
}

/// Enemy roster entry as provided by content. Optional fields fall back to
/// the configured defaults when the encounter starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub max_health: u32,
    #[serde(default)]
    pub initiative: Option<u32>,
    #[serde(default)]
    pub base_damage: Option<u32>,
    #[serde(default)]
    pub essence_reward: Option<u32>,
    #[serde(default)]
    pub experience_reward: Option<u32>,
    #[serde(default)]
    pub drop_chance: Option<f64>,
    #[serde(default)]
    pub drop_table: Option<Vec<DropEntry>>,
}

impl EnemyTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_health: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_health,
            ..Default::default()
        }
    }

    pub fn with_initiative(mut self, initiative: u32) -> Self {
        self.initiative = Some(initiative);
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.base_damage = Some(damage);
        self
    }

    pub fn with_rewards(mut self, essence: u32, experience: u32) -> Self {
        self.essence_reward = Some(essence);
        self.experience_reward = Some(experience);
        self
    }

    pub fn with_drops(mut self, drop_chance: f64, drop_table: Vec<DropEntry>) -> Self {
        self.drop_chance = Some(drop_chance);
        self.drop_table = Some(drop_table);
        self
    }
}

/// A combatant enemy with every field resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub current_health: u32,
    pub max_health: u32,
    pub initiative: u32,
    pub status_effects: Vec<StatusEffect>,
    pub damage: RollRange,
    pub essence_reward: RollRange,
    pub experience_reward: RollRange,
    pub drop_chance: f64,
    pub drop_table: Vec<DropEntry>,
}

impl Enemy {
    /// Resolves a template against the config, rolling initiative if absent.
    pub fn from_template(
        template: &EnemyTemplate,
        config: &CombatConfig,
        rng: &mut impl CombatRng,
    ) -> Self {
        let initiative = match template.initiative {
            Some(value) => value,
            None => config.enemy_initiative_die.roll(rng),
        };
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            current_health: template.max_health,
            max_health: template.max_health,
            initiative,
            status_effects: Vec::new(),
            damage: template
                .base_damage
                .map_or(config.default_enemy_damage, RollRange::fixed),
            essence_reward: template
                .essence_reward
                .map_or(config.default_essence_reward, RollRange::fixed),
            experience_reward: template
                .experience_reward
                .map_or(config.default_experience_reward, RollRange::fixed),
            drop_chance: template.drop_chance.unwrap_or(config.default_drop_chance),
            drop_table: template.drop_table.clone().unwrap_or_default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Applies damage, floored at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_sub(amount);
        before - self.current_health
    }
}

/// The player's per-encounter combat state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCombatant {
    pub initiative: u32,
    pub status_effects: Vec<StatusEffect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Start,
    PlayerAttack,
    EnemyAttack,
    Skill,
    Heal,
    Buff,
    Debuff,
    FleeFailed,
    TurnEnd,
    Victory,
    Defeat,
    Fled,
}

impl LogKind {
    /// Kinds that close an encounter.
    pub fn is_summary(&self) -> bool {
        matches!(self, LogKind::Victory | LogKind::Defeat | LogKind::Fled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
    pub timestamp: i64,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub damage: Option<u32>,
    #[serde(default)]
    pub healing: Option<u32>,
    #[serde(default)]
    pub critical: bool,
}

impl LogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>, timestamp: i64) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp,
            actor: None,
            damage: None,
            healing: None,
            critical: false,
        }
    }

    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn healing(mut self, healing: u32) -> Self {
        self.healing = Some(healing);
        self
    }

    pub fn critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }
}

/// Rewards granted by a collected victory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSummary {
    pub essence: u64,
    pub experience: u64,
    pub items: Vec<DropEntry>,
}

/// One combat session from start to termination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: String,
    pub active: bool,
    pub turn_count: u32,
    pub current_actor: Actor,
    pub location: String,
    pub started_at: i64,
    #[serde(default)]
    pub ended_at: Option<i64>,
    #[serde(default)]
    pub result: Option<CombatResult>,
    pub log: Vec<LogEntry>,
    #[serde(default)]
    pub loot_collected: bool,
    #[serde(default)]
    pub rewards: Option<RewardSummary>,
    pub player: PlayerCombatant,
    pub enemies: Vec<Enemy>,
}

impl Encounter {
    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: &str) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    pub fn push_log(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    pub fn has_summary_entry(&self) -> bool {
        self.log.iter().any(|e| e.kind.is_summary())
    }

    /// Hands the turn to the other side.
    pub fn advance_turn(&mut self) {
        self.current_actor = self.current_actor.other();
        self.turn_count += 1;
    }
}
