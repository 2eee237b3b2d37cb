//! Turn-based encounter engine.
//!
//! Free functions in [`initializer`], [`resolver`], [`outcome`] and
//! [`rewards`] are pure transitions over `&mut Encounter` and
//! `&mut PlayerRecord`. [`CombatSession`] wraps them behind the command
//! surface and turns results into notifications.

pub mod events;
pub mod initializer;
pub mod notify;
pub mod outcome;
pub mod resolver;
pub mod rewards;
pub mod session;
pub mod skills;
pub mod status;
pub mod types;

pub use events::{CombatCommand, CombatEvent};
pub use initializer::start_encounter;
pub use notify::{Notification, NotificationSink, NullSink, Severity};
pub use outcome::{check_outcome, conclude, detect_outcome, end_combat};
pub use resolver::{end_turn, enemy_turn, flee, player_attack, use_skill};
pub use rewards::collect_loot;
pub use session::CombatSession;
pub use skills::{EffectTemplate, Skill, SkillKind};
pub use status::tick_status_effects;
pub use types::*;
