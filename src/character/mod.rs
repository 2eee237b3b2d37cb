//! Player record, attributes, and lifetime combat statistics.

pub mod attributes;
pub mod player;
pub mod stats;

pub use attributes::{AttributeType, Attributes};
pub use player::PlayerRecord;
pub use stats::{CombatStats, DeathRecord};
