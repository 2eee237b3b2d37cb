//! Skirmish - turn-based encounter engine for an incremental RPG.
//!
//! The engine starts encounters from enemy rosters, resolves player and
//! enemy actions, tracks status effects, detects victory and defeat, and
//! distributes rewards. All state transitions are synchronous and take the
//! random source as a parameter, so tests can script every draw.

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod simulator;
