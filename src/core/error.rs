//! Error types for rejected combat commands.
//!
//! None of these are fatal. The session turns each one into a notification
//! and leaves state untouched.

use crate::combat::types::CombatResult;

/// Broad category of a rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is invalid for the current state.
    Validation,
    /// The request is well-formed but its precondition no longer holds.
    Precondition,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CombatError {
    #[error("No enemies to fight")]
    EmptyRoster,

    #[error("{0} has no health to fight with")]
    EnemyWithoutHealth(String),

    #[error("No active combat")]
    NotActive,

    #[error("Already in combat")]
    AlreadyInCombat,

    #[error("It is not your turn")]
    NotPlayerTurn,

    #[error("Enemies cannot act right now")]
    NotEnemyTurn,

    #[error("Target {0} not found")]
    TargetNotFound(String),

    #[error("{0} is already defeated")]
    TargetDefeated(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Not enough energy for {skill} ({required} needed, {available} available)")]
    InsufficientEnergy {
        skill: String,
        required: u32,
        available: u32,
    },

    #[error("Combat already ended ({0:?})")]
    AlreadyEnded(CombatResult),

    #[error("No enemies defeated")]
    NothingToCollect,

    #[error("Loot already collected")]
    LootAlreadyCollected,

    #[error("Combat is still in progress")]
    StillActive,
}

impl CombatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombatError::AlreadyEnded(_)
            | CombatError::NothingToCollect
            | CombatError::LootAlreadyCollected
            | CombatError::StillActive => ErrorKind::Precondition,
            _ => ErrorKind::Validation,
        }
    }

    /// Whether the rejection is a soft warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            CombatError::NotPlayerTurn | CombatError::InsufficientEnergy { .. }
        ) || self.kind() == ErrorKind::Precondition
    }
}

/// Errors raised while loading or validating a [`CombatConfig`](super::config::CombatConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid range for {field}: {lo} > {hi}")]
    InvalidRange { field: &'static str, lo: u32, hi: u32 },

    #[error("invalid probability for {field}: {value}")]
    InvalidProbability { field: &'static str, value: f64 },
}
