//! Notification events delivered to the outside world.

use crate::core::config::CombatConfig;
use crate::core::error::CombatError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A short human-readable message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// How long the message should stay visible
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, config: &CombatConfig) -> Self {
        let duration_ms = match severity {
            Severity::Info => config.notify_info_ms,
            Severity::Success => config.notify_success_ms,
            Severity::Warning => config.notify_warning_ms,
            Severity::Error => config.notify_error_ms,
        };
        Self {
            message: message.into(),
            severity,
            duration_ms,
        }
    }

    pub fn info(message: impl Into<String>, config: &CombatConfig) -> Self {
        Self::new(message, Severity::Info, config)
    }

    pub fn success(message: impl Into<String>, config: &CombatConfig) -> Self {
        Self::new(message, Severity::Success, config)
    }

    pub fn warning(message: impl Into<String>, config: &CombatConfig) -> Self {
        Self::new(message, Severity::Warning, config)
    }

    pub fn error(message: impl Into<String>, config: &CombatConfig) -> Self {
        Self::new(message, Severity::Error, config)
    }

    /// Converts a rejected command into its user-facing message.
    pub fn from_error(err: &CombatError, config: &CombatConfig) -> Self {
        let severity = if err.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Self::new(err.to_string(), severity, config)
    }
}

/// Receives notifications as the engine emits them.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _notification: Notification) {}
}
