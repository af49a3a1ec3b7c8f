use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Operational notice shown on the admin dashboard, e.g. a burst of
/// rejected reviews or a failing upstream.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: i32,
    pub message: String,
    pub level: AlertLevel,
    pub status: AlertStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }
}

impl Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AlertLevel {
    fn from(s: &str) -> Self {
        match s {
            "warning" => AlertLevel::Warning,
            "critical" => AlertLevel::Critical,
            _ => AlertLevel::Info,
        }
    }
}

/// Lifecycle: active until an admin acknowledges it, resolved once the
/// underlying condition is handled.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertStatus {
    #[default]
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }
}

impl Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AlertStatus {
    fn from(s: &str) -> Self {
        match s {
            "acknowledged" => AlertStatus::Acknowledged,
            "resolved" => AlertStatus::Resolved,
            _ => AlertStatus::Active,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAlert {
    pub message: String,
    pub level: AlertLevel,
}
