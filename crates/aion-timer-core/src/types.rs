//! Core identifiers and shared types

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Result type for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;

/// Timer error types
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    /// The alarm sink rejected a notice
    #[error("alarm sink failed: {0}")]
    Sink(String),
}

/// Closed set of tracked in-game contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentId {
    /// Shugo Festa: matches start every hour at fixed minutes
    ShugoFesta,
    /// Rift of Space-Time: opens at fixed hours of the day
    Rift,
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShugoFesta => write!(f, "shugo_festa"),
            Self::Rift => write!(f, "rift"),
        }
    }
}

/// Snapshot of the host's local wall clock, at second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute of hour (0-59)
    pub minute: u32,
    /// Second of minute (0-59)
    pub second: u32,
}

impl WallTime {
    /// Capture the current local time
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    /// Build a wall time from components
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}
