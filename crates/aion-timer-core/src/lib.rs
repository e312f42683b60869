//! Aion Timer Core - Alarm Scheduling Engine
//!
//! Tracks the host's local wall clock and fires recurring reminders for
//! in-game events:
//!
//! - **Schedule catalog**: static registry of content definitions; each one
//!   expands the user's chosen option values into concrete (hour, minute)
//!   firing points
//! - **Alarm scheduler**: 1 Hz engine that matches firing points and their
//!   advance notices against the clock and invokes a caller-supplied alarm
//!   sink, deduplicated to one firing per occurrence
//!
//! The embedder supplies the live settings (a `tokio::sync::watch` channel)
//! and the alarm sink; rendering, sound, and notification delivery all live
//! on its side of that boundary.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use aion_timer_core::{AlarmScheduler, AlarmSink, TimerSettings};
//! use tokio_util::sync::CancellationToken;
//!
//! let (settings_tx, settings_rx) = tokio::sync::watch::channel(TimerSettings::default());
//! let sink: AlarmSink = Arc::new(|notice| {
//!     println!("{}", notice.message);
//!     Ok(())
//! });
//!
//! let shutdown = CancellationToken::new();
//! tokio::spawn(AlarmScheduler::new(settings_rx, sink).run(shutdown.clone()));
//!
//! // settings_tx.send(updated) is observed by the very next tick.
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod engine;
pub mod settings;
pub mod types;

pub use catalog::{
    definition, ContentDefinition, FiringPoint, MatchKind, OptionChoice, CONTENT_LIST,
};
pub use engine::{AlarmNotice, AlarmScheduler, AlarmSink};
pub use settings::{
    AlarmSound, ContentScheduleConfig, TimerSettings, ALARM_DURATION_CHOICES,
    QUICK_ADVANCE_NOTICES,
};
pub use types::{ContentId, Result, TimerError, WallTime};
