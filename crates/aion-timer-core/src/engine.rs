//! Alarm scheduling engine
//!
//! Owns a repeating 1-second tick, reads the latest settings snapshot plus
//! the schedule catalog, and invokes the caller-supplied alarm sink:
//! - main events fire in the first seconds of their matching minute
//! - advance notices fire the configured number of minutes earlier
//! - repeated matches within the same window are deduplicated

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::catalog::{self, MatchKind};
use crate::settings::{ContentScheduleConfig, TimerSettings};
use crate::types::{ContentId, Result, WallTime};

/// Seconds after a minute boundary during which a match may trigger.
///
/// The tick runs at 1 Hz, so a matching minute is observed repeatedly; the
/// dedup key keeps that to one firing, and this window keeps the key's
/// validity scoped to a single wall-clock minute.
const ACTIONABLE_WINDOW_SECS: u32 = 5;

/// How long a dedup key stays live before it is pruned
const KEY_EXPIRY: Duration = Duration::from_secs(60);

/// Tick interval of the scheduler loop
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One alarm delivered to the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmNotice {
    /// Content that produced the alarm
    pub content: ContentId,
    /// Human-readable alarm text
    pub message: String,
    /// True for an advance notice, false for a main event
    pub is_advance: bool,
}

/// Callback receiving alarms.
///
/// Invoked synchronously from the tick; it must not block and is expected to
/// enqueue rendering/notification side effects rather than execute them.
pub type AlarmSink = Arc<dyn Fn(AlarmNotice) -> Result<()> + Send + Sync>;

/// Which firing of an event a dedup key covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AlarmKind {
    Main,
    Advance(u32),
}

/// Scopes "already fired" state to one occurrence of one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AlarmKey {
    hour: u32,
    minute: u32,
    content: ContentId,
    kind: AlarmKind,
}

/// Stateful scheduler driving alarm checks off the local wall clock
pub struct AlarmScheduler {
    settings: watch::Receiver<TimerSettings>,
    sink: AlarmSink,
    fired: HashMap<AlarmKey, Instant>,
}

impl AlarmScheduler {
    /// Create a scheduler reading settings snapshots from `settings` and
    /// delivering alarms to `sink`.
    pub fn new(settings: watch::Receiver<TimerSettings>, sink: AlarmSink) -> Self {
        Self {
            settings,
            sink,
            fired: HashMap::new(),
        }
    }

    /// Run the scheduler until `shutdown` is cancelled.
    ///
    /// Checks run once immediately, then once per second. Settings sent on
    /// the watch channel are observed by the next tick without a restart.
    /// After cancellation no further sink invocation happens.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!("alarm scheduler starting");

        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let settings = self.settings.borrow().clone();
                    self.check(&settings, WallTime::now(), Instant::now());
                }
                _ = shutdown.cancelled() => {
                    info!("alarm scheduler shutting down");
                    break;
                }
            }
        }
    }

    /// One scheduling pass against the given clock readings.
    ///
    /// `now` is the wall-clock position used for matching; `at` orders dedup
    /// key expiry. Split out from [`AlarmScheduler::run`] so tests can drive
    /// it with simulated clocks.
    fn check(&mut self, settings: &TimerSettings, now: WallTime, at: Instant) {
        self.fired
            .retain(|_, fired_at| at.saturating_duration_since(*fired_at) < KEY_EXPIRY);

        if !settings.enabled {
            // A later re-enable must start from a clean window.
            self.fired.clear();
            return;
        }

        for (&content, config) in &settings.contents {
            if let Err(e) = self.check_content(content, config, now, at) {
                warn!(content = %content, error = %e, "alarm sink failed; continuing with remaining contents");
            }
        }
    }

    fn check_content(
        &mut self,
        content: ContentId,
        config: &ContentScheduleConfig,
        now: WallTime,
        at: Instant,
    ) -> Result<()> {
        if !config.enabled || config.options.is_empty() {
            return Ok(());
        }
        let Some(def) = catalog::definition(content) else {
            debug!(content = %content, "no catalog definition; skipping");
            return Ok(());
        };

        for point in def.expand(&config.options) {
            if actionable(def.kind, point.hour, point.minute, now) {
                let key = AlarmKey {
                    hour: now.hour,
                    minute: point.minute,
                    content,
                    kind: AlarmKind::Main,
                };
                if self.mark_fired(key, at) {
                    (self.sink)(AlarmNotice {
                        content,
                        message: def.main_message(now.hour, point.minute),
                        is_advance: false,
                    })?;
                }
            }

            for &advance in &config.advance_notices {
                let (adv_hour, adv_minute) = rewind(point.hour, point.minute, advance);
                if actionable(def.kind, adv_hour, adv_minute, now) {
                    let key = AlarmKey {
                        hour: now.hour,
                        minute: adv_minute,
                        content,
                        kind: AlarmKind::Advance(advance),
                    };
                    if self.mark_fired(key, at) {
                        (self.sink)(AlarmNotice {
                            content,
                            message: def.advance_message(advance),
                            is_advance: true,
                        })?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Record a firing; returns false if this occurrence already fired.
    fn mark_fired(&mut self, key: AlarmKey, at: Instant) -> bool {
        use std::collections::hash_map::Entry;
        match self.fired.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(at);
                true
            }
        }
    }
}

/// Whether a firing position matches the current minute and sits inside the
/// actionability window.
fn actionable(kind: MatchKind, hour: u32, minute: u32, now: WallTime) -> bool {
    let time_match = match kind {
        MatchKind::EveryHour => now.minute == minute,
        MatchKind::FixedHours => now.hour == hour && now.minute == minute,
    };
    time_match && now.second < ACTIONABLE_WINDOW_SECS
}

/// Step a firing point back by `advance` minutes, borrowing hours and
/// wrapping past midnight as needed.
fn rewind(hour: u32, minute: u32, advance: u32) -> (u32, u32) {
    const DAY_MIN: u32 = 24 * 60;
    let total = hour * 60 + minute;
    let stepped = (total + DAY_MIN - advance % DAY_MIN) % DAY_MIN;
    (stepped / 60, stepped % 60)
}
