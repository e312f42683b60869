//! Settings aggregate read by the alarm scheduler
//!
//! The embedder owns persistence and live reload; the scheduler only reads a
//! snapshot of this aggregate on every tick.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::ContentId;

/// Advance-notice values offered as quick picks, in minutes
pub const QUICK_ADVANCE_NOTICES: [u32; 4] = [1, 3, 5, 10];

/// Offered alarm durations, in seconds
pub const ALARM_DURATION_CHOICES: [u32; 4] = [10, 30, 60, 180];

/// Alarm sound selection; synthesis is the embedder's job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmSound {
    /// Urgent siren
    Urgent,
    /// Cheerful beep
    Cheerful,
    /// Classic bell
    Classic,
    /// Gentle chime
    Gentle,
}

impl std::fmt::Display for AlarmSound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::Cheerful => write!(f, "cheerful"),
            Self::Classic => write!(f, "classic"),
            Self::Gentle => write!(f, "gentle"),
        }
    }
}

/// Per-content schedule configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScheduleConfig {
    /// Whether this content participates in scheduling
    pub enabled: bool,
    /// Chosen sub-event option values; empty is valid but inert
    #[serde(default)]
    pub options: BTreeSet<u32>,
    /// Lead times for advance reminders, in minutes
    #[serde(default)]
    pub advance_notices: BTreeSet<u32>,
}

impl ContentScheduleConfig {
    /// Disabled config carrying the given default advance notice
    fn with_advance(advance: u32) -> Self {
        Self {
            enabled: false,
            options: BTreeSet::new(),
            advance_notices: BTreeSet::from([advance]),
        }
    }
}

/// Full settings aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Global switch; while false nothing fires but the scheduler keeps ticking
    pub enabled: bool,
    /// Alarm sound rendered by the embedder
    pub alarm_sound: AlarmSound,
    /// How long the embedder should sustain the alarm, in seconds
    pub alarm_duration_secs: u32,
    /// Per-content schedule configuration
    pub contents: BTreeMap<ContentId, ContentScheduleConfig>,
}

impl Default for TimerSettings {
    fn default() -> Self {
        let mut contents = BTreeMap::new();
        contents.insert(
            ContentId::ShugoFesta,
            ContentScheduleConfig::with_advance(3),
        );
        contents.insert(ContentId::Rift, ContentScheduleConfig::with_advance(5));
        Self {
            enabled: true,
            alarm_sound: AlarmSound::Urgent,
            alarm_duration_secs: 60,
            contents,
        }
    }
}

impl TimerSettings {
    /// Contents that are enabled but cannot fire because no option is chosen.
    ///
    /// The scheduler treats these as producing no firing points; surfacing a
    /// warning to the user is the embedder's job.
    pub fn inert_contents(&self) -> Vec<ContentId> {
        self.contents
            .iter()
            .filter(|(_, config)| config.enabled && config.options.is_empty())
            .map(|(&id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipping_configuration() {
        let settings = TimerSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.alarm_sound, AlarmSound::Urgent);
        assert_eq!(settings.alarm_duration_secs, 60);

        let shugo = &settings.contents[&ContentId::ShugoFesta];
        assert!(!shugo.enabled);
        assert!(shugo.options.is_empty());
        assert_eq!(shugo.advance_notices, BTreeSet::from([3]));

        let rift = &settings.contents[&ContentId::Rift];
        assert!(!rift.enabled);
        assert_eq!(rift.advance_notices, BTreeSet::from([5]));
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = TimerSettings::default();
        let rift = settings.contents.get_mut(&ContentId::Rift).unwrap();
        rift.enabled = true;
        rift.options = BTreeSet::from([2, 23]);

        let json = serde_json::to_string(&settings).unwrap();
        let back: TimerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: TimerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, TimerSettings::default());
    }

    #[test]
    fn test_inert_contents_flags_enabled_without_options() {
        let mut settings = TimerSettings::default();
        assert!(settings.inert_contents().is_empty());

        settings
            .contents
            .get_mut(&ContentId::ShugoFesta)
            .unwrap()
            .enabled = true;
        assert_eq!(settings.inert_contents(), vec![ContentId::ShugoFesta]);
    }
}
