//! Schedule catalog - static registry of in-game content definitions
//!
//! Each definition knows how to expand the user's chosen option values into
//! concrete firing points and carries the match semantics the scheduler
//! applies against the clock. Adding a new content means adding one entry to
//! [`CONTENT_LIST`]; the scheduler never special-cases individual contents.

use std::collections::BTreeSet;

use crate::types::ContentId;

/// How a content's firing points are matched against the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Fires every hour; only the minute of a firing point is significant
    EveryHour,
    /// Fires at specific hours; hour and minute must both match
    FixedHours,
}

/// A concrete (hour, minute) at which a content's main event is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiringPoint {
    /// Hour of day; ignored for [`MatchKind::EveryHour`] contents
    pub hour: u32,
    /// Minute of hour
    pub minute: u32,
}

/// A selectable option value with its display label
#[derive(Debug, Clone, Copy)]
pub struct OptionChoice {
    /// Raw option value as stored in the settings
    pub value: u32,
    /// Human-readable label
    pub label: &'static str,
}

/// Minutes between Shugo Festa entry opening and match start
const SHUGO_ENTRY_LEAD_MIN: u32 = 3;

/// Immutable definition of one tracked content
pub struct ContentDefinition {
    /// Content identifier
    pub id: ContentId,
    /// Display name
    pub name: &'static str,
    /// Short description of the schedule
    pub description: &'static str,
    /// Time-match semantics
    pub kind: MatchKind,
    /// Selectable option values
    pub choices: &'static [OptionChoice],
    expand: fn(&BTreeSet<u32>) -> Vec<FiringPoint>,
    main_message: fn(u32, u32) -> String,
}

impl ContentDefinition {
    /// Expand chosen option values into firing points.
    ///
    /// Pure and deterministic: the same options always yield the same
    /// points, in option order.
    pub fn expand(&self, options: &BTreeSet<u32>) -> Vec<FiringPoint> {
        (self.expand)(options)
    }

    /// Message for a main-event firing at the given clock position
    pub fn main_message(&self, hour: u32, minute: u32) -> String {
        (self.main_message)(hour, minute)
    }

    /// Message for an advance notice `advance` minutes ahead
    pub fn advance_message(&self, advance: u32) -> String {
        format!("{} in {} min", self.name, advance)
    }
}

fn shugo_points(options: &BTreeSet<u32>) -> Vec<FiringPoint> {
    // Options are entry minutes; the match itself starts a fixed lead later.
    options
        .iter()
        .map(|&entry| FiringPoint {
            hour: 0,
            minute: (entry + SHUGO_ENTRY_LEAD_MIN) % 60,
        })
        .collect()
}

fn shugo_message(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02} Shugo Festa match is starting!")
}

fn rift_points(options: &BTreeSet<u32>) -> Vec<FiringPoint> {
    options
        .iter()
        .map(|&hour| FiringPoint { hour, minute: 0 })
        .collect()
}

fn rift_message(hour: u32, _minute: u32) -> String {
    format!("The Rift of Space-Time has opened ({hour:02}:00)!")
}

/// All tracked contents, in display order
pub static CONTENT_LIST: &[ContentDefinition] = &[
    ContentDefinition {
        id: ContentId::ShugoFesta,
        name: "Shugo Festa",
        description: "Matches start every hour at :18 and :48 (entry opens 3 min earlier)",
        kind: MatchKind::EveryHour,
        choices: &[
            OptionChoice {
                value: 15,
                label: ":18 match",
            },
            OptionChoice {
                value: 45,
                label: ":48 match",
            },
        ],
        expand: shugo_points,
        main_message: shugo_message,
    },
    ContentDefinition {
        id: ContentId::Rift,
        name: "Rift of Space-Time",
        description: "Opens every 3 hours starting at 02:00",
        kind: MatchKind::FixedHours,
        choices: &[
            OptionChoice {
                value: 2,
                label: "02:00",
            },
            OptionChoice {
                value: 5,
                label: "05:00",
            },
            OptionChoice {
                value: 8,
                label: "08:00",
            },
            OptionChoice {
                value: 11,
                label: "11:00",
            },
            OptionChoice {
                value: 14,
                label: "14:00",
            },
            OptionChoice {
                value: 17,
                label: "17:00",
            },
            OptionChoice {
                value: 20,
                label: "20:00",
            },
            OptionChoice {
                value: 23,
                label: "23:00",
            },
        ],
        expand: rift_points,
        main_message: rift_message,
    },
];

/// Look up a content definition by id.
///
/// Unknown ids yield `None`; callers treat that as "no firing points".
pub fn definition(id: ContentId) -> Option<&'static ContentDefinition> {
    CONTENT_LIST.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests;
