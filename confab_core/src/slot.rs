//! Unified-schedule data model.
//!
//! The remote conference API partitions its program by day; each day
//! document carries an ordered `slots` array. Field names on the wire are
//! camelCase.

use serde::{Deserialize, Serialize};

/// One scheduled time block in the conference program.
///
/// Breaks, registration and other non-talk blocks carry no `talk`; every
/// talk-oriented view filters on its presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Weekday name, lowercase (e.g. `thursday`).
    pub day: String,
    pub from_time: String,
    pub to_time: String,
    pub room_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talk: Option<Talk>,
}

/// A talk scheduled into a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talk {
    /// Unique within a dataset.
    pub id: String,
    pub title: String,
    /// Subject-area label; may arrive with an HTML-escaped ampersand.
    pub track: String,
    pub talk_type: String,
    pub summary: String,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

impl Talk {
    /// Canonical topic identity for this talk.
    ///
    /// Two tracks that differ only by ampersand escaping are the same
    /// topic, so `&amp;` is rewritten to the word `and`.
    #[must_use]
    pub fn topic(&self) -> String {
        self.track.trim().replace("&amp;", "and")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<SpeakerLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerLink {
    pub href: String,
}

/// One remote day document.
#[derive(Debug, Clone, Deserialize)]
pub struct DaySchedule {
    pub slots: Vec<Slot>,
}
