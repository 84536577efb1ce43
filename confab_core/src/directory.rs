//! Split-resource data model.
//!
//! Some deployments publish sessions, speakers and the day-partitioned
//! schedule as three independent JSON resources joined by identifier.

use serde::{Deserialize, Serialize};

/// A session from the sessions resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_names: Vec<String>,
    /// Keys into the speakers resource; the first entry is the primary
    /// speaker.
    #[serde(default)]
    pub speakers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A per-day bucket of timeslots, in feed order (earliest day first).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date_readable: String,
    #[serde(default)]
    pub timeslots: Vec<Timeslot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub sessions: Vec<TimeslotSession>,
}

/// A scheduled entry within a timeslot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeslotSession {
    /// Item identifiers; the trailing one is the session's own id.
    #[serde(default)]
    pub items: Vec<i64>,
}

impl TimeslotSession {
    /// The session's own identifier, if the entry has any items.
    #[must_use]
    pub fn session_id(&self) -> Option<i64> {
        self.items.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_item_is_session_id() {
        let entry = TimeslotSession {
            items: vec![101, 102, 7],
        };
        assert_eq!(entry.session_id(), Some(7));

        let empty = TimeslotSession { items: vec![] };
        assert_eq!(empty.session_id(), None);
    }

    #[test]
    fn session_defaults_for_sparse_documents() {
        let json = r#"{"id": 42, "title": "Signals deep dive"}"#;
        let Ok(session) = serde_json::from_str::<Session>(json) else {
            panic!("sparse session should deserialize");
        };
        assert!(session.description.is_empty());
        assert!(session.speakers.is_empty());
        assert!(session.category_names.is_empty());
    }
}
