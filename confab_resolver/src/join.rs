//! Pure identifier joins over the three split resources.
//!
//! Nothing here fetches; the `CrossReference` front supplies the data and
//! these functions compute the joins.

use confab_core::{ScheduleDay, Session, SpeakerProfile, Timeslot};
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// A session joined to its primary speaker.
#[derive(Debug, Clone)]
pub struct SpeakerTalk {
    pub speaker: SpeakerProfile,
    pub session: Session,
}

/// Sessions whose title and description match `pattern` and which
/// reference at least one speaker, in directory order.
#[must_use]
pub fn sessions_matching_topic<'a, I>(sessions: I, pattern: &Regex) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .filter(|session| !session.speakers.is_empty())
        .filter(|session| {
            let haystack = format!("{} {}", session.title, session.description);
            pattern.is_match(&haystack)
        })
        .collect()
}

/// Attach each matched session's first referenced speaker profile.
///
/// A session whose first speaker id is absent from the directory is
/// skipped rather than joined to a hole.
#[must_use]
pub fn attach_speakers(
    matches: &[&Session],
    speakers: &HashMap<String, SpeakerProfile>,
) -> Vec<SpeakerTalk> {
    matches
        .iter()
        .filter_map(|session| {
            let speaker_id = session.speakers.first()?;
            match speakers.get(speaker_id) {
                Some(profile) => Some(SpeakerTalk {
                    speaker: profile.clone(),
                    session: (*session).clone(),
                }),
                None => {
                    debug!(
                        "Session {} references unknown speaker {speaker_id}, skipping",
                        session.id
                    );
                    None
                }
            }
        })
        .collect()
}

/// Find the timeslot scheduling the session with the given id.
///
/// Day buckets are consulted in fixed descending priority, the reverse of
/// feed order (most recent full day first, the pre-conference day last);
/// the first bucket containing a match wins and later buckets are never
/// consulted. Within a bucket the first matching timeslot is taken.
#[must_use]
pub fn schedule_for_talk(days: &[ScheduleDay], id: i64) -> Option<(&Timeslot, &ScheduleDay)> {
    for day in days.iter().rev() {
        let hit = day.timeslots.iter().find(|timeslot| {
            timeslot
                .sessions
                .iter()
                .any(|session| session.session_id() == Some(id))
        });
        if let Some(timeslot) = hit {
            return Some((timeslot, day));
        }
    }
    None
}
