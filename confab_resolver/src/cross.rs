//! Resolver front joining the split resources by identifier.

use crate::error::ResolverError;
use crate::join::{self, SpeakerTalk};
use confab_core::SpeakerDirectory;
use regex::RegexBuilder;
use std::sync::Arc;
use tracing::info;

/// A session located in the day-partitioned schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTalk {
    pub start_time: String,
    pub end_time: String,
    pub date_readable: String,
}

/// Joins sessions, speakers and the schedule fetched from a
/// [`SpeakerDirectory`].
///
/// The joins themselves live in [`join`]; this type owns the fetches and
/// compiles the topic pattern.
pub struct CrossReference {
    directory: Arc<dyn SpeakerDirectory>,
}

impl CrossReference {
    #[must_use]
    pub fn new(directory: Arc<dyn SpeakerDirectory>) -> Self {
        Self { directory }
    }

    /// Sessions matching `topic`, each paired with its primary speaker.
    ///
    /// The topic is compiled as a case-insensitive regular expression and
    /// matched against title plus description. Zero matches is a normal
    /// value, never an error.
    pub async fn speakers_by_topic(&self, topic: &str) -> Result<Vec<SpeakerTalk>, ResolverError> {
        let pattern = RegexBuilder::new(topic).case_insensitive(true).build()?;

        let (sessions, speakers) =
            futures::try_join!(self.directory.sessions(), self.directory.speakers())?;

        let matches = join::sessions_matching_topic(sessions.values(), &pattern);
        let joined = join::attach_speakers(&matches, &speakers);
        info!(
            "Topic \"{topic}\" matched {} of {} sessions",
            joined.len(),
            sessions.len()
        );
        Ok(joined)
    }

    /// Where the session with the given id is scheduled, if anywhere.
    ///
    /// Day buckets are searched in fixed descending priority; the first
    /// bucket containing the id wins.
    pub async fn schedule_for_talk(&self, id: i64) -> Result<Option<ScheduledTalk>, ResolverError> {
        let days = self.directory.schedule().await?;

        Ok(
            join::schedule_for_talk(&days, id).map(|(timeslot, day)| ScheduledTalk {
                start_time: timeslot.start_time.clone(),
                end_time: timeslot.end_time.clone(),
                date_readable: day.date_readable.clone(),
            }),
        )
    }
}
