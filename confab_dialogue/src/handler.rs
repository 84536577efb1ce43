//! Intent dispatch for one conversational turn.

use crate::context::{ContextBag, ContextUpdate};
use crate::format;
use crate::paging::PaginationState;
use chrono::{Datelike, Weekday};
use confab_query as query;
use confab_resolver::{CrossReference, ResolverError};
use confab_schedule::ScheduleCache;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Context entry carrying the pagination state of a topic listing.
pub const TALK_CONTEXT: &str = "talk-context";
/// Context entry carrying the single talk picked by a speaker query.
pub const SPEAKER_TALK_CONTEXT: &str = "speaker-talk";

const CONTEXT_LIFESPAN: u32 = 3;

/// One stateless invocation: the parsed intent, its arguments and the
/// context round-tripped from the previous turn.
#[derive(Debug, Clone, Default)]
pub struct TurnRequest {
    pub intent: String,
    pub args: HashMap<String, String>,
    pub context: ContextBag,
}

/// Response text plus the context updates to carry forward.
///
/// `expects_reply` distinguishes a question that keeps the conversation
/// open from a closing statement.
#[derive(Debug, Clone)]
pub struct TurnResponse {
    pub text: String,
    pub expects_reply: bool,
    pub context_updates: Vec<ContextUpdate>,
}

impl TurnResponse {
    #[must_use]
    pub const fn ask(text: String) -> Self {
        Self {
            text,
            expects_reply: true,
            context_updates: Vec::new(),
        }
    }

    #[must_use]
    pub const fn tell(text: String) -> Self {
        Self {
            text,
            expects_reply: false,
            context_updates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, update: ContextUpdate) -> Self {
        self.context_updates.push(update);
        self
    }
}

/// The talk remembered between a speaker query and its schedule lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpeakerTalkRef {
    session_id: i64,
    speaker_name: String,
    title: String,
    description: String,
}

/// Dispatches intents to the query engine and resolver.
///
/// The handler never returns an error: data-source failures become
/// apologetic closing texts, empty lookups become graceful prompts, and
/// an unusable argument becomes a clarifying question before any fetch.
pub struct TurnHandler {
    cache: Arc<ScheduleCache>,
    cross: CrossReference,
    today: Weekday,
}

impl TurnHandler {
    #[must_use]
    pub fn new(cache: Arc<ScheduleCache>, cross: CrossReference) -> Self {
        Self {
            cache,
            cross,
            today: chrono::Local::now().weekday(),
        }
    }

    /// Pin "today" for the relative-day phrases.
    #[must_use]
    pub const fn with_today(mut self, today: Weekday) -> Self {
        self.today = today;
        self
    }

    pub async fn handle(&self, request: TurnRequest) -> TurnResponse {
        info!("Handling intent: {}", request.intent);

        match request.intent.as_str() {
            "topics.list" => self.list_topics().await,
            "topics.popular" => self.popular_topics(&request).await,
            "speakers.count" => self.count_speakers().await,
            "talks.by.topic" => self.talks_by_topic(&request).await,
            "talks.next" => self.next_talk(&request).await,
            "talks.more" => self.more_on_talk(&request).await,
            "speakers.by.topic" => self.speakers_by_topic(&request).await,
            "talks.schedule" => self.talk_schedule(&request).await,
            other => {
                warn!("Unrecognized intent: {other}");
                TurnResponse::ask(format::fallback())
            }
        }
    }

    async fn list_topics(&self) -> TurnResponse {
        match self.cache.get().await {
            Ok(slots) => TurnResponse::ask(format::topics_list(&query::distinct_topics(&slots))),
            Err(error) => {
                warn!("listTopics: {error}");
                TurnResponse::tell(format::source_failure("list the available topics"))
            }
        }
    }

    async fn popular_topics(&self, request: &TurnRequest) -> TurnResponse {
        let Some(count) = arg(request, "popular-topics-number")
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|count| *count > 0)
        else {
            return TurnResponse::ask(format::clarify_count());
        };

        match self.cache.get().await {
            Ok(slots) => {
                TurnResponse::ask(format::popular_topics(&query::popular_topics(&slots, count)))
            }
            Err(error) => {
                warn!("listTopicsByPopularity: {error}");
                TurnResponse::tell(format::source_failure("list the popular topics"))
            }
        }
    }

    async fn count_speakers(&self) -> TurnResponse {
        match self.cache.get().await {
            Ok(slots) => {
                TurnResponse::ask(format::speaker_count(query::distinct_speakers(&slots).len()))
            }
            Err(error) => {
                warn!("speakersCount: {error}");
                TurnResponse::tell(format::source_failure("count the speakers"))
            }
        }
    }

    async fn talks_by_topic(&self, request: &TurnRequest) -> TurnResponse {
        let Some(raw_topic) = arg(request, "topic-name") else {
            return TurnResponse::ask(format::clarify_topic());
        };
        // Spoken ampersands land on the normalized topic spelling.
        let topic = raw_topic.to_lowercase().replace(" & ", " and ");

        let slots = match self.cache.get().await {
            Ok(slots) => slots,
            Err(error) => {
                warn!("talksByTopics: {error}");
                return TurnResponse::tell(format::source_failure(
                    "list the sessions about that topic",
                ));
            }
        };

        let talks = query::talks_by_topic(&slots, &topic);
        let ids: Vec<String> = talks.iter().map(|talk| talk.id.clone()).collect();

        PaginationState::start(ids).map_or_else(
            || TurnResponse::ask(format::no_sessions_for(&topic)),
            |state| {
                TurnResponse::ask(format::first_talk(&topic, &talks[0].title)).with_context(
                    ContextUpdate::new(TALK_CONTEXT, CONTEXT_LIFESPAN, &state),
                )
            },
        )
    }

    async fn next_talk(&self, request: &TurnRequest) -> TurnResponse {
        let Some(state) = request.context.get::<PaginationState>(TALK_CONTEXT) else {
            return TurnResponse::ask(format::prompt_for_topic());
        };

        // The advanced cursor is recorded even at exhaustion, so a later
        // topic query can overwrite it.
        let advanced = state.advance();
        let update = ContextUpdate::new(TALK_CONTEXT, CONTEXT_LIFESPAN, &advanced);

        let Some(talk_id) = advanced.current_talk().map(str::to_string) else {
            return TurnResponse::ask(format::no_more_sessions()).with_context(update);
        };

        match self.cache.get().await {
            Ok(slots) => query::talk_by_id(&slots, &talk_id)
                .and_then(|slot| slot.talk.as_ref())
                .map_or_else(
                    || TurnResponse::ask(format::no_more_sessions()),
                    |talk| TurnResponse::ask(format::next_talk(&talk.title)),
                )
                .with_context(update),
            Err(error) => {
                warn!("nextTalk: {error}");
                TurnResponse::tell(format::source_failure("fetch the next session"))
            }
        }
    }

    async fn more_on_talk(&self, request: &TurnRequest) -> TurnResponse {
        let Some(state) = request.context.get::<PaginationState>(TALK_CONTEXT) else {
            return TurnResponse::ask(format::prompt_for_topic());
        };
        let Some(talk_id) = state.current_talk().map(str::to_string) else {
            return TurnResponse::ask(format::no_more_sessions());
        };

        match self.cache.get().await {
            Ok(slots) => query::talk_by_id(&slots, &talk_id)
                .and_then(|slot| slot.talk.as_ref().map(|talk| (slot, talk)))
                .map_or_else(
                    || TurnResponse::ask(format::no_more_sessions()),
                    |(slot, talk)| {
                        TurnResponse::ask(format::talk_detail(slot, talk, self.today))
                    },
                ),
            Err(error) => {
                warn!("moreOnATalk: {error}");
                TurnResponse::tell(format::source_failure("describe that session"))
            }
        }
    }

    async fn speakers_by_topic(&self, request: &TurnRequest) -> TurnResponse {
        let Some(topic) = arg(request, "topic") else {
            return TurnResponse::ask(format::clarify_topic());
        };

        match self.cross.speakers_by_topic(topic).await {
            Ok(matches) => match matches.as_slice() {
                [] => TurnResponse::tell(format::no_speaker_for_topic(topic)),
                [talk] => {
                    let reference = SpeakerTalkRef {
                        session_id: talk.session.id,
                        speaker_name: talk.speaker.name.clone(),
                        title: talk.session.title.clone(),
                        description: talk.session.description.clone(),
                    };
                    TurnResponse::ask(format::speaker_for_topic(
                        &talk.speaker.name,
                        topic,
                        &talk.session.title,
                    ))
                    .with_context(ContextUpdate::new(
                        SPEAKER_TALK_CONTEXT,
                        CONTEXT_LIFESPAN,
                        &reference,
                    ))
                }
                many => TurnResponse::tell(format::narrow_topic(many.len(), topic)),
            },
            Err(ResolverError::Pattern(error)) => {
                warn!("findByTopic: {error}");
                TurnResponse::ask(format::clarify_topic())
            }
            Err(ResolverError::Source(error)) => {
                warn!("findByTopic: {error}");
                TurnResponse::tell(format::source_failure("find speakers for that topic"))
            }
        }
    }

    async fn talk_schedule(&self, request: &TurnRequest) -> TurnResponse {
        let Some(reference) = request.context.get::<SpeakerTalkRef>(SPEAKER_TALK_CONTEXT) else {
            return TurnResponse::ask(format::prompt_for_talk());
        };

        match self.cross.schedule_for_talk(reference.session_id).await {
            Ok(Some(scheduled)) => {
                TurnResponse::tell(format::schedule_detail(&scheduled, &reference.description))
            }
            Ok(None) => TurnResponse::tell(format::not_scheduled(&reference.title)),
            Err(error) => {
                warn!("talkDetails: {error}");
                TurnResponse::tell(format::source_failure("look up that talk's schedule"))
            }
        }
    }
}

fn arg<'a>(request: &'a TurnRequest, name: &str) -> Option<&'a str> {
    request
        .args
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
