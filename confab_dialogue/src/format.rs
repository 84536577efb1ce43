//! Pure renderers from query and resolver outputs to response text.
//!
//! The terminal, side-effect-free stage of the pipeline: nothing here
//! fetches, and every function is a plain value-to-string mapping.

use chrono::Weekday;
use confab_core::{Slot, Talk};
use confab_query::day_phrase;
use confab_resolver::ScheduledTalk;

#[must_use]
pub fn topics_list(topics: &[String]) -> String {
    format!(
        "The covered topics are: {}. What do you want to learn about?",
        topics.join(", ")
    )
}

#[must_use]
pub fn popular_topics(ranked: &[(String, usize)]) -> String {
    let listed: Vec<String> = ranked
        .iter()
        .map(|(topic, count)| format!("{topic} with {count} talks"))
        .collect();
    format!(
        "The {} most popular topics are: {}. What topic do you want to learn about?",
        ranked.len(),
        listed.join(", ")
    )
}

#[must_use]
pub fn speaker_count(count: usize) -> String {
    format!("I found {count} speakers.")
}

#[must_use]
pub fn first_talk(topic: &str, title: &str) -> String {
    format!(
        "The next session about {topic} is called {title}. \
         Would you like to hear more about it or hear about the next session?"
    )
}

#[must_use]
pub fn next_talk(title: &str) -> String {
    format!(
        "Sure, the next session is {title}. \
         Would you like to hear more about it or about the next session?"
    )
}

#[must_use]
pub fn no_more_sessions() -> String {
    "Sorry, there's no more session on that topic. Are you interested in other topics?".to_string()
}

#[must_use]
pub fn no_sessions_for(topic: &str) -> String {
    format!(
        "Sorry, I couldn't find any session about {topic}. \
         Is there another topic you'd be interested in?"
    )
}

#[must_use]
pub fn clarify_topic() -> String {
    "Sorry, I didn't get what topic you were interested in. \
     Is there another topic you'd like to hear about?"
        .to_string()
}

#[must_use]
pub fn clarify_count() -> String {
    "Sorry, I didn't get how many topics you wanted to hear about. \
     How many should I list?"
        .to_string()
}

#[must_use]
pub fn prompt_for_topic() -> String {
    "We haven't picked a topic yet. What topic would you like to hear about?".to_string()
}

#[must_use]
pub fn prompt_for_talk() -> String {
    "We haven't picked a talk yet. What topic are you interested in?".to_string()
}

#[must_use]
pub fn speaker_for_topic(speaker: &str, topic: &str, title: &str) -> String {
    format!(
        "{speaker} is talking about {topic}. The title is \"{title}\". \
         Do you wanna hear more about this talk?"
    )
}

#[must_use]
pub fn no_speaker_for_topic(topic: &str) -> String {
    format!("No one is talking about {topic}. Try another topic name.")
}

#[must_use]
pub fn narrow_topic(count: usize, topic: &str) -> String {
    format!(
        "I found {count} speakers who are presenting about {topic}. \
         Try narrowing your topic to get different results."
    )
}

#[must_use]
pub fn schedule_detail(scheduled: &ScheduledTalk, description: &str) -> String {
    format!(
        "This talk will start at {} on {}. Here is the description: \"{description}\"",
        scheduled.start_time, scheduled.date_readable
    )
}

#[must_use]
pub fn not_scheduled(title: &str) -> String {
    format!("I couldn't find {title} in the published schedule.")
}

#[must_use]
pub fn source_failure(task: &str) -> String {
    format!("I wasn't able to reach the conference schedule API to {task}.")
}

#[must_use]
pub fn fallback() -> String {
    "I can list topics, rank them by popularity, count speakers, \
     or walk you through the sessions about a topic. What would you like?"
        .to_string()
}

/// `HH:MM` with a 12-hour meridiem suffix; hours from 12 read as PM.
#[must_use]
pub fn clock_time(time: &str) -> String {
    let hour: u32 = time
        .split(':')
        .next()
        .and_then(|h| h.parse().ok())
        .unwrap_or(0);
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{time} {meridiem}")
}

/// Full detail for the talk under the pagination cursor.
#[must_use]
pub fn talk_detail(slot: &Slot, talk: &Talk, today: Weekday) -> String {
    let phrase =
        day_phrase(&slot.day, today).unwrap_or_else(|| format!("is on {}", slot.day.trim()));
    format!(
        "Sure, here is more information about {}. \
         The presentation {phrase}, at {}, in {}. The abstract says: {} \
         Would you like to hear about the next session?",
        talk.title,
        clock_time(&slot.from_time),
        slot.room_name,
        talk.summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_slot() -> (Slot, Talk) {
        let talk = Talk {
            id: "A-1".to_string(),
            title: "Async all the way down".to_string(),
            track: "Architecture".to_string(),
            talk_type: "Conference".to_string(),
            summary: "About event loops.".to_string(),
            speakers: vec![],
        };
        let slot = Slot {
            day: "thursday".to_string(),
            from_time: "16:40".to_string(),
            to_time: "17:30".to_string(),
            room_name: "Room A".to_string(),
            talk: Some(talk.clone()),
        };
        (slot, talk)
    }

    #[test]
    fn clock_time_splits_the_day_at_noon() {
        assert_eq!(clock_time("09:15"), "09:15 AM");
        assert_eq!(clock_time("11:59"), "11:59 AM");
        assert_eq!(clock_time("12:00"), "12:00 PM");
        assert_eq!(clock_time("16:40"), "16:40 PM");
    }

    #[test]
    fn talk_detail_composes_day_time_room_and_summary() {
        let (slot, talk) = fixture_slot();
        let text = talk_detail(&slot, &talk, Weekday::Wed);
        assert!(text.contains("Async all the way down"));
        assert!(text.contains("is tomorrow"));
        assert!(text.contains("16:40 PM"));
        assert!(text.contains("Room A"));
        assert!(text.contains("About event loops."));
    }

    #[test]
    fn talk_detail_survives_an_unknown_day_name() {
        let (mut slot, talk) = fixture_slot();
        slot.day = "someday".to_string();
        let text = talk_detail(&slot, &talk, Weekday::Wed);
        assert!(text.contains("is on someday"));
    }

    #[test]
    fn popular_topics_lists_counts() {
        let ranked = vec![
            ("Architecture".to_string(), 4),
            ("Security".to_string(), 1),
        ];
        let text = popular_topics(&ranked);
        assert!(text.starts_with("The 2 most popular topics are: "));
        assert!(text.contains("Architecture with 4 talks, Security with 1 talks"));
    }
}
