use confab_core::{Slot, Talk};

fn talks(slots: &[Slot]) -> impl Iterator<Item = &Talk> {
    slots.iter().filter_map(|slot| slot.talk.as_ref())
}

fn distinct<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// De-duplicated topic labels from slots that carry a talk, in first-seen
/// order.
#[must_use]
pub fn distinct_topics(slots: &[Slot]) -> Vec<String> {
    distinct(talks(slots).map(Talk::topic))
}

/// Topic labels ranked by talk count, descending, truncated to `n`.
///
/// Counts accumulate in first-seen order and the sort is stable, so
/// topics with equal counts keep their first-seen relative order. An `n`
/// larger than the distinct-topic count returns all topics.
#[must_use]
pub fn popular_topics(slots: &[Slot], n: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for talk in talks(slots) {
        let topic = talk.topic();
        match counts.iter_mut().find(|(seen, _)| *seen == topic) {
            Some((_, count)) => *count += 1,
            None => counts.push((topic, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// De-duplicated room names hosting talks, in first-seen order.
#[must_use]
pub fn distinct_rooms(slots: &[Slot]) -> Vec<String> {
    distinct(
        slots
            .iter()
            .filter(|slot| slot.talk.is_some())
            .map(|slot| slot.room_name.trim().to_string()),
    )
}

/// De-duplicated talk types, in first-seen order.
#[must_use]
pub fn distinct_talk_types(slots: &[Slot]) -> Vec<String> {
    distinct(talks(slots).map(|talk| talk.talk_type.trim().to_string()))
}

/// Distinct speaker names, alphabetically sorted.
///
/// Only the last entry of each talk's speaker list is counted; the slot
/// views treat a talk as having a single speaker.
#[must_use]
pub fn distinct_speakers(slots: &[Slot]) -> Vec<String> {
    let mut names: Vec<String> = talks(slots)
        .filter_map(|talk| talk.speakers.last())
        .map(|speaker| speaker.name.trim().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Talks whose topic contains `topic` case-insensitively, in slot order.
///
/// Matching runs against the normalized topic, so a query spelled with
/// "and" finds a track published with an escaped ampersand. No match is
/// an empty list, never an error.
#[must_use]
pub fn talks_by_topic<'a>(slots: &'a [Slot], topic: &str) -> Vec<&'a Talk> {
    let needle = topic.to_lowercase();
    talks(slots)
        .filter(|talk| talk.topic().to_lowercase().contains(&needle))
        .collect()
}

/// The last slot (in input order) carrying the given talk id, if any.
#[must_use]
pub fn talk_by_id<'a>(slots: &'a [Slot], id: &str) -> Option<&'a Slot> {
    slots
        .iter()
        .rfind(|slot| slot.talk.as_ref().is_some_and(|talk| talk.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_core::Speaker;

    fn talk_slot(id: &str, title: &str, track: &str, room: &str, speakers: &[&str]) -> Slot {
        Slot {
            day: "thursday".to_string(),
            from_time: "10:00".to_string(),
            to_time: "10:50".to_string(),
            room_name: room.to_string(),
            talk: Some(Talk {
                id: id.to_string(),
                title: title.to_string(),
                track: track.to_string(),
                talk_type: "Conference".to_string(),
                summary: format!("All about {title}."),
                speakers: speakers
                    .iter()
                    .map(|name| Speaker {
                        name: (*name).to_string(),
                        link: None,
                    })
                    .collect(),
            }),
        }
    }

    fn break_slot() -> Slot {
        Slot {
            day: "thursday".to_string(),
            from_time: "12:00".to_string(),
            to_time: "13:00".to_string(),
            room_name: "Hall".to_string(),
            talk: None,
        }
    }

    fn sample_schedule() -> Vec<Slot> {
        vec![
            talk_slot("A-1", "Monolith first", "Architecture", "Room A", &["Ada"]),
            break_slot(),
            talk_slot(
                "B-1",
                "Culture of review",
                "Methodology &amp; Culture",
                "Room B",
                &["Grace", "Barbara"],
            ),
            talk_slot("A-2", "Event sourcing", "Architecture", "Room A", &["Ada"]),
            talk_slot("C-1", "Threat models", "Security", "Room C", &["Joan"]),
            talk_slot("A-3", "CQRS in anger", "Architecture", "Room B", &["Grace"]),
        ]
    }

    #[test]
    fn distinct_topics_dedupes_in_first_seen_order() {
        let topics = distinct_topics(&sample_schedule());
        assert_eq!(
            topics,
            vec!["Architecture", "Methodology and Culture", "Security"]
        );
    }

    #[test]
    fn popular_topics_sorts_by_count_with_stable_ties() {
        let ranked = popular_topics(&sample_schedule(), 3);
        assert_eq!(ranked[0], ("Architecture".to_string(), 3));
        // Equal counts keep first-seen relative order.
        assert_eq!(ranked[1], ("Methodology and Culture".to_string(), 1));
        assert_eq!(ranked[2], ("Security".to_string(), 1));
    }

    #[test]
    fn popular_topics_tolerates_oversized_n() {
        let ranked = popular_topics(&sample_schedule(), 50);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn distinct_rooms_ignores_talkless_slots() {
        let rooms = distinct_rooms(&sample_schedule());
        assert_eq!(rooms, vec!["Room A", "Room B", "Room C"]);
    }

    #[test]
    fn distinct_speakers_takes_last_listed_and_sorts() {
        let speakers = distinct_speakers(&sample_schedule());
        // "Grace" is dropped from the co-presented talk; only the last
        // listed speaker of each talk counts.
        assert_eq!(speakers, vec!["Ada", "Barbara", "Grace", "Joan"]);
    }

    #[test]
    fn talks_by_topic_matches_normalized_track() {
        let schedule = sample_schedule();
        let talks = talks_by_topic(&schedule, "methodology and");
        assert_eq!(talks.len(), 1);
        assert_eq!(talks[0].id, "B-1");
    }

    #[test]
    fn talks_by_topic_without_match_is_empty() {
        let schedule = sample_schedule();
        assert!(talks_by_topic(&schedule, "nonexistent").is_empty());
    }

    #[test]
    fn talk_by_id_returns_last_match_and_repeats() {
        let mut schedule = sample_schedule();
        schedule.push(talk_slot(
            "A-1",
            "Monolith first (repeat)",
            "Architecture",
            "Room D",
            &["Ada"],
        ));

        let Some(slot) = talk_by_id(&schedule, "A-1") else {
            panic!("talk should be found");
        };
        assert_eq!(slot.room_name, "Room D");

        let Some(again) = talk_by_id(&schedule, "A-1") else {
            panic!("repeated lookup should agree");
        };
        assert_eq!(again.room_name, "Room D");
    }

    #[test]
    fn talk_by_id_missing_is_none() {
        assert!(talk_by_id(&sample_schedule(), "Z-9").is_none());
    }
}
