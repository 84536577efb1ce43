//! Relative-day phrase calculation.

use chrono::Weekday;

const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

fn weekday_index(day: &str) -> Option<usize> {
    let day = day.trim().to_lowercase();
    WEEKDAYS.iter().position(|name| *name == day)
}

/// Phrase describing when a slot's weekday falls relative to `today`.
///
/// Same day reads "is today"; one day behind "was given yesterday",
/// further behind "was given on last {day}"; one day ahead "is tomorrow",
/// further ahead "is next {day}". Returns `None` when `day` is not a
/// weekday name.
#[must_use]
pub fn day_phrase(day: &str, today: Weekday) -> Option<String> {
    let slot_index = weekday_index(day)?;
    let today_index = usize::try_from(today.num_days_from_sunday()).unwrap_or(0);

    Some(if slot_index == today_index {
        "is today".to_string()
    } else if slot_index < today_index {
        if today_index - slot_index == 1 {
            "was given yesterday".to_string()
        } else {
            format!("was given on last {}", WEEKDAYS[slot_index])
        }
    } else if slot_index - today_index == 1 {
        "is tomorrow".to_string()
    } else {
        format!("is next {}", WEEKDAYS[slot_index])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_around_a_wednesday() {
        let today = Weekday::Wed;
        assert_eq!(day_phrase("wednesday", today).as_deref(), Some("is today"));
        assert_eq!(day_phrase("thursday", today).as_deref(), Some("is tomorrow"));
        assert_eq!(
            day_phrase("friday", today).as_deref(),
            Some("is next friday")
        );
        assert_eq!(
            day_phrase("tuesday", today).as_deref(),
            Some("was given yesterday")
        );
        assert_eq!(
            day_phrase("monday", today).as_deref(),
            Some("was given on last monday")
        );
    }

    #[test]
    fn accepts_mixed_case_names() {
        assert_eq!(
            day_phrase("Friday", Weekday::Wed).as_deref(),
            Some("is next friday")
        );
    }

    #[test]
    fn unknown_day_is_none() {
        assert!(day_phrase("someday", Weekday::Wed).is_none());
        assert!(day_phrase("", Weekday::Wed).is_none());
    }
}
