#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Pure query operations over the cached slot collection.
//!
//! Every function here is a side-effect-free view derivation: no
//! fetching, no mutation of the input, and empty results are normal
//! values rather than errors.

mod day;
mod predicates;

pub use day::day_phrase;
pub use predicates::{
    distinct_rooms, distinct_speakers, distinct_talk_types, distinct_topics, popular_topics,
    talk_by_id, talks_by_topic,
};
