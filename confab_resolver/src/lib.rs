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

//! Cross-reference resolver for split-resource deployments.
//!
//! Sessions, speakers and the day-partitioned schedule live in three
//! independent resources joined by identifier. The joins themselves are
//! pure; `CrossReference` fronts them with the fetches.

mod cross;
mod error;
mod http;
pub mod join;

pub use cross::{CrossReference, ScheduledTalk};
pub use error::ResolverError;
pub use http::{DirectoryEndpoints, HttpDirectorySource};
pub use join::SpeakerTalk;
