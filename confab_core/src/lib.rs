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

//! Shared kernel for the conference schedule assistant: the wire data
//! model for both source variants, the data-source error type, and the
//! traits implemented by the remote source adapters.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

pub mod directory;
pub mod error;
pub mod slot;

pub use directory::{ScheduleDay, Session, SpeakerProfile, Timeslot, TimeslotSession};
pub use error::DataSourceError;
pub use slot::{DaySchedule, Slot, Speaker, SpeakerLink, Talk};

/// Source of the unified, flat slot collection.
///
/// One `fetch` retrieves every configured day document and concatenates
/// their slots in day-list order. Any failure aborts the whole attempt;
/// a partial collection is never returned.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Slot>, DataSourceError>;
}

/// The three split resources behind the cross-reference resolver.
///
/// Sessions come back in a `BTreeMap` so iteration order, and therefore
/// result order, is deterministic across turns.
#[async_trait]
pub trait SpeakerDirectory: Send + Sync {
    async fn sessions(&self) -> Result<BTreeMap<String, Session>, DataSourceError>;
    async fn speakers(&self) -> Result<HashMap<String, SpeakerProfile>, DataSourceError>;
    async fn schedule(&self) -> Result<Vec<ScheduleDay>, DataSourceError>;
}
