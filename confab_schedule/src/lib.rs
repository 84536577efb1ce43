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

//! Acquisition and caching of the unified schedule.
//!
//! `HttpScheduleSource` pulls the day-partitioned documents from the
//! remote conference API and flattens them into one slot collection;
//! `ScheduleCache` memoizes that collection for the process lifetime with
//! a single-flight population guarantee.

mod cache;
mod source;

pub use cache::ScheduleCache;
pub use source::{HttpScheduleSource, ScheduleSourceConfig};
