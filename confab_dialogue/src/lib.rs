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

//! Turn handling for the conference schedule conversation.
//!
//! Every turn is an independent invocation: the handler receives an
//! intent name, a bag of named arguments and the opaque context
//! round-tripped by the calling platform, and returns response text plus
//! the context updates to carry forward. Pagination across turns lives
//! entirely inside one named context entry; the handler keeps no memory
//! of its own.

pub mod context;
pub mod format;
mod handler;
mod paging;

pub use context::{ContextBag, ContextUpdate};
pub use handler::{SPEAKER_TALK_CONTEXT, TALK_CONTEXT, TurnHandler, TurnRequest, TurnResponse};
pub use paging::PaginationState;
