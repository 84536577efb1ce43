//! Pagination cursor over one query's ordered result set.

use serde::{Deserialize, Serialize};

/// The "which talk are we on" state carried between turns.
///
/// Created when a topic query yields at least one result, advanced by the
/// "next session" intent, and terminal once the cursor reaches
/// `total_sessions`. `talk_ids` is fixed for the life of one query result
/// so "next" means the same thing on every turn. Serializes camelCase to
/// match the platform's context parameter shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub session_index: usize,
    pub talk_ids: Vec<String>,
    pub total_sessions: usize,
}

impl PaginationState {
    /// Start listing a fresh result set; `None` for an empty one, which
    /// keeps the conversation idle.
    #[must_use]
    pub fn start(talk_ids: Vec<String>) -> Option<Self> {
        if talk_ids.is_empty() {
            return None;
        }
        Some(Self {
            session_index: 0,
            total_sessions: talk_ids.len(),
            talk_ids,
        })
    }

    /// The state after one "next session" step.
    ///
    /// The cursor saturates at `total_sessions`, so advancing an
    /// exhausted state returns an identical state.
    #[must_use]
    pub fn advance(&self) -> Self {
        Self {
            session_index: (self.session_index + 1).min(self.total_sessions),
            talk_ids: self.talk_ids.clone(),
            total_sessions: self.total_sessions,
        }
    }

    /// Whether the cursor has stepped past the last result.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.session_index >= self.total_sessions
    }

    /// The talk id under the cursor; `None` once exhausted.
    #[must_use]
    pub fn current_talk(&self) -> Option<&str> {
        self.talk_ids.get(self.session_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("TALK-{i}")).collect()
    }

    #[test]
    fn empty_result_set_stays_idle() {
        assert!(PaginationState::start(vec![]).is_none());
    }

    #[test]
    fn fresh_state_points_at_the_first_talk() {
        let Some(state) = PaginationState::start(ids(3)) else {
            panic!("non-empty result set should start listing");
        };
        assert_eq!(state.session_index, 0);
        assert_eq!(state.total_sessions, 3);
        assert_eq!(state.current_talk(), Some("TALK-0"));
        assert!(!state.is_exhausted());
    }

    #[test]
    fn advancing_walks_to_exhaustion_and_stops() {
        let Some(mut state) = PaginationState::start(ids(3)) else {
            panic!("non-empty result set should start listing");
        };

        // total_sessions - 1 advances reach the last listing index.
        state = state.advance();
        state = state.advance();
        assert_eq!(state.session_index, 2);
        assert_eq!(state.current_talk(), Some("TALK-2"));
        assert!(!state.is_exhausted());

        // One more exhausts; further advances change nothing.
        state = state.advance();
        assert!(state.is_exhausted());
        assert_eq!(state.current_talk(), None);

        let again = state.advance();
        assert_eq!(again, state);
    }

    #[test]
    fn context_shape_is_camel_case() {
        let Some(state) = PaginationState::start(ids(2)) else {
            panic!("non-empty result set should start listing");
        };
        let Ok(value) = serde_json::to_value(&state) else {
            panic!("state should serialize");
        };
        assert_eq!(value["sessionIndex"], 0);
        assert_eq!(value["totalSessions"], 2);
        assert_eq!(value["talkIds"][1], "TALK-1");

        let Ok(back) = serde_json::from_value::<PaginationState>(value) else {
            panic!("state should round-trip");
        };
        assert_eq!(back, state);
    }
}
