//! The opaque context blob, typed at the handler boundary only.
//!
//! The calling platform round-trips named context entries between turns;
//! inside the handler they deserialize into explicit value types and
//! updates serialize back out with a turns-to-live lifespan.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::HashMap;

/// Named context entries supplied with the current turn.
///
/// Empty on the first turn of a conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextBag {
    #[serde(flatten)]
    entries: HashMap<String, serde_json::Value>,
}

impl ContextBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed read of one entry's parameters; `None` when the entry is
    /// absent or does not fit `T`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.entries
            .get(name)
            .and_then(|parameters| serde_json::from_value(parameters.clone()).ok())
    }

    pub fn insert(&mut self, name: &str, parameters: serde_json::Value) {
        self.entries.insert(name.to_string(), parameters);
    }

    pub fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One named context entry to round-trip, alive for `lifespan` further
/// turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextUpdate {
    pub name: String,
    pub lifespan: u32,
    pub parameters: serde_json::Value,
}

impl ContextUpdate {
    /// Build an update from any serializable parameter value.
    ///
    /// The context shapes carried here are plain field structs, so
    /// serialization cannot fail in practice; a failure degrades to an
    /// empty entry rather than a panic.
    #[must_use]
    pub fn new(name: &str, lifespan: u32, parameters: &impl Serialize) -> Self {
        Self {
            name: name.to_string(),
            lifespan,
            parameters: serde_json::to_value(parameters).unwrap_or_default(),
        }
    }
}
