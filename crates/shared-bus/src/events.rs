//! # Event Filters
//!
//! Subscription filters over `RegistryEvent`. An indexer can follow whole
//! topics, a set of names, or both.

use serde::{Deserialize, Serialize};
use shared_types::events::{EventTopic, RegistryEvent};

/// Filter for event subscriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    /// Topics to include (empty = all).
    pub topics: Vec<EventTopic>,

    /// Canonical names to include (empty = all). Events without a name
    /// (treasury withdrawals) only pass an empty name filter.
    pub names: Vec<String>,
}

impl EventFilter {
    /// Create a filter that matches all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            names: Vec::new(),
        }
    }

    /// Create a filter for events concerning specific names.
    #[must_use]
    pub fn names(names: Vec<String>) -> Self {
        Self {
            topics: Vec::new(),
            names,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &RegistryEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let name_match = self.names.is_empty()
            || event
                .name()
                .is_some_and(|name| self.names.iter().any(|n| n == name));

        topic_match && name_match
    }
}
