//! # Event Publisher
//!
//! The registry service holds an `Arc<dyn EventPublisher>` and hands it each
//! committed event. `InMemoryEventBus` fans events out to every live
//! `Subscription` over a `tokio::sync::broadcast` channel; filters are
//! applied on the receiving side.

use crate::events::EventFilter;
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use shared_types::events::RegistryEvent;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Sink for committed registry events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Delivers one event; returns how many subscribers it reached.
    async fn publish(&self, event: RegistryEvent) -> usize;

    /// Events accepted since creation, delivered or not.
    fn events_published(&self) -> u64;
}

/// Broadcast bus kept in process memory.
///
/// A subscriber that falls more than `capacity` events behind loses the
/// oldest ones and sees the gap in `Subscription::missed`.
#[derive(Debug)]
pub struct InMemoryEventBus {
    sender: broadcast::Sender<RegistryEvent>,
    published: AtomicU64,
    capacity: usize,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus buffering up to `capacity` events per subscriber (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Starts receiving events published from now on that pass `filter`.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, names = ?filter.names, "Subscriber attached");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: RegistryEvent) -> usize {
        self.published.fetch_add(1, Ordering::Relaxed);
        let topic = event.topic();

        // send only fails when nobody is listening
        let receivers = self.sender.send(event).unwrap_or(0);
        trace!(?topic, receivers, "Event fanned out");
        receivers
    }

    fn events_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}
