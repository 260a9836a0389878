//! # Subscriptions
//!
//! The receiving end of the bus. An indexer that falls behind loses the
//! oldest buffered events; the count lost is kept so it knows to resync
//! from registry state instead of trusting its replayed view.

use crate::events::EventFilter;
use shared_types::events::RegistryEvent;
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Every publisher is gone and the buffer is empty.
    #[error("Event bus closed")]
    Closed,
}

/// Filtered view of the bus for one consumer.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<RegistryEvent>,
    filter: EventFilter,
    missed: u64,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<RegistryEvent>, filter: EventFilter) -> Self {
        Self {
            receiver,
            filter,
            missed: 0,
        }
    }

    /// Waits for the next matching event; `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<RegistryEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(RecvError::Lagged(lost)) => self.record_lag(lost),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next buffered matching event, `Ok(None)` if there is none yet.
    pub fn try_recv(&mut self) -> Result<Option<RegistryEvent>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(TryRecvError::Lagged(lost)) => self.record_lag(lost),
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// Every matching event already buffered, oldest first.
    pub fn drain(&mut self) -> Vec<RegistryEvent> {
        std::iter::from_fn(|| self.try_recv().ok().flatten()).collect()
    }

    /// Events dropped because this subscriber fell behind.
    #[must_use]
    pub fn missed(&self) -> u64 {
        self.missed
    }

    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    fn record_lag(&mut self, lost: u64) {
        self.missed = self.missed.saturating_add(lost);
        warn!(lost, total_missed = self.missed, "Subscriber lagged behind the registry");
    }
}
