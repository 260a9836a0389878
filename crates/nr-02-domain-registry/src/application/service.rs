//! Domain Registry Service
//!
//! Async front for the reservation engine.
//!
//! - Serializes every operation through one write lock, so requests never
//!   interleave and each commits or rolls back before the next starts
//! - Publishes the committed event while still holding the lock, so
//!   subscribers see events in commit order
//! - Counts accepted and rejected calls per operation

use crate::domain::engine::ReservationEngine;
use crate::domain::entities::{Operation, Registration};
use crate::domain::errors::RegistryError;
use crate::domain::invariants::InvariantViolation;
use crate::ipc::payloads::{RegistryRequest, RegistryResponse, RequestEnvelope};
use crate::ports::inbound::DomainRegistryApi;
use crate::ports::outbound::ValueLedger;
use serde::Serialize;
use shared_bus::EventPublisher;
use shared_types::{Address, Amount, RegistryEvent};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

/// Accepted/rejected counts for one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OperationStats {
    pub succeeded: u64,
    pub rejected: u64,
}

/// Point-in-time copy of the service counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    pub reserve: OperationStats,
    pub change_deposit: OperationStats,
    pub transfer_control: OperationStats,
    pub release: OperationStats,
    pub withdraw_funds: OperationStats,
    /// Events handed to the publisher.
    pub events_published: u64,
}

impl ServiceStats {
    #[must_use]
    pub fn get(&self, operation: Operation) -> OperationStats {
        match operation {
            Operation::Reserve => self.reserve,
            Operation::ChangeDeposit => self.change_deposit,
            Operation::TransferControl => self.transfer_control,
            Operation::Release => self.release,
            Operation::WithdrawFunds => self.withdraw_funds,
        }
    }

    #[must_use]
    pub fn total_succeeded(&self) -> u64 {
        Operation::ALL.iter().map(|op| self.get(*op).succeeded).sum()
    }

    #[must_use]
    pub fn total_rejected(&self) -> u64 {
        Operation::ALL.iter().map(|op| self.get(*op).rejected).sum()
    }
}

#[derive(Debug, Default)]
struct Counter {
    succeeded: AtomicU64,
    rejected: AtomicU64,
}

impl Counter {
    fn snapshot(&self) -> OperationStats {
        OperationStats {
            succeeded: self.succeeded.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Default)]
struct StatsRecorder {
    counters: [Counter; 5],
    events_published: AtomicU64,
}

impl StatsRecorder {
    fn counter(&self, operation: Operation) -> &Counter {
        let index = match operation {
            Operation::Reserve => 0,
            Operation::ChangeDeposit => 1,
            Operation::TransferControl => 2,
            Operation::Release => 3,
            Operation::WithdrawFunds => 4,
        };
        &self.counters[index]
    }

    fn record(&self, operation: Operation, accepted: bool) {
        let counter = self.counter(operation);
        if accepted {
            counter.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            counter.rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn snapshot(&self) -> ServiceStats {
        ServiceStats {
            reserve: self.counter(Operation::Reserve).snapshot(),
            change_deposit: self.counter(Operation::ChangeDeposit).snapshot(),
            transfer_control: self.counter(Operation::TransferControl).snapshot(),
            release: self.counter(Operation::Release).snapshot(),
            withdraw_funds: self.counter(Operation::WithdrawFunds).snapshot(),
            events_published: self.events_published.load(Ordering::Relaxed),
        }
    }
}

/// Domain Registry Service.
pub struct RegistryService<L: ValueLedger> {
    engine: RwLock<ReservationEngine<L>>,
    publisher: Arc<dyn EventPublisher>,
    stats: StatsRecorder,
}

impl<L: ValueLedger> RegistryService<L> {
    /// Wraps an engine. Committed events go to `publisher`.
    pub fn new(engine: ReservationEngine<L>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            engine: RwLock::new(engine),
            publisher,
            stats: StatsRecorder::default(),
        }
    }

    /// Runs one engine operation under the write lock.
    async fn execute<F>(&self, operation: Operation, f: F) -> Result<RegistryEvent, RegistryError>
    where
        F: FnOnce(&mut ReservationEngine<L>) -> Result<RegistryEvent, RegistryError>,
    {
        let mut engine = self.engine.write().await;
        match f(&mut engine) {
            Ok(event) => {
                self.stats.record(operation, true);
                let receivers = self.publisher.publish(event.clone()).await;
                self.stats.events_published.fetch_add(1, Ordering::Relaxed);
                debug!(operation = operation.as_str(), receivers, "Event published");
                Ok(event)
            }
            Err(err) => {
                self.stats.record(operation, false);
                warn!(
                    operation = operation.as_str(),
                    kind = err.kind(),
                    error = %err,
                    "Operation rejected"
                );
                Err(err)
            }
        }
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    #[instrument(skip(self), fields(op = "reserve"))]
    pub async fn reserve(
        &self,
        caller: Address,
        name: &str,
        payment: Amount,
    ) -> Result<RegistryEvent, RegistryError> {
        self.execute(Operation::Reserve, |engine| {
            engine.reserve(caller, name, payment)
        })
        .await
    }

    #[instrument(skip(self), fields(op = "change_deposit"))]
    pub async fn change_deposit(
        &self,
        caller: Address,
        name: &str,
        new_amount: Amount,
        supplied_value: Amount,
    ) -> Result<RegistryEvent, RegistryError> {
        self.execute(Operation::ChangeDeposit, |engine| {
            engine.change_deposit(caller, name, new_amount, supplied_value)
        })
        .await
    }

    #[instrument(skip(self), fields(op = "transfer_control"))]
    pub async fn transfer_control(
        &self,
        caller: Address,
        name: &str,
        new_controller: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        self.execute(Operation::TransferControl, |engine| {
            engine.transfer_control(caller, name, new_controller)
        })
        .await
    }

    #[instrument(skip(self), fields(op = "release"))]
    pub async fn release(&self, caller: Address, name: &str) -> Result<RegistryEvent, RegistryError> {
        self.execute(Operation::Release, |engine| engine.release(caller, name))
            .await
    }

    #[instrument(skip(self), fields(op = "withdraw_funds"))]
    pub async fn withdraw_funds(
        &self,
        caller: Address,
        to: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        self.execute(Operation::WithdrawFunds, |engine| {
            engine.withdraw_funds(caller, to)
        })
        .await
    }

    /// Dispatches an IPC envelope and wraps the outcome.
    #[instrument(skip(self, envelope), fields(correlation_id = %envelope.correlation_id))]
    pub async fn submit(&self, envelope: RequestEnvelope) -> RegistryResponse {
        let RequestEnvelope {
            correlation_id,
            caller,
            request,
        } = envelope;
        let operation = request.operation();

        let result = match request {
            RegistryRequest::Reserve { name, payment } => {
                self.reserve(caller, &name, payment).await
            }
            RegistryRequest::ChangeDeposit {
                name,
                new_amount,
                supplied_value,
            } => {
                self.change_deposit(caller, &name, new_amount, supplied_value)
                    .await
            }
            RegistryRequest::TransferControl {
                name,
                new_controller,
            } => self.transfer_control(caller, &name, new_controller).await,
            RegistryRequest::Release { name } => self.release(caller, &name).await,
            RegistryRequest::WithdrawFunds { to } => self.withdraw_funds(caller, to).await,
        };

        match result {
            Ok(event) => RegistryResponse::accepted(correlation_id, operation, event),
            Err(err) => RegistryResponse::rejected(correlation_id, operation, &err),
        }
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub async fn controller_of(&self, name: &str) -> Address {
        self.engine.read().await.controller_of(name)
    }

    pub async fn deposit_of(&self, name: &str) -> Amount {
        self.engine.read().await.deposit_of(name)
    }

    pub async fn total_reserved(&self) -> usize {
        self.engine.read().await.total_reserved()
    }

    pub async fn registration(&self, name: &str) -> Option<Registration> {
        self.engine.read().await.registration(name).cloned()
    }

    pub async fn child_count(&self, name: &str) -> u64 {
        self.engine.read().await.child_count(name)
    }

    pub async fn total_escrowed(&self) -> Amount {
        self.engine.read().await.total_escrowed()
    }

    pub async fn treasury_balance(&self) -> Amount {
        self.engine.read().await.treasury_balance()
    }

    pub async fn verify_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        self.engine.read().await.verify_invariants()
    }

    /// Read access to the whole engine.
    pub async fn with_engine<R>(&self, f: impl FnOnce(&ReservationEngine<L>) -> R) -> R {
        f(&*self.engine.read().await)
    }

    /// Ledger access for the host, e.g. to fund principals.
    pub async fn with_ledger_mut<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        f(self.engine.write().await.ledger_mut())
    }

    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        self.stats.snapshot()
    }
}
