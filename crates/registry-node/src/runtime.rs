//! Node runtime: one registry service, one event bus, one replay loop.

use crate::script::{Funding, Script};
use anyhow::{Context, Result};
use nr_02_domain_registry::{
    InMemoryLedger, RegistryConfig, RegistryResponse, RegistryService, ReservationEngine,
    ServiceStats,
};
use registry_telemetry::log_domain_event;
use serde::Serialize;
use shared_bus::{EventFilter, InMemoryEventBus, Subscription};
use shared_types::{decimal, Address, Amount};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

/// One reserved name in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub name: String,
    pub controller: Address,
    #[serde(with = "decimal")]
    pub deposit: Amount,
    pub child_count: u64,
}

/// Registry state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    pub total_reserved: usize,
    #[serde(with = "decimal")]
    pub total_escrowed: Amount,
    #[serde(with = "decimal")]
    pub treasury_balance: Amount,
    /// Sorted by name.
    pub registrations: Vec<RegistrationReport>,
    pub stats: ServiceStats,
    /// Empty when every invariant holds.
    pub invariant_violations: Vec<String>,
}

impl FinalReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.invariant_violations.is_empty()
    }
}

/// The registry node.
pub struct NodeRuntime {
    service: Arc<RegistryService<InMemoryLedger>>,
    bus: Arc<InMemoryEventBus>,
    events: Subscription,
}

impl NodeRuntime {
    /// Builds the engine and service over an empty ledger.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let engine = ReservationEngine::with_ledger(config, InMemoryLedger::new())
            .context("Failed to initialize reservation engine")?;
        let bus = Arc::new(InMemoryEventBus::new());
        let events = bus.subscribe(EventFilter::all());
        let service = Arc::new(RegistryService::new(engine, bus.clone()));

        info!("Registry node created");
        Ok(Self {
            service,
            bus,
            events,
        })
    }

    #[must_use]
    pub fn service(&self) -> Arc<RegistryService<InMemoryLedger>> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn bus(&self) -> Arc<InMemoryEventBus> {
        Arc::clone(&self.bus)
    }

    /// Credits each principal before replay.
    pub async fn fund(&self, funding: &[Funding]) -> Result<()> {
        for entry in funding {
            self.service
                .with_ledger_mut(|ledger| ledger.fund(entry.account, entry.amount))
                .await
                .with_context(|| format!("Failed to fund {}", entry.account))?;
        }
        info!(accounts = funding.len(), "Principals funded");
        Ok(())
    }

    /// Funds, then submits every step in order, writing one JSON response
    /// per line to `out`. Rejected steps are reported, not fatal.
    pub async fn replay<W: Write>(
        &mut self,
        script: Script,
        out: &mut W,
    ) -> Result<Vec<RegistryResponse>> {
        self.fund(&script.funding).await?;

        let total = script.steps.len();
        let mut responses = Vec::with_capacity(total);
        for (index, step) in script.steps.into_iter().enumerate() {
            let response = self.service.submit(step.into_envelope()).await;
            if !response.accepted {
                warn!(
                    step = index,
                    kind = response.error_kind.as_deref().unwrap_or("-"),
                    "Step rejected"
                );
            }
            serde_json::to_writer(&mut *out, &response).context("Failed to write response")?;
            writeln!(out).context("Failed to write response")?;

            for event in self.events.drain() {
                log_domain_event!(info, event, step = index);
            }
            responses.push(response);
        }

        let accepted = responses.iter().filter(|r| r.accepted).count();
        info!(steps = total, accepted, rejected = total - accepted, "Replay complete");
        Ok(responses)
    }

    /// Snapshot of the registry state and invariant check.
    pub async fn report(&self) -> FinalReport {
        let mut registrations: Vec<RegistrationReport> = self
            .service
            .with_engine(|engine| {
                engine
                    .store()
                    .iter()
                    .map(|reg| RegistrationReport {
                        name: reg.name.to_string(),
                        controller: reg.controller,
                        deposit: reg.deposit,
                        child_count: reg.child_count,
                    })
                    .collect()
            })
            .await;
        registrations.sort_by(|a, b| a.name.cmp(&b.name));

        let invariant_violations = match self.service.verify_invariants().await {
            Ok(()) => Vec::new(),
            Err(violations) => violations.iter().map(ToString::to_string).collect(),
        };

        FinalReport {
            total_reserved: self.service.total_reserved().await,
            total_escrowed: self.service.total_escrowed().await,
            treasury_balance: self.service.treasury_balance().await,
            registrations,
            stats: self.service.stats(),
            invariant_violations,
        }
    }
}
