//! # Integration Tests
//!
//! - `scenarios`: reservation lifecycles across parents and children
//! - `atomicity`: every rejection leaves store, treasury and ledger untouched
//! - `event_flow`: service → event bus → subscribers, IPC envelopes, node replay

pub mod atomicity;
pub mod scenarios;
