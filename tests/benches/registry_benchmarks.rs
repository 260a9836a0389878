//! # Name Registry Benchmarks
//!
//! | Component | Operation | Expected cost |
//! |-----------|-----------|---------------|
//! | nr-01 Name Validator | parse + Keccak key | O(name length) |
//! | nr-02 Domain Registry | reserve / release | O(1) point lookups (self, parent) |
//! | nr-02 Domain Registry | views on a populated store | O(1) regardless of size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nr_01_name_validator::DomainName;
use nr_02_domain_registry::{
    DomainRegistryApi, InMemoryLedger, RegistryConfig, ReservationEngine,
};
use shared_types::{units, Address};
use std::time::Duration;

fn caller() -> Address {
    Address::repeat_byte(0xA1)
}

fn engine() -> ReservationEngine<InMemoryLedger> {
    let ledger = InMemoryLedger::new().with_balance(caller(), units(u64::MAX / 2));
    match ReservationEngine::with_ledger(RegistryConfig::with_admin(Address::repeat_byte(0xAD)), ledger) {
        Ok(engine) => engine,
        Err(e) => panic!("benchmark config rejected: {e}"),
    }
}

// ============================================================================
// NR-01: Name Validator
// ============================================================================

fn bench_name_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("nr-01-name-validator");

    for depth in [2usize, 8, 32] {
        let name = (0..depth)
            .map(|i| format!("label{i}"))
            .collect::<Vec<_>>()
            .join(".");
        group.throughput(Throughput::Bytes(name.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_and_key", depth), &name, |b, name| {
            b.iter(|| {
                let parsed = DomainName::parse(black_box(name));
                black_box(parsed.map(|n| n.key()))
            })
        });
    }

    group.finish();
}

// ============================================================================
// NR-02: Domain Registry
// ============================================================================

fn bench_reserve_release_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("nr-02-domain-registry");
    group.measurement_time(Duration::from_secs(5));

    let mut registry = engine();
    group.bench_function("reserve_release_root", |b| {
        b.iter(|| {
            let reserved = registry.reserve(caller(), black_box("example.com"), units(1));
            let released = registry.release(caller(), black_box("example.com"));
            black_box((reserved, released))
        })
    });

    let mut registry = engine();
    if let Err(e) = registry.reserve(caller(), "example.com", units(1)) {
        panic!("parent reservation failed: {e}");
    }
    group.bench_function("reserve_release_child", |b| {
        b.iter(|| {
            let reserved = registry.reserve(caller(), black_box("sub.example.com"), units(1));
            let released = registry.release(caller(), black_box("sub.example.com"));
            black_box((reserved, released))
        })
    });

    group.finish();
}

fn bench_views_on_populated_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("nr-02-views");

    for size in [100usize, 10_000] {
        let mut registry = engine();
        for i in 0..size {
            if let Err(e) = registry.reserve(caller(), &format!("name{i}.com"), units(1)) {
                panic!("population failed: {e}");
            }
        }

        group.bench_with_input(BenchmarkId::new("controller_of", size), &registry, |b, r| {
            b.iter(|| black_box(r.controller_of(black_box("name42.com"))))
        });
        group.bench_with_input(BenchmarkId::new("verify_invariants", size), &registry, |b, r| {
            b.iter(|| black_box(r.verify_invariants().is_ok()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_name_parsing,
    bench_reserve_release_cycle,
    bench_views_on_populated_store
);
criterion_main!(benches);
