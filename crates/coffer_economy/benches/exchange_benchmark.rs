//! Benchmark for the value <-> coin conversions.
//!
//! Run with: cargo bench --package coffer_economy --bench exchange_benchmark

// criterion_group! emits an undocumented `pub fn`
#![allow(missing_docs)]

use coffer_economy::{balance, deposit, withdraw, Denomination, Inventory, Schedule, UnitType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_test_schedule() -> Schedule {
    let values = [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];
    let denominations = values
        .iter()
        .zip(1u32..)
        .map(|(&value, item_id)| {
            Denomination::new(UnitType::stackable(item_id), value, format!("Coin_{value}"))
        })
        .collect();
    Schedule::new(denominations).unwrap()
}

fn benchmark_balance(c: &mut Criterion) {
    let schedule = create_test_schedule();
    let mut inventory = Inventory::with_slots(64);
    deposit(&mut inventory, &schedule, 123_456);

    c.bench_function("balance_64_slots", |b| {
        b.iter(|| black_box(balance(&inventory, &schedule)));
    });
}

fn benchmark_deposit(c: &mut Criterion) {
    let schedule = create_test_schedule();

    c.bench_function("deposit_into_empty", |b| {
        b.iter(|| {
            let mut inventory = Inventory::with_slots(64);
            black_box(deposit(&mut inventory, &schedule, black_box(98_765)))
        });
    });
}

fn benchmark_deposit_withdraw(c: &mut Criterion) {
    let schedule = create_test_schedule();
    let mut inventory = Inventory::with_slots(64);
    deposit(&mut inventory, &schedule, 500_000);

    c.bench_function("deposit_then_withdraw", |b| {
        b.iter(|| {
            let added = deposit(&mut inventory, &schedule, black_box(4_321));
            black_box(withdraw(&mut inventory, &schedule, added))
        });
    });
}

criterion_group!(
    benches,
    benchmark_balance,
    benchmark_deposit,
    benchmark_deposit_withdraw
);
criterion_main!(benches);
