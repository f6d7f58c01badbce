//! Criterion benchmarks for grindplan_core timeline assembly
//!
//! Run with: cargo bench -p grindplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use grindplan_core::assemble::assemble;
use grindplan_core::config::{EventSpec, PlannerSnapshot, SnapshotBuilder};
use grindplan_core::model::{Currency, HorizonWeeks, Run, RunField};

fn create_loaded_snapshot(horizon: HorizonWeeks) -> PlannerSnapshot {
    let mut builder = SnapshotBuilder::new(jiff::civil::date(2026, 8, 6))
        .horizon(horizon)
        .currency(Currency::Coins, 2_400.0, 500.0, 2.0)
        .currency(Currency::Stones, 130.0, 40.0, 0.5)
        .currency(Currency::Gems, 80.0, 0.0, 0.0)
        .currency(Currency::Trophies, 300.0, 25.0, 1.0);

    // A busy queue: events every other week, a third of them multi-week.
    let currencies = [Currency::Coins, Currency::Stones, Currency::Trophies];
    for index in 0..30u32 {
        let currency = currencies[(index % 3) as usize];
        let trigger_week = (index * 2) % horizon.count();
        let mut spec = EventSpec::new(
            format!("event {index}"),
            currency,
            50.0 + f64::from(index) * 10.0,
            trigger_week,
        );
        if index % 3 == 0 {
            spec = spec.duration_days(21);
        }
        builder = builder.event(spec);
    }

    // Roughly three months of daily runs behind the derived figures.
    let mut day = jiff::civil::date(2026, 5, 6);
    while day <= jiff::civil::date(2026, 8, 6) {
        builder = builder.run(
            Run::new(day.at(20, 30, 0, 0))
                .with_field(RunField::Coins, 950.0)
                .with_field(RunField::Stones, 40.0)
                .with_field(RunField::RawStones, 12.0)
                .with_field(RunField::Trophies, 3.0),
        );
        day = day.tomorrow().unwrap();
    }

    builder.build().unwrap()
}

fn bench_assemble_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for horizon in [HorizonWeeks::Twelve, HorizonWeeks::FiftyTwo] {
        let snapshot = create_loaded_snapshot(horizon);
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon.count()),
            &snapshot,
            |b, snapshot| b.iter(|| assemble(black_box(snapshot))),
        );
    }
    group.finish();
}

fn bench_refresh_derived(c: &mut Criterion) {
    let snapshot = create_loaded_snapshot(HorizonWeeks::FiftyTwo);
    c.bench_function("refresh_derived", |b| {
        b.iter(|| {
            let mut snapshot = snapshot.clone();
            snapshot.refresh_derived(black_box(
                grindplan_core::model::LookbackPeriod::ThreeMonths,
            ));
            snapshot
        })
    });
}

criterion_group!(benches, bench_assemble_horizons, bench_refresh_derived);
criterion_main!(benches);
