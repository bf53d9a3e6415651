//! Benchmarks for view refreshing.
//!
//! Every master mutation rescans the master once per view, so refresh cost
//! grows with master size times view count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::rc::Rc;
use vista_collection::{filter_by, MasterCollection, RecordStore};
use vista_core::Record;
use vista_views::{Predicate, ViewedCollection, ViewsConfig};

fn people(size: u64) -> Rc<RecordStore> {
    let records = (0..size)
        .map(|i| Record::new(i).with_field("Age", (i % 100) as i64))
        .collect();
    Rc::new(RecordStore::with_records(records).unwrap())
}

fn over(limit: i64) -> Predicate {
    Predicate::new(move |r| r.get("Age").and_then(|v| v.as_i64()).unwrap_or(0) > limit)
}

fn bench_filter_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by");

    for size in [100, 1_000, 10_000] {
        let store = people(size);
        let records = store.records();

        group.bench_with_input(BenchmarkId::new("age_gt_50", size), &records, |b, records| {
            b.iter(|| {
                filter_by(black_box(records), |r| {
                    Ok(r.get("Age").and_then(|v| v.as_i64()).unwrap_or(0) > 50)
                })
            })
        });
    }

    group.finish();
}

fn bench_refresh_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh_all");

    for size in [100, 1_000, 10_000] {
        let store = people(size);
        let views = ViewedCollection::new(
            store,
            ViewsConfig::new()
                .with_view("Over20", over(20))
                .with_view("Over50", over(50))
                .with_view("Over80", over(80)),
        );

        group.bench_function(BenchmarkId::new("three_views", size), |b| {
            b.iter(|| black_box(views.refresh_all()))
        });
    }

    group.finish();
}

fn bench_update_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for size in [100, 1_000, 10_000] {
        let store = people(size);
        let _views = ViewedCollection::new(
            store.clone(),
            ViewsConfig::new().with_view("Over20", over(20)).with_view("Over50", over(50)),
        );
        let mut age = 0i64;

        group.bench_function(BenchmarkId::new("single_record", size), |b| {
            b.iter(|| {
                age = (age + 1) % 100;
                store.update(0, |r| r.set("Age", black_box(age))).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_by, bench_refresh_all, bench_update_propagation);
criterion_main!(benches);
