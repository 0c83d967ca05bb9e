//! Benchmarks for seek predicate construction and full pagination calls.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use seekset::{
    Anchor, MemoryRow, MemorySource, Options, OrderExpr, OrderSpec, SortDir, Traversal,
    TraversalParams, Value, assemble, paginate, seek_predicate,
};

fn order_with_columns(extra: usize) -> OrderSpec {
    let existing: Vec<OrderExpr> = (0..extra).map(|i| OrderExpr::asc(format!("c{i}"))).collect();
    OrderSpec::normalize(&existing, "id", SortDir::Asc, |_| true).expect("valid order")
}

fn anchor_for(order: &OrderSpec) -> Anchor {
    order
        .columns()
        .iter()
        .fold(Anchor::new(), |anchor, col| anchor.field(col.name.clone(), 42_i64))
}

fn bench_seek_predicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("seek_predicate");

    for extra in [0_usize, 2, 4] {
        let order = order_with_columns(extra);
        let anchor = anchor_for(&order);
        let traversal = Traversal::After(Value::Int(42));

        group.bench_with_input(
            BenchmarkId::new("columns", extra + 1),
            &(order, anchor),
            |b, (order, anchor)| {
                b.iter(|| seek_predicate(black_box(order), black_box(&traversal), black_box(anchor)))
            },
        );
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let order = order_with_columns(0);

    c.bench_function("assemble_100_rows", |b| {
        b.iter_batched(
            || {
                (0..101_i64)
                    .map(|id| MemoryRow::new().with("id", id))
                    .collect::<Vec<_>>()
            },
            |rows| assemble(black_box(rows), 100, &Traversal::Before(Value::Int(200)), &order),
            BatchSize::SmallInput,
        )
    });
}

fn big_source() -> MemorySource {
    let mut source =
        MemorySource::new("id", &["id", "grp"]).with_ordering(vec![OrderExpr::asc("grp")]);
    for id in 0..1_000_i64 {
        source.push(MemoryRow::new().with("id", id).with("grp", id % 7));
    }
    source
}

fn bench_paginate(c: &mut Criterion) {
    let source = big_source();
    let options = Options::new().limit(50);

    c.bench_function("paginate_first_page", |b| {
        b.iter(|| paginate(black_box(&source), &TraversalParams::none(), &options))
    });

    c.bench_function("paginate_mid_cursor", |b| {
        b.iter(|| paginate(black_box(&source), &TraversalParams::after(500_i64), &options))
    });

    c.bench_function("paginate_backward", |b| {
        b.iter(|| paginate(black_box(&source), &TraversalParams::before(500_i64), &options))
    });
}

criterion_group!(benches, bench_seek_predicate, bench_assemble, bench_paginate);
criterion_main!(benches);
