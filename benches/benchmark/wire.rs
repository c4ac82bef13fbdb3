use crate::common::{configure_criterion, wide_error};
use criterion::{criterion_group, Criterion};
use outcome_rail::{Error, Outcome};
use std::hint::black_box;

pub fn bench_serialize(c: &mut Criterion) {
    let failed: Outcome<u64> = Outcome::error(wide_error(8)).with_warnings(["partial"]);
    c.bench_function("wire/serialize_failed_outcome", |b| {
        b.iter(|| black_box(serde_json::to_string(&failed)))
    });
}

pub fn bench_deserialize(c: &mut Criterion) {
    let json = serde_json::to_string(&wide_error(8)).unwrap_or_default();
    c.bench_function("wire/deserialize_error_tree", |b| {
        b.iter(|| black_box(serde_json::from_str::<Error>(&json)))
    });
}

criterion_group! {
    name = wire_benches;
    config = configure_criterion();
    targets = bench_serialize, bench_deserialize,
}
