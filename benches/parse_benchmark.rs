//! Benchmarks racing the three JSON libraries.
//!
//! Run with: cargo bench
//!
//! These benchmarks parse and serialize generated record arrays at various
//! sizes with each library, and time a full driver run end to end.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use tribench::Library;

/// Builds a JSON array of `record_count` synthetic records.
fn build_records(record_count: usize) -> String {
    let records: Vec<serde_json::Value> = (0..record_count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "name": format!("record-{i}"),
                "score": i as f64 * 0.25,
                "active": i % 2 == 0,
                "tags": ["alpha", "beta", "gamma"]
            })
        })
        .collect();

    serde_json::Value::Array(records).to_string()
}

/// Benchmark parsing at various input sizes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for record_count in [10, 100, 1000, 10000].iter() {
        let data = build_records(*record_count);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("serde_json", record_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _: serde_json::Value = serde_json::from_str(black_box(data)).unwrap();
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("simd-json", record_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut bytes = black_box(data).as_bytes().to_vec();
                    let _ = simd_json::to_owned_value(&mut bytes).unwrap();
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sonic-rs", record_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _: sonic_rs::Value = sonic_rs::from_str(black_box(data)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark compact serialization from an already-parsed document.
fn bench_export_raw(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_raw");
    let data = build_records(1000);

    let serde_value: serde_json::Value = serde_json::from_str(&data).unwrap();
    group.bench_function("serde_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&serde_value)).unwrap());
    });

    let mut bytes = data.as_bytes().to_vec();
    let simd_value = simd_json::to_owned_value(&mut bytes).unwrap();
    group.bench_function("simd-json", |b| {
        b.iter(|| simd_json::to_string(black_box(&simd_value)).unwrap());
    });

    let sonic_value: sonic_rs::Value = sonic_rs::from_str(&data).unwrap();
    group.bench_function("sonic-rs", |b| {
        b.iter(|| sonic_rs::to_string(black_box(&sonic_value)).unwrap());
    });

    group.finish();
}

/// Benchmark a full driver run (parse plus all three exports).
fn bench_full_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_driver");
    group.sample_size(20);

    let data = build_records(1000);
    let dir = tempfile::tempdir().unwrap();

    for library in Library::enabled() {
        let output_dir = dir.path().join(library.dir_name());
        std::fs::create_dir_all(&output_dir).unwrap();

        group.bench_function(library.name(), |b| {
            b.iter(|| {
                tribench::run_driver(library, black_box(&data), &output_dir, &mut io::sink())
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_export_raw, bench_full_driver);
criterion_main!(benches);
