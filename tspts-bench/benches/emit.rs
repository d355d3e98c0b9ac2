//! End-to-end emission benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tspts_bench::fixtures::{chain, ring};
use tspts_codegen::{EmitterOptions, generate};
use tspts_schema::SchemaGraph;

fn bench_graphs(c: &mut Criterion, name: &str, build: fn(usize) -> Option<SchemaGraph>) {
    let mut group = c.benchmark_group(name);
    for len in [10usize, 50, 200] {
        let Some(graph) = build(len) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(len), &graph, |b, graph| {
            b.iter(|| black_box(generate(graph, EmitterOptions::default()).is_ok()))
        });
    }
    group.finish();
}

fn benchmark_emit_chain(c: &mut Criterion) {
    bench_graphs(c, "emit_chain", |len| chain(len).ok());
}

fn benchmark_emit_ring(c: &mut Criterion) {
    bench_graphs(c, "emit_ring", |len| ring(len).ok());
}

criterion_group!(benches, benchmark_emit_chain, benchmark_emit_ring);
criterion_main!(benches);
