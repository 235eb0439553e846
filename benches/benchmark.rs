//! Benchmarks for wordnet_sap

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordnet_sap::*;

/// A complete `branching`-ary tree of the given depth, edges pointing at the
/// root (vertex 0), plus a cross edge per vertex to make it a DAG rather
/// than a tree
fn synthetic_hierarchy(branching: usize, depth: u32) -> Digraph {
    let n: usize = (0..=depth).map(|d| branching.pow(d)).sum();
    let mut builder = DigraphBuilder::new(n);
    for v in 1..n {
        let parent = (v - 1) / branching;
        builder.add_edge(v, parent).unwrap();
        if parent > 0 && v % 7 == 0 {
            builder.add_edge(v, parent - 1).unwrap();
        }
    }
    builder.build()
}

fn synthetic_taxonomy(branching: usize, depth: u32) -> Taxonomy {
    let graph = synthetic_hierarchy(branching, depth);
    let synsets: String = (0..graph.vertex_count())
        .map(|v| format!("{},noun{} alias{},gloss of {}\n", v, v, v / 3, v))
        .collect();
    let hypernyms: String = (0..graph.vertex_count())
        .map(|v| {
            let parents: Vec<String> = graph.adjacent(v).unwrap().iter().map(|p| p.to_string()).collect();
            if parents.is_empty() {
                format!("{}\n", v)
            } else {
                format!("{},{}\n", v, parents.join(","))
            }
        })
        .collect();
    Taxonomy::new(synsets.as_bytes(), hypernyms.as_bytes()).unwrap()
}

fn benchmark_bfs(c: &mut Criterion) {
    let graph = synthetic_hierarchy(4, 7);
    let leaf = graph.vertex_count() - 1;

    c.bench_function("bfs_single_source", |b| {
        b.iter(|| MultiSourceBfs::single(black_box(&graph), black_box(leaf)).unwrap())
    });

    let sources: Vec<Vertex> = (graph.vertex_count() - 64..graph.vertex_count()).collect();
    c.bench_function("bfs_64_sources", |b| {
        b.iter(|| MultiSourceBfs::new(black_box(&graph), sources.iter().copied()).unwrap())
    });
}

fn benchmark_sap(c: &mut Criterion) {
    let mut group = c.benchmark_group("sap_length_by_size");
    for depth in [4u32, 6, 8].iter() {
        let graph = synthetic_hierarchy(3, *depth);
        let n = graph.vertex_count();
        let sap = Sap::new(graph);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &sap, |b, sap| {
            b.iter(|| sap.length(black_box(n - 1), black_box(n / 2)).unwrap())
        });
    }
    group.finish();

    let sap = Sap::new(synthetic_hierarchy(3, 7));
    let n = sap.graph().vertex_count();
    let vs: Vec<Vertex> = (n - 20..n).collect();
    let ws: Vec<Vertex> = (n / 2..n / 2 + 20).collect();
    c.bench_function("sap_sets_20x20", |b| {
        b.iter(|| sap.length_sets(black_box(&vs), black_box(&ws)).unwrap())
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let sap = Sap::new(synthetic_hierarchy(3, 7));
    let n = sap.graph().vertex_count();
    let pairs: Vec<(Vertex, Vertex)> = (0..512).map(|i| ((i * 31) % n, (i * 97 + 5) % n)).collect();

    let mut group = c.benchmark_group("sap_batch_512");
    group.bench_function("sequential", |b| {
        let sequential = sap.clone().with_parallel_threshold(usize::MAX);
        b.iter(|| sequential.lengths_batch(black_box(&pairs)).unwrap())
    });
    group.bench_function("parallel", |b| {
        let parallel = sap.clone().with_parallel_threshold(1);
        b.iter(|| parallel.lengths_batch(black_box(&pairs)).unwrap())
    });
    group.finish();
}

fn benchmark_taxonomy(c: &mut Criterion) {
    c.bench_function("taxonomy_load_3280", |b| b.iter(|| synthetic_taxonomy(3, 7)));

    let taxonomy = synthetic_taxonomy(3, 7);
    c.bench_function("taxonomy_distance_polysemous", |b| {
        b.iter(|| taxonomy.distance(black_box("alias700"), black_box("noun3000")).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_bfs,
    benchmark_sap,
    benchmark_batch,
    benchmark_taxonomy
);
criterion_main!(benches);
