// Criterion benchmarks for the Prim and Kruskal calculators
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mstbench_core::{Algorithm, DisjointSet, Edge, Graph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Connected random graph with roughly `density` edges per vertex
fn generate_random_graph(vertices: usize, density: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(vertices as u64);
    let nodes: Vec<String> = (0..vertices).map(|i| format!("v{}", i)).collect();
    let mut edges = Vec::with_capacity(vertices * density);

    for i in 1..vertices {
        let j = rng.random_range(0..i);
        edges.push(Edge::new(nodes[i].clone(), nodes[j].clone(), rng.random_range(0.0..100.0)));
    }
    for _ in 0..vertices * density.saturating_sub(1) {
        let a = rng.random_range(0..vertices);
        let b = rng.random_range(0..vertices);
        edges.push(Edge::new(nodes[a].clone(), nodes[b].clone(), rng.random_range(0.0..100.0)));
    }

    Graph::new(format!("random-{}", vertices), nodes, edges)
}

fn benchmark_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    for size in [100, 1000, 10000].iter() {
        let graph = generate_random_graph(*size, 4);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &graph, |b, graph| {
                b.iter(|| {
                    let result = algorithm.compute(black_box(graph));
                    black_box(result);
                });
            });
        }
    }

    group.finish();
}

fn benchmark_dense_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_dense");
    let graph = generate_random_graph(500, 64);

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(algorithm.compute(black_box(&graph))));
        });
    }

    group.finish();
}

fn benchmark_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_set");
    let graph = generate_random_graph(10000, 4);

    group.bench_function("union_all_edges", |b| {
        b.iter(|| {
            let mut forest = DisjointSet::new(graph.nodes());
            for edge in graph.edges() {
                let (x, y) = (forest.find(&edge.from), forest.find(&edge.to));
                forest.union(x, y);
            }
            black_box(forest.len());
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_algorithms, benchmark_dense_graph, benchmark_disjoint_set);
criterion_main!(benches);
