use anyhow::{Context, Result};
use mstbench_core::{Algorithm, BenchmarkConfig, Graph, GraphDataset, MstResult};
use tracing::{debug, info, warn};

use crate::results::{GraphComputationResult, InputStats};

fn benchmark(algorithm: Algorithm, graph: &Graph, config: &BenchmarkConfig) -> Result<MstResult> {
    let result = config
        .run(|| algorithm.compute(graph))
        .with_context(|| format!("{} on graph {}", algorithm, graph.id()))?;

    debug!(
        graph = graph.id(),
        %algorithm,
        total_cost = result.total_cost(),
        tree_edges = result.mst_edges().len(),
        operations = result.operations_count(),
        time_ms = result.execution_time_ms(),
        "MST computed"
    );
    Ok(result)
}

/// Benchmark both algorithms on one graph
pub fn compute_graph(graph: &Graph, config: &BenchmarkConfig) -> Result<GraphComputationResult> {
    let prim_result = benchmark(Algorithm::Prim, graph, config)?;
    let kruskal_result = benchmark(Algorithm::Kruskal, graph, config)?;

    if !prim_result.is_connected() || !kruskal_result.is_connected() {
        warn!(graph = graph.id(), "graph is not connected, reporting a spanning forest");
    } else if (prim_result.total_cost() - kruskal_result.total_cost()).abs() > 1e-9 {
        warn!(
            graph = graph.id(),
            prim = prim_result.total_cost(),
            kruskal = kruskal_result.total_cost(),
            "Prim and Kruskal disagree on total cost"
        );
    }

    Ok(GraphComputationResult {
        graph_id: graph.id().to_string(),
        input_stats: InputStats::of(graph),
        prim_result,
        kruskal_result,
    })
}

/// Benchmark every graph of the dataset, in dataset order
pub fn run_dataset(dataset: &GraphDataset, config: &BenchmarkConfig) -> Result<Vec<GraphComputationResult>> {
    info!(
        graphs = dataset.len(),
        warmup_runs = config.warmup_runs,
        measurement_runs = config.measurement_runs,
        "Running MST benchmarks"
    );

    let results = dataset
        .graphs
        .iter()
        .map(|graph| compute_graph(graph, config))
        .collect::<Result<Vec<_>>>()?;

    info!("Computed {} graph results", results.len());
    Ok(results)
}
