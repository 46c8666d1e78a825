//! # mstbench
//!
//! Side-by-side benchmark of Prim's and Kruskal's minimum spanning tree
//! algorithms on labeled, weighted, undirected graphs.
//!
//! For every graph, both algorithms report the tree they selected, its
//! total weight, whether the graph is connected, how many comparisons,
//! updates and unions they performed, and a median-stabilized execution
//! time.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install mstbench
//! MST_WARMUP_RUNS=3 MST_MEASUREMENT_RUNS=7 \
//!     mstbench data/input.json results/output.json results/comparison.csv
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use mstbench::prelude::*;
//!
//! let dataset = GraphDataset::from_json(r#"{
//!     "graphs": [{
//!         "id": "disconnected",
//!         "nodes": ["A", "B", "C", "D"],
//!         "edges": [
//!             {"from": "A", "to": "B", "weight": 1},
//!             {"from": "C", "to": "D", "weight": 2}
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let config = BenchmarkConfig { warmup_runs: 0, measurement_runs: 1 };
//! let results = run_dataset(&dataset, &config).unwrap();
//! assert!(!results[0].kruskal_result.is_connected());
//! assert_eq!(results[0].kruskal_result.total_cost(), 3.0);
//! ```
//!
//! ## Crate Structure
//!
//! - [`mstbench-core`](https://docs.rs/mstbench-core) - Graph model, Prim, Kruskal, union-find, benchmark harness
//! - [`mstbench-report`](https://docs.rs/mstbench-report) - Dataset loading, JSON results, CSV comparison table

// Re-export core types
pub use mstbench_core::{
    Algorithm, BenchmarkConfig, DisjointSet, Edge, Error, Graph, GraphDataset, MstCalculator,
    MstResult, NodeId, OperationCounter, Result,
};

// Re-export reporting
pub use mstbench_report::{
    read_dataset, run_dataset, write_comparison_csv, write_results, GraphComputationResult,
    InputStats,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        read_dataset, run_dataset, write_comparison_csv, write_results, Algorithm,
        BenchmarkConfig, Edge, Graph, GraphComputationResult, GraphDataset, InputStats,
        MstCalculator, MstResult,
    };
}
