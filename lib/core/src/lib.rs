//! # mstbench Core
//!
//! Core library for the mstbench minimum spanning tree benchmark.
//!
//! This crate provides the graph model and the two MST algorithms:
//!
//! - [`Graph`] / [`Edge`] - Immutable weighted undirected graphs
//! - [`MstCalculator`] - Prim-style and Kruskal-style MST computation
//! - [`DisjointSet`] - Union-find with path compression and union by rank
//! - [`OperationCounter`] - Comparison, update and union tallies per run
//! - [`BenchmarkConfig`] - Warmup/measurement repetition with median timing
//!
//! ## Example
//!
//! ```rust
//! use mstbench_core::{BenchmarkConfig, Edge, Graph, MstCalculator};
//!
//! let graph = Graph::new(
//!     "triangle",
//!     vec!["A".to_string(), "B".to_string(), "C".to_string()],
//!     vec![
//!         Edge::new("A", "B", 1.0),
//!         Edge::new("B", "C", 2.0),
//!         Edge::new("A", "C", 3.0),
//!     ],
//! );
//!
//! let calculator = MstCalculator::new();
//! let prim = calculator.compute_prim(&graph);
//! let kruskal = calculator.compute_kruskal(&graph);
//! assert_eq!(prim.total_cost(), kruskal.total_cost());
//!
//! // Repeat with warmup and report the median execution time
//! let stable = BenchmarkConfig::default()
//!     .run(|| calculator.compute_kruskal(&graph))
//!     .unwrap();
//! assert!(stable.is_connected());
//! ```

pub mod calculator;
pub mod counter;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod harness;
pub mod kruskal;
pub mod prim;
pub mod result;

pub use calculator::{Algorithm, MstCalculator};
pub use counter::OperationCounter;
pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphDataset, NodeId};
pub use harness::{run_with_stabilized_timing, BenchmarkConfig};
pub use kruskal::compute_kruskal;
pub use prim::compute_prim;
pub use result::MstResult;
