//! # mstbench Report
//!
//! Dataset loading and result reporting for mstbench.
//!
//! - [`read_dataset`] - Load a `{"graphs": [...]}` JSON document
//! - [`run_dataset`] - Run Prim and Kruskal through the benchmark harness for every graph
//! - [`write_results`] - Pretty JSON `{"results": [...]}` document
//! - [`write_comparison_csv`] - One CSV row per graph comparing both algorithms

pub mod comparison;
pub mod dataset;
pub mod results;
pub mod runner;

pub use comparison::{render_comparison_csv, write_comparison_csv, CSV_HEADER};
pub use dataset::read_dataset;
pub use results::{write_results, GraphComputationResult, InputStats, ResultsDocument};
pub use runner::{compute_graph, run_dataset};
