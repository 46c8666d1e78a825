// CSV comparison table: one row per graph, Prim columns before Kruskal columns
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::results::GraphComputationResult;

pub const CSV_HEADER: &str = "graph_id,prim_total_cost,kruskal_total_cost,\
prim_execution_time_ms,kruskal_execution_time_ms,\
prim_comparisons,prim_updates,prim_unions,prim_operations,\
kruskal_comparisons,kruskal_updates,kruskal_unions,kruskal_operations";

/// Render the comparison table. Costs and times always carry three
/// decimals with a `.` separator; Rust float formatting ignores locale.
pub fn render_comparison_csv(results: &[GraphComputationResult]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + results.len() * 96);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for result in results {
        let prim = &result.prim_result;
        let kruskal = &result.kruskal_result;
        out.push_str(&format!(
            "{},{:.3},{:.3},{:.3},{:.3},{},{},{},{},{},{},{},{}\n",
            result.graph_id,
            prim.total_cost(),
            kruskal.total_cost(),
            prim.execution_time_ms(),
            kruskal.execution_time_ms(),
            prim.comparisons_count(),
            prim.updates_count(),
            prim.unions_count(),
            prim.operations_count(),
            kruskal.comparisons_count(),
            kruskal.updates_count(),
            kruskal.unions_count(),
            kruskal.operations_count(),
        ));
    }
    out
}

pub fn write_comparison_csv<P: AsRef<Path>>(path: P, results: &[GraphComputationResult]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_comparison_csv(results))
        .with_context(|| format!("failed to write comparison table {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::InputStats;
    use mstbench_core::{MstResult, OperationCounter};

    fn result_with(comparisons: u64, updates: u64, unions: u64, cost: f64, time: f64) -> MstResult {
        let mut counter = OperationCounter::new();
        (0..comparisons).for_each(|_| counter.record_comparison());
        (0..updates).for_each(|_| counter.record_update());
        (0..unions).for_each(|_| counter.record_union());
        MstResult::new(vec![], cost, &counter, time, true)
    }

    #[test]
    fn test_row_uses_three_decimals() {
        let result = GraphComputationResult {
            graph_id: "small-1".to_string(),
            input_stats: InputStats {
                vertices: 5,
                edges: 7,
            },
            prim_result: result_with(10, 15, 5, 16.0, 4.603),
            kruskal_result: result_with(11, 14, 6, 16.0, 2.63),
        };

        let csv = render_comparison_csv(&[result]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("small-1,16.000,16.000,4.603,2.630,10,15,5,30,11,14,6,31")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_one_terminated_row_per_graph() {
        let row = |id: &str| GraphComputationResult {
            graph_id: id.to_string(),
            input_stats: InputStats {
                vertices: 2,
                edges: 1,
            },
            prim_result: result_with(1, 2, 0, 0.5, 0.0),
            kruskal_result: result_with(2, 2, 1, 0.5, 0.0),
        };

        let csv = render_comparison_csv(&[row("first"), row("second")]);
        assert!(csv.ends_with('\n'));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "first,0.500,0.500,0.000,0.000,1,2,0,3,2,2,1,5");
        assert!(lines[2].starts_with("second,"));
    }

    #[test]
    fn test_header_columns() {
        let columns: Vec<&str> = CSV_HEADER.split(',').collect();
        assert_eq!(columns.len(), 13);
        assert_eq!(columns[0], "graph_id");
        assert_eq!(columns[5], "prim_comparisons");
        assert_eq!(columns[12], "kruskal_operations");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.csv");
        write_comparison_csv(&path, &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!("{CSV_HEADER}\n")
        );
    }
}
