use anyhow::{Context, Result};
use mstbench_core::{Graph, MstResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Size of an input graph as declared in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

impl InputStats {
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        }
    }
}

/// Both algorithms' results for one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphComputationResult {
    pub graph_id: String,
    pub input_stats: InputStats,
    #[serde(rename = "prim")]
    pub prim_result: MstResult,
    #[serde(rename = "kruskal")]
    pub kruskal_result: MstResult,
}

/// The `{"results": [...]}` output document
#[derive(Debug, Serialize)]
pub struct ResultsDocument<'a> {
    pub results: &'a [GraphComputationResult],
}

/// Write the results document as pretty-printed JSON
pub fn write_results<P: AsRef<Path>>(path: P, results: &[GraphComputationResult]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create results file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ResultsDocument { results })
        .with_context(|| format!("failed to serialize results to {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mstbench_core::{Edge, OperationCounter};

    fn sample() -> GraphComputationResult {
        let mut counter = OperationCounter::new();
        counter.record_comparison();
        counter.record_update();
        let result = MstResult::new(vec![Edge::new("A", "B", 1.5)], 1.5, &counter, 0.25, true);
        GraphComputationResult {
            graph_id: "pair".to_string(),
            input_stats: InputStats {
                vertices: 2,
                edges: 1,
            },
            prim_result: result.clone(),
            kruskal_result: result,
        }
    }

    #[test]
    fn test_input_stats_of_graph() {
        let graph = Graph::new(
            "g",
            vec!["A".into(), "B".into()],
            vec![Edge::new("A", "B", 1.0)],
        );
        assert_eq!(InputStats::of(&graph), InputStats { vertices: 2, edges: 1 });
    }

    #[test]
    fn test_write_results_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_results(&path, &[sample()]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entry = &value["results"][0];
        assert_eq!(entry["graph_id"], "pair");
        assert_eq!(entry["input_stats"]["vertices"], 2);
        assert_eq!(entry["input_stats"]["edges"], 1);
        assert_eq!(entry["prim"]["total_cost"], 1.5);
        assert_eq!(entry["kruskal"]["operations_count"], 2);
        assert_eq!(entry["kruskal"]["mst_edges"][0]["to"], "B");
        assert_eq!(entry["prim"]["connected"], true);
    }

    #[test]
    fn test_empty_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_results(&path, &[]).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["results"], serde_json::json!([]));
    }
}
