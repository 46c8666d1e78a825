use anyhow::{Context, Result};
use mstbench_core::GraphDataset;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a graph dataset from a JSON file
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<GraphDataset> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    let dataset = GraphDataset::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_dataset_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(
            &path,
            r#"{"graphs": [{"id": "g1", "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 4}]}]}"#,
        )
        .unwrap();

        let dataset = read_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.graphs[0].id(), "g1");
        assert_eq!(dataset.graphs[0].edge_count(), 1);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_dataset(&path).unwrap_err();
        assert!(format!("{err}").contains("absent.json"));
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = read_dataset(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse dataset"));
    }
}
