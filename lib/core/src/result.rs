use serde::Serialize;

use crate::counter::OperationCounter;
use crate::graph::Edge;

/// Outcome of one MST calculator run.
///
/// Fields are read-only; `operations_count` is always the sum of the three
/// individual tallies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    mst_edges: Vec<Edge>,
    total_cost: f64,
    comparisons_count: u64,
    updates_count: u64,
    unions_count: u64,
    operations_count: u64,
    execution_time_ms: f64,
    connected: bool,
}

impl MstResult {
    #[must_use]
    pub fn new(
        mst_edges: Vec<Edge>,
        total_cost: f64,
        counter: &OperationCounter,
        execution_time_ms: f64,
        connected: bool,
    ) -> Self {
        Self {
            mst_edges,
            total_cost,
            comparisons_count: counter.comparisons(),
            updates_count: counter.updates(),
            unions_count: counter.unions(),
            operations_count: counter.total(),
            execution_time_ms,
            connected,
        }
    }

    /// Copy of this result carrying a different execution time
    #[must_use]
    pub fn with_execution_time(&self, execution_time_ms: f64) -> Self {
        Self {
            execution_time_ms,
            ..self.clone()
        }
    }

    #[inline]
    pub fn mst_edges(&self) -> &[Edge] {
        &self.mst_edges
    }

    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    #[inline]
    pub fn comparisons_count(&self) -> u64 {
        self.comparisons_count
    }

    #[inline]
    pub fn updates_count(&self) -> u64 {
        self.updates_count
    }

    #[inline]
    pub fn unions_count(&self) -> u64 {
        self.unions_count
    }

    #[inline]
    pub fn operations_count(&self) -> u64 {
        self.operations_count
    }

    #[inline]
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}
