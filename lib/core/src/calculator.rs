use std::fmt;
use std::time::Instant;

use crate::graph::Graph;
use crate::kruskal::compute_kruskal;
use crate::prim::compute_prim;
use crate::result::MstResult;

/// Wall-clock milliseconds since `start`
#[inline]
pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// MST algorithms offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    pub fn compute(&self, graph: &Graph) -> MstResult {
        match self {
            Algorithm::Prim => compute_prim(graph),
            Algorithm::Kruskal => compute_kruskal(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless entry point for both MST algorithms.
///
/// Each call builds its own adjacency map, disjoint set and counter, so one
/// calculator can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct MstCalculator;

impl MstCalculator {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn compute_prim(&self, graph: &Graph) -> MstResult {
        compute_prim(graph)
    }

    pub fn compute_kruskal(&self, graph: &Graph) -> MstResult {
        compute_kruskal(graph)
    }
}
