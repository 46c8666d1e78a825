// Kruskal-style MST: sorted edge walk with union-find cycle detection
use ordered_float::OrderedFloat;
use std::time::Instant;

use crate::calculator::elapsed_ms;
use crate::counter::OperationCounter;
use crate::disjoint_set::DisjointSet;
use crate::graph::{Edge, Graph};
use crate::result::MstResult;

/// Minimum spanning forest by ascending edge weight.
///
/// Every comparison made while sorting counts, so the comparison tally
/// depends on the standard library's stable sort. Each representative
/// lookup is an update, each root comparison a comparison, each merge a
/// union. `connected` holds when the forest has exactly `v - 1` edges.
pub fn compute_kruskal(graph: &Graph) -> MstResult {
    let start = Instant::now();
    let mut counter = OperationCounter::new();

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by(|a, b| {
        counter.record_comparison();
        OrderedFloat(a.weight).cmp(&OrderedFloat(b.weight))
    });

    let target = graph.vertex_count().saturating_sub(1);
    let mut forest = DisjointSet::new(graph.nodes());
    let mut mst_edges = Vec::with_capacity(target);
    let mut total_cost = 0.0;

    for edge in sorted {
        if mst_edges.len() == target {
            break;
        }

        let root_from = forest.find(&edge.from);
        counter.record_update();
        let root_to = forest.find(&edge.to);
        counter.record_update();

        counter.record_comparison();
        if root_from != root_to {
            forest.union(root_from, root_to);
            counter.record_union();
            mst_edges.push(edge.clone());
            total_cost += edge.weight;
        }
    }

    let connected = mst_edges.len() == target;
    MstResult::new(mst_edges, total_cost, &counter, elapsed_ms(start), connected)
}
