// Prim-style MST: grow one tree from the first node through a min-weight frontier
use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::calculator::elapsed_ms;
use crate::counter::OperationCounter;
use crate::graph::{Edge, Graph};
use crate::result::MstResult;

/// Frontier entry: an edge waiting to be considered, lightest first
struct FrontierEdge<'g> {
    weight: OrderedFloat<f64>,
    seq: u64,
    edge: &'g Edge,
}

impl PartialEq for FrontierEdge<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for FrontierEdge<'_> {}

impl Ord for FrontierEdge<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller weight = higher priority, equal weights pop in push order
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEdge<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct Frontier<'g> {
    heap: BinaryHeap<FrontierEdge<'g>>,
    pushed: u64,
}

impl<'g> Frontier<'g> {
    fn push(&mut self, edge: &'g Edge) {
        self.heap.push(FrontierEdge {
            weight: OrderedFloat(edge.weight),
            seq: self.pushed,
            edge,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<&'g Edge> {
        self.heap.pop().map(|entry| entry.edge)
    }
}

/// Incident edges per endpoint, both directions, in edge-list order.
/// Endpoints missing from the node list get an entry like any other.
fn build_adjacency(graph: &Graph) -> AHashMap<&str, Vec<&Edge>> {
    let mut adjacency: AHashMap<&str, Vec<&Edge>> = AHashMap::with_capacity(graph.vertex_count());
    for edge in graph.edges() {
        adjacency.entry(edge.from.as_str()).or_default().push(edge);
        adjacency.entry(edge.to.as_str()).or_default().push(edge);
    }
    adjacency
}

/// Minimum spanning tree grown from `graph.nodes()[0]`.
///
/// Pops and pushes on the frontier count as updates, every visited-set
/// membership test counts as a comparison. On a disconnected graph only the
/// component of the first node is spanned and `connected` is false.
pub fn compute_prim(graph: &Graph) -> MstResult {
    let start = Instant::now();
    let mut counter = OperationCounter::new();
    let mut mst_edges = Vec::new();
    let mut total_cost = 0.0;

    let nodes = graph.nodes();
    let Some(first) = nodes.first() else {
        return MstResult::new(mst_edges, total_cost, &counter, elapsed_ms(start), true);
    };

    let adjacency = build_adjacency(graph);
    let mut visited: AHashSet<&str> = AHashSet::with_capacity(nodes.len());
    visited.insert(first.as_str());

    let mut frontier = Frontier::default();
    for &edge in adjacency.get(first.as_str()).into_iter().flatten() {
        frontier.push(edge);
        counter.record_update();
    }

    let target = nodes.len() - 1;
    mst_edges.reserve(target);

    while mst_edges.len() < target {
        let Some(smallest) = frontier.pop() else {
            break;
        };
        counter.record_update();

        let next = if visited.contains(smallest.from.as_str()) {
            smallest.to.as_str()
        } else {
            smallest.from.as_str()
        };
        counter.record_comparison();
        if visited.contains(next) {
            counter.record_comparison();
            continue;
        }

        visited.insert(next);
        mst_edges.push(smallest.clone());
        total_cost += smallest.weight;

        for &edge in adjacency.get(next).into_iter().flatten() {
            counter.record_comparison();
            if !visited.contains(edge.opposite(next)) {
                frontier.push(edge);
                counter.record_update();
            }
        }
    }

    let connected = visited.len() == nodes.len();
    MstResult::new(mst_edges, total_cost, &counter, elapsed_ms(start), connected)
}
