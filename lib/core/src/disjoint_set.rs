// Union-find over node labels with path compression and union by rank
use ahash::AHashMap;
use std::cmp::Ordering;

use crate::graph::NodeId;

/// Disjoint-set forest keyed by node label.
///
/// Labels are interned into dense slots; `find` returns the slot of the
/// set representative. Labels that were not part of the initial node list
/// are registered as singletons the first time they are looked up.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    slots: AHashMap<NodeId, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let mut set = Self::default();
        for node in nodes {
            set.slot(node);
        }
        set
    }

    /// Number of registered labels
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn slot(&mut self, node: &str) -> usize {
        if let Some(&slot) = self.slots.get(node) {
            return slot;
        }
        let slot = self.parent.len();
        self.slots.insert(node.to_owned(), slot);
        self.parent.push(slot);
        self.rank.push(0);
        slot
    }

    /// Representative of the set containing `node`.
    ///
    /// Every node on the walk to the root is re-parented to the root.
    pub fn find(&mut self, node: &str) -> usize {
        let slot = self.slot(node);
        self.find_root(slot)
    }

    fn find_root(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != root {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }

    /// Merge the sets whose representatives are `root_a` and `root_b`.
    ///
    /// The lower-rank root goes under the higher-rank one; on a tie `root_b`
    /// goes under `root_a` and `root_a` gains a rank. Returns `false` and
    /// leaves the forest untouched when both are already in the same set.
    pub fn union(&mut self, root_a: usize, root_b: usize) -> bool {
        let a = self.find_root(root_a);
        let b = self.find_root(root_b);
        if a == b {
            return false;
        }

        match self.rank[a].cmp(&self.rank[b]) {
            Ordering::Less => self.parent[a] = b,
            Ordering::Greater => self.parent[b] = a,
            Ordering::Equal => {
                self.parent[b] = a;
                self.rank[a] += 1;
            }
        }
        true
    }

    /// Whether two labels currently share a representative
    pub fn same_set(&mut self, a: &str, b: &str) -> bool {
        self.find(a) == self.find(b)
    }
}
