//! Minimum spanning tree (or forest) by Kruskal's algorithm.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Edge, Graph, VertexId};

/// Disjoint-set forest with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    index: HashMap<VertexId, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// One singleton set per vertex.
    pub fn new(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        let mut index = HashMap::new();
        for vertex in vertices {
            let next = index.len();
            index.entry(vertex).or_insert(next);
        }
        let count = index.len();
        Self {
            index,
            parent: (0..count).collect(),
            rank: vec![0; count],
        }
    }

    /// Representative slot of the set containing `vertex`, or `None` if unknown.
    pub fn find(&mut self, vertex: VertexId) -> Option<usize> {
        let &start = self.index.get(&vertex)?;
        Some(self.find_root(start))
    }

    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`.
    ///
    /// Returns `true` if they were in different sets.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// Returns `true` if both vertices are known and in the same set.
    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        matches!((self.find(a), self.find(b)), (Some(x), Some(y)) if x == y)
    }
}

/// Kruskal's minimum spanning tree of an undirected graph.
///
/// Edges are scanned in ascending weight order (stable among equal
/// weights); an edge is accepted iff it joins two different components.
/// The scan stops after `|V| - 1` acceptances. A disconnected graph yields a
/// spanning forest with fewer edges. Directed or empty graphs yield an
/// empty list.
#[must_use]
pub fn minimum_spanning_tree(graph: &Graph) -> Vec<Edge> {
    if graph.is_directed() || graph.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Edge> = graph.edges().collect();
    sorted.sort_by_key(|edge| edge.weight);

    let target = graph.size() - 1;
    let mut sets = DisjointSet::new(graph.vertices());
    let mut tree = Vec::with_capacity(target);

    for edge in sorted {
        if tree.len() == target {
            break;
        }
        if sets.union(edge.from, edge.to) {
            tree.push(*edge);
        }
    }

    debug!(
        vertex_count = graph.size(),
        tree_edges = tree.len(),
        "Kruskal spanning tree built"
    );
    tree
}

/// Sum of the weights of `edges`.
#[must_use]
pub fn total_weight(edges: &[Edge]) -> i128 {
    edges.iter().map(|edge| i128::from(edge.weight)).sum()
}
