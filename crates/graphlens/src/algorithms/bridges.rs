//! Bridge detection by Tarjan's low-link algorithm.

use std::collections::HashMap;

use tracing::debug;

use crate::adjacency::AdjacencyIndex;
use crate::model::{Edge, Graph, VertexId};

/// DFS frame: vertex, the parent it was reached from, next successor index.
type Frame = (VertexId, Option<VertexId>, usize);

/// Find every bridge of an undirected graph.
///
/// A tree edge `(parent, child)` is a bridge iff `low[child] > discovery[parent]`.
/// The returned edges are the stored edges, with their original endpoint
/// order and weight. Directed graphs yield an empty list.
#[must_use]
pub fn find_bridges(graph: &Graph) -> Vec<Edge> {
    if graph.is_directed() {
        return Vec::new();
    }

    let adjacency = AdjacencyIndex::build(graph);
    let mut discovery: HashMap<VertexId, usize> = HashMap::with_capacity(graph.size());
    let mut low: HashMap<VertexId, usize> = HashMap::with_capacity(graph.size());
    let mut timer = 0usize;
    let mut bridges = Vec::new();

    for root in graph.vertices() {
        if discovery.contains_key(&root) {
            continue;
        }
        discovery.insert(root, timer);
        low.insert(root, timer);
        timer += 1;

        let mut frames: Vec<Frame> = vec![(root, None, 0)];
        while let Some(&(vertex, parent, cursor)) = frames.last() {
            if let Some(&next) = adjacency.successors(vertex).get(cursor) {
                if let Some(top) = frames.last_mut() {
                    top.2 += 1;
                }
                if parent == Some(next) {
                    continue;
                }
                if let Some(&next_discovery) = discovery.get(&next) {
                    lower(&mut low, vertex, next_discovery);
                } else {
                    discovery.insert(next, timer);
                    low.insert(next, timer);
                    timer += 1;
                    frames.push((next, Some(vertex), 0));
                }
                continue;
            }

            frames.pop();
            let Some(parent) = parent else {
                continue;
            };
            let child_low = low[&vertex];
            lower(&mut low, parent, child_low);
            if child_low > discovery[&parent]
                && let Some(edge) = graph.find_edge(parent, vertex)
            {
                bridges.push(*edge);
            }
        }
    }

    debug!(bridge_count = bridges.len(), "Bridge search finished");
    bridges
}

fn lower(low: &mut HashMap<VertexId, usize>, vertex: VertexId, candidate: usize) {
    if let Some(value) = low.get_mut(&vertex) {
        *value = (*value).min(candidate);
    }
}
