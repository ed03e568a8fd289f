//! Single-pair shortest paths.
//!
//! | Outcome | [`dijkstra`] | [`bellman_ford`] |
//! |---------|--------------|------------------|
//! | start or end absent | `None` | `None` |
//! | negative weight / reachable negative cycle | `None` | `None` |
//! | end unreachable | `Some(vec![])` | `None` |
//! | start equals end | `Some(vec![start])` | `Some(vec![start])` |
//! | path found | `Some(vec![start, .., end])` | `Some(vec![start, .., end])` |
//!
//! Callers rely on the difference between `None` and an empty path, so the
//! two must never be collapsed.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::adjacency::AdjacencyIndex;
use crate::model::{Graph, VertexId, Weight};

/// Returns `true` if any edge carries a negative weight.
#[must_use]
pub fn has_negative_weight(graph: &Graph) -> bool {
    graph.edges().any(|edge| edge.weight < 0)
}

/// Shortest path by Dijkstra's algorithm with an O(V²) vertex scan.
///
/// Returns `None` if either endpoint is missing or any edge weight is
/// negative. Ties between equally distant candidates are broken by the
/// smaller vertex id, so the result is deterministic.
#[must_use]
pub fn dijkstra(graph: &Graph, start: VertexId, end: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        return None;
    }
    if has_negative_weight(graph) {
        debug!(start, end, "Dijkstra refused: graph has a negative edge weight");
        return None;
    }
    if start == end {
        return Some(vec![start]);
    }

    let adjacency = AdjacencyIndex::build(graph);
    // Absent entries are at infinite distance.
    let mut distances: HashMap<VertexId, Weight> = HashMap::from([(start, 0)]);
    let mut settled: HashSet<VertexId> = HashSet::with_capacity(graph.size());
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

    loop {
        let Some(current) = closest_unsettled(graph.vertices(), &distances, &settled) else {
            debug!(start, end, settled = settled.len(), "End vertex unreachable");
            return Some(Vec::new());
        };
        settled.insert(current);
        if current == end {
            break;
        }

        let from = distances[&current];
        for &neighbour in adjacency.successors(current) {
            if settled.contains(&neighbour) {
                continue;
            }
            let Some(weight) = graph.edge_weight(current, neighbour) else {
                continue;
            };
            let candidate = from.saturating_add(weight);
            if distances.get(&neighbour).is_none_or(|&known| candidate < known) {
                distances.insert(neighbour, candidate);
                predecessors.insert(neighbour, current);
            }
        }
    }

    Some(reconstruct_path(start, end, &predecessors))
}

/// Unsettled vertex with the smallest finite distance, smallest id on ties.
fn closest_unsettled(
    vertices: impl Iterator<Item = VertexId>,
    distances: &HashMap<VertexId, Weight>,
    settled: &HashSet<VertexId>,
) -> Option<VertexId> {
    vertices
        .filter(|vertex| !settled.contains(vertex))
        .filter_map(|vertex| distances.get(&vertex).map(|&distance| (distance, vertex)))
        .min()
        .map(|(_, vertex)| vertex)
}

/// Shortest path by the Bellman-Ford algorithm.
///
/// Negative weights are allowed. Returns `None` if either endpoint is
/// missing, if a negative cycle is reachable from `start`, or if `end` is
/// never reached. Undirected edges are relaxed in both directions, so an
/// undirected negative edge is itself a negative cycle.
#[must_use]
pub fn bellman_ford(graph: &Graph, start: VertexId, end: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        return None;
    }
    if start == end {
        return Some(vec![start]);
    }

    let arcs = arcs(graph);
    let mut distances: HashMap<VertexId, Weight> = HashMap::from([(start, 0)]);
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

    for pass in 1..graph.size() {
        let mut updated = false;
        for &(from, to, weight) in &arcs {
            let Some(&from_distance) = distances.get(&from) else {
                continue;
            };
            let candidate = from_distance.saturating_add(weight);
            if distances.get(&to).is_none_or(|&known| candidate < known) {
                distances.insert(to, candidate);
                predecessors.insert(to, from);
                updated = true;
            }
        }
        if !updated {
            debug!(pass, "Bellman-Ford converged early");
            break;
        }
    }

    let improvable = arcs.iter().any(|&(from, to, weight)| {
        distances.get(&from).is_some_and(|&from_distance| {
            let candidate = from_distance.saturating_add(weight);
            distances.get(&to).is_none_or(|&known| candidate < known)
        })
    });
    if improvable {
        debug!(start, "Negative cycle reachable from start");
        return None;
    }

    if !distances.contains_key(&end) {
        return None;
    }
    let path = reconstruct_path(start, end, &predecessors);
    (!path.is_empty()).then_some(path)
}

/// Directed view of the edge set: undirected edges yield both orientations.
fn arcs(graph: &Graph) -> Vec<(VertexId, VertexId, Weight)> {
    let mut arcs = Vec::with_capacity(graph.edge_count() * 2);
    for edge in graph.edges() {
        arcs.push((edge.from, edge.to, edge.weight));
        if !graph.is_directed() && !edge.is_self_loop() {
            arcs.push((edge.to, edge.from, edge.weight));
        }
    }
    arcs
}

/// Walk predecessors back from `end`; empty if the chain never reaches `start`.
fn reconstruct_path(
    start: VertexId,
    end: VertexId,
    predecessors: &HashMap<VertexId, VertexId>,
) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        let Some(&previous) = predecessors.get(&current) else {
            return Vec::new();
        };
        // A chain longer than the predecessor map has looped.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
