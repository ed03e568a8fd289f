//! Single-source cycle discovery.
//!
//! Both variants run one depth-first search from the supplied start vertex
//! and report the cycles that search closes. Cycles not reachable from the
//! start vertex are not reported; this is a single-source query, not a cycle
//! basis of the whole graph.
//!
//! Every reported cycle is rotated so that its smallest vertex id comes
//! first, and cycles equal up to rotation are reported once.
//!
//! The searches keep an explicit frame stack instead of recursing, so long
//! chains cannot overflow the call stack.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::adjacency::AdjacencyIndex;
use crate::model::{Graph, GraphKind, VertexId};

/// Cycles reachable from `start`, using the rules for the graph's kind.
#[must_use]
pub fn find_cycles(graph: &Graph, start: VertexId) -> Vec<Vec<VertexId>> {
    match graph.kind() {
        GraphKind::Directed => directed_cycles(graph, start),
        GraphKind::Undirected => undirected_cycles(graph, start),
    }
}

/// Directed cycles closed by a DFS from `start`.
///
/// Reaching a vertex that is still on the recursion stack emits the current
/// path from that vertex onwards. A self-loop yields a one-vertex cycle.
/// Returns an empty list for undirected graphs or a missing start vertex.
#[must_use]
pub fn directed_cycles(graph: &Graph, start: VertexId) -> Vec<Vec<VertexId>> {
    if !graph.is_directed() || !graph.contains_vertex(start) {
        return Vec::new();
    }

    let adjacency = AdjacencyIndex::build(graph);
    let mut visited: HashSet<VertexId> = HashSet::from([start]);
    let mut on_stack: HashSet<VertexId> = HashSet::from([start]);
    let mut path: Vec<VertexId> = vec![start];
    // (vertex, index of the next successor to explore)
    let mut frames: Vec<(VertexId, usize)> = vec![(start, 0)];
    let mut cycles = CycleSet::default();

    while let Some(&(vertex, cursor)) = frames.last() {
        let Some(&next) = adjacency.successors(vertex).get(cursor) else {
            frames.pop();
            path.pop();
            on_stack.remove(&vertex);
            continue;
        };
        advance(&mut frames);

        if on_stack.contains(&next) {
            if let Some(position) = path.iter().position(|&v| v == next) {
                cycles.insert(path[position..].to_vec());
            }
        } else if visited.insert(next) {
            on_stack.insert(next);
            path.push(next);
            frames.push((next, 0));
        }
    }

    debug!(start, cycles = cycles.len(), "Directed cycle search finished");
    cycles.into_vec()
}

/// Undirected cycles closed by a DFS from `start`.
///
/// The search never walks straight back over the edge it arrived by. Meeting
/// an already visited vertex that is an ancestor closes a cycle, rebuilt by
/// following parent links. Cycles of fewer than three vertices are dropped.
/// Returns an empty list for directed graphs or a missing start vertex.
#[must_use]
pub fn undirected_cycles(graph: &Graph, start: VertexId) -> Vec<Vec<VertexId>> {
    if graph.is_directed() || !graph.contains_vertex(start) {
        return Vec::new();
    }

    let adjacency = AdjacencyIndex::build(graph);
    let mut visited: HashSet<VertexId> = HashSet::from([start]);
    let mut parent: HashMap<VertexId, Option<VertexId>> = HashMap::from([(start, None)]);
    let mut frames: Vec<(VertexId, usize)> = vec![(start, 0)];
    let mut cycles = CycleSet::default();

    while let Some(&(vertex, cursor)) = frames.last() {
        let Some(&neighbour) = adjacency.successors(vertex).get(cursor) else {
            frames.pop();
            continue;
        };
        advance(&mut frames);

        if parent.get(&vertex).copied().flatten() == Some(neighbour) {
            continue;
        }
        if visited.contains(&neighbour) {
            if let Some(cycle) = close_cycle(vertex, neighbour, &parent) {
                cycles.insert(cycle);
            }
        } else {
            visited.insert(neighbour);
            parent.insert(neighbour, Some(vertex));
            frames.push((neighbour, 0));
        }
    }

    debug!(start, cycles = cycles.len(), "Undirected cycle search finished");
    cycles.into_vec()
}

fn advance(frames: &mut [(VertexId, usize)]) {
    if let Some(top) = frames.last_mut() {
        top.1 += 1;
    }
}

/// Follow parent links from `from` up to `ancestor`.
///
/// Returns `None` when `ancestor` is not on the parent chain (the edge was
/// seen from the ancestor's side) or the cycle is shorter than three.
fn close_cycle(
    from: VertexId,
    ancestor: VertexId,
    parent: &HashMap<VertexId, Option<VertexId>>,
) -> Option<Vec<VertexId>> {
    let mut cycle = Vec::new();
    let mut node = Some(from);
    while let Some(current) = node {
        if current == ancestor {
            cycle.push(ancestor);
            cycle.reverse();
            return (cycle.len() >= 3).then_some(cycle);
        }
        cycle.push(current);
        node = parent.get(&current).copied().flatten();
    }
    None
}

/// Rotate so the smallest id comes first.
fn normalize(mut cycle: Vec<VertexId>) -> Vec<VertexId> {
    let min_position = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, vertex)| *vertex)
        .map_or(0, |(position, _)| position);
    cycle.rotate_left(min_position);
    cycle
}

/// Insertion-ordered set of rotation-normalized cycles.
#[derive(Default)]
struct CycleSet {
    cycles: Vec<Vec<VertexId>>,
    seen: HashSet<Vec<VertexId>>,
}

impl CycleSet {
    fn insert(&mut self, cycle: Vec<VertexId>) {
        let cycle = normalize(cycle);
        if self.seen.insert(cycle.clone()) {
            self.cycles.push(cycle);
        }
    }

    fn len(&self) -> usize {
        self.cycles.len()
    }

    fn into_vec(self) -> Vec<Vec<VertexId>> {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed(edges: &[(VertexId, VertexId)]) -> Graph {
        Graph::from_edges(GraphKind::Directed, edges.iter().map(|&(u, v)| (u, v, 0)))
    }

    fn undirected(edges: &[(VertexId, VertexId)]) -> Graph {
        Graph::from_edges(GraphKind::Undirected, edges.iter().map(|&(u, v)| (u, v, 0)))
    }

    fn sorted(cycle: &[VertexId]) -> Vec<VertexId> {
        let mut cycle = cycle.to_vec();
        cycle.sort_unstable();
        cycle
    }

    // === Directed ===

    #[test]
    fn directed_acyclic_graph_has_no_cycles() {
        let graph = directed(&[(1, 2), (2, 3), (1, 3)]);

        assert!(directed_cycles(&graph, 1).is_empty());
    }

    #[test]
    fn directed_triangle_yields_one_cycle() {
        let graph = directed(&[(1, 2), (2, 3), (3, 1)]);

        assert_eq!(directed_cycles(&graph, 1), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn directed_cycle_is_rotated_to_smallest_id() {
        let graph = directed(&[(1, 2), (2, 3), (3, 1)]);

        assert_eq!(directed_cycles(&graph, 2), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn directed_overlapping_cycles() {
        let graph = directed(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 2)]);
        let cycles = directed_cycles(&graph, 1);

        assert_eq!(cycles.len(), 2);
        assert!(cycles.contains(&vec![1, 2, 3]));
        assert!(cycles.contains(&vec![2, 3, 4]));
    }

    #[test]
    fn directed_self_loop_is_one_vertex_cycle() {
        let graph = directed(&[(1, 1)]);

        assert_eq!(directed_cycles(&graph, 1), vec![vec![1]]);
    }

    #[test]
    fn directed_search_only_sees_reachable_cycles() {
        let graph = directed(&[(1, 2), (2, 1), (3, 4), (4, 3)]);

        assert_eq!(directed_cycles(&graph, 1), vec![vec![1, 2]]);
    }

    #[test]
    fn directed_long_chain_does_not_overflow() {
        let mut edges: Vec<(VertexId, VertexId)> = (0..100_000).map(|i| (i, i + 1)).collect();
        edges.push((100_000, 0));
        let graph = directed(&edges);

        let cycles = directed_cycles(&graph, 0);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 100_001);
    }

    // === Undirected ===

    #[test]
    fn undirected_tree_has_no_cycles() {
        let graph = undirected(&[(1, 2), (1, 3), (3, 4), (3, 5)]);

        assert!(undirected_cycles(&graph, 1).is_empty());
    }

    #[test]
    fn undirected_triangle_yields_one_cycle() {
        let graph = undirected(&[(1, 2), (2, 3), (3, 1)]);
        let cycles = undirected_cycles(&graph, 1);

        assert_eq!(cycles.len(), 1);
        assert_eq!(sorted(&cycles[0]), vec![1, 2, 3]);
        assert_eq!(cycles[0][0], 1);
    }

    #[test]
    fn undirected_two_triangles_sharing_an_edge() {
        let graph = undirected(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 2)]);
        let cycles = undirected_cycles(&graph, 1);

        assert_eq!(cycles.len(), 2);
        assert!(cycles.iter().any(|c| sorted(c) == vec![1, 2, 3]));
        assert!(cycles.iter().any(|c| sorted(c) == vec![2, 3, 4]));
    }

    #[test]
    fn undirected_single_edge_and_self_loop_are_not_cycles() {
        let graph = undirected(&[(1, 2), (2, 2)]);

        assert!(undirected_cycles(&graph, 1).is_empty());
    }

    #[test]
    fn missing_start_vertex_yields_nothing() {
        let graph = undirected(&[(1, 2), (2, 3), (3, 1)]);

        assert!(undirected_cycles(&graph, 42).is_empty());
        assert!(directed_cycles(&directed(&[(1, 1)]), 42).is_empty());
    }

    #[test]
    fn wrong_kind_yields_nothing() {
        assert!(directed_cycles(&undirected(&[(1, 2), (2, 3), (3, 1)]), 1).is_empty());
        assert!(undirected_cycles(&directed(&[(1, 2), (2, 3), (3, 1)]), 1).is_empty());
    }

    #[test]
    fn find_cycles_dispatches_on_kind() {
        assert_eq!(find_cycles(&directed(&[(1, 2), (2, 1)]), 1), vec![vec![1, 2]]);
        assert!(find_cycles(&undirected(&[(1, 2)]), 1).is_empty());
    }
}
