//! Successor lists built from a graph snapshot.
//!
//! The index is rebuilt for every algorithm call and never cached across
//! mutations. Successors appear in edge-insertion order (petgraph's edge
//! index order); undirected edges are listed under both endpoints, self-loops
//! only once.

use std::collections::HashMap;

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::model::{Graph, VertexId};

/// `vertex -> successors` map for one graph snapshot.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    successors: HashMap<VertexId, Vec<VertexId>>,
}

impl AdjacencyIndex {
    /// Build the forward index.
    #[must_use]
    pub fn build(graph: &Graph) -> Self {
        let mut successors = Self::empty_lists(graph);
        for (from, to) in endpoint_pairs(graph) {
            push(&mut successors, from, to);
            if !graph.is_directed() && from != to {
                push(&mut successors, to, from);
            }
        }
        Self { successors }
    }

    /// Build the index of the edge-reversed graph.
    ///
    /// Reversing an undirected graph gives the same lists as [`build`](Self::build).
    #[must_use]
    pub fn transposed(graph: &Graph) -> Self {
        if !graph.is_directed() {
            return Self::build(graph);
        }
        let mut successors = Self::empty_lists(graph);
        for (from, to) in endpoint_pairs(graph) {
            push(&mut successors, to, from);
        }
        Self { successors }
    }

    fn empty_lists(graph: &Graph) -> HashMap<VertexId, Vec<VertexId>> {
        graph.vertices().map(|vertex| (vertex, Vec::new())).collect()
    }

    /// Successors of `vertex`; empty for unknown vertices.
    #[must_use]
    pub fn successors(&self, vertex: VertexId) -> &[VertexId] {
        self.successors.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// Number of successors of `vertex` (out-degree, or degree when undirected).
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.successors(vertex).len()
    }

    /// Returns `true` if `vertex` has an entry in the index.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.successors.contains_key(&vertex)
    }

    /// Number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Returns `true` if no vertex is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

/// `(from, to)` vertex ids of every stored edge, in edge index order.
fn endpoint_pairs(graph: &Graph) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    let store = graph.store();
    store
        .edge_references()
        .map(move |edge| (store[edge.source()], store[edge.target()]))
}

fn push(lists: &mut HashMap<VertexId, Vec<VertexId>>, from: VertexId, to: VertexId) {
    let list = lists.get_mut(&from);
    debug_assert!(list.is_some(), "edge endpoint {from} missing from vertex set");
    if let Some(list) = list {
        list.push(to);
    }
}
