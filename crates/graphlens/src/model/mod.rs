//! The graph model every algorithm reads from.
//!
//! A [`Graph`] keeps vertex ids and weighted edges in a petgraph [`DiGraph`],
//! with a `node_map` from vertex id to node index, and is tagged with a
//! [`GraphKind`]. The kind only changes how edges are looked up: directed
//! graphs treat `(u, v)` and `(v, u)` as different edges, undirected graphs
//! answer either order with the same edge.
//!
//! Nothing is ever removed, so petgraph's node and edge indices follow
//! insertion order.
//!
//! ## Snapshot convention
//!
//! Algorithms borrow the graph immutably for the duration of one call and
//! never cache derived state. A collaborator that mutates the graph between
//! calls simply gets fresh results on the next call.
//!
//! All mutating operations are total: adding an existing vertex or an
//! already-connected pair is a no-op, and the first inserted weight wins.

mod types;

pub use types::{Edge, GraphKind, VertexId, Weight};

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

/// Vertices and weighted edges of a directed or undirected graph.
///
/// Iteration order of [`vertices`](Self::vertices) and
/// [`edges`](Self::edges) is insertion order.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    /// Edges are stored once, in the orientation first inserted
    graph: DiGraph<VertexId, Edge>,
    node_map: HashMap<VertexId, NodeIndex>,
}

impl Graph {
    /// Create an empty graph of the given kind.
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Build a graph by replaying `add_edge` for every `(from, to, weight)` triple.
    #[must_use]
    pub fn from_edges<I>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Self::new(kind);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// The kind tag of this graph.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Shorthand for `self.kind().is_directed()`.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Add a vertex. Idempotent.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.node_index_or_insert(id);
    }

    fn node_index_or_insert(&mut self, id: VertexId) -> NodeIndex {
        if let Some(&node) = self.node_map.get(&id) {
            return node;
        }
        let node = self.graph.add_node(id);
        self.node_map.insert(id, node);
        node
    }

    /// Add an edge, creating missing endpoints.
    ///
    /// If the pair is already connected (in either order for undirected
    /// graphs) the call is a no-op and the existing weight is kept.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let source = self.node_index_or_insert(from);
        let target = self.node_index_or_insert(to);
        if self.find_edge(from, to).is_some() {
            return;
        }
        self.graph.add_edge(source, target, Edge::new(from, to, weight));
    }

    /// Look up a vertex, returning its id when present.
    #[must_use]
    pub fn find_vertex(&self, id: VertexId) -> Option<VertexId> {
        self.node_map.get(&id).map(|&node| self.graph[node])
    }

    /// Returns `true` if the vertex is present.
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.node_map.contains_key(&id)
    }

    /// Look up the edge connecting `from` to `to`.
    ///
    /// Undirected graphs check both orderings.
    #[must_use]
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        let source = *self.node_map.get(&from)?;
        let target = *self.node_map.get(&to)?;
        let index = match self.kind {
            GraphKind::Directed => self.graph.find_edge(source, target),
            GraphKind::Undirected => self
                .graph
                .find_edge_undirected(source, target)
                .map(|(index, _)| index),
        }?;
        Some(&self.graph[index])
    }

    /// Weight of the edge connecting `from` to `to`, if any.
    #[must_use]
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.find_edge(from, to).map(|edge| edge.weight)
    }

    /// Number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored edges (an undirected edge counts once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All vertex ids in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + Clone + '_ {
        self.graph.raw_nodes().iter().map(|node| node.weight)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + Clone + '_ {
        self.graph.raw_edges().iter().map(|edge| &edge.weight)
    }

    /// The underlying petgraph store, for index builders in this crate.
    pub(crate) fn store(&self) -> &DiGraph<VertexId, Edge> {
        &self.graph
    }
}
