//! Value types shared by the graph model and the algorithms.

use std::fmt;

/// Identity of a vertex, unique within one graph.
pub type VertexId = i64;

/// Signed edge weight.
pub type Weight = i64;

/// Which edge-lookup rules a [`Graph`](super::Graph) follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// `(u, v)` and `(v, u)` are distinct edges.
    Directed,
    /// Edges are symmetric and retrievable by either endpoint order.
    Undirected,
}

impl GraphKind {
    /// Returns `true` for [`GraphKind::Directed`].
    #[must_use]
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::Undirected => write!(f, "undirected"),
        }
    }
}

/// A weighted connection between two vertices.
///
/// Endpoints are kept in the order they were first inserted, also for
/// undirected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint (the source for directed graphs).
    pub from: VertexId,
    /// Second endpoint (the target for directed graphs).
    pub to: VertexId,
    /// Weight recorded by the first insertion of this endpoint pair.
    pub weight: Weight,
}

impl Edge {
    /// Create an edge.
    #[must_use]
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Endpoints as a `(from, to)` pair.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The endpoint opposite to `vertex`, or `None` if `vertex` is not an endpoint.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.from == vertex {
            Some(self.to)
        } else if self.to == vertex {
            Some(self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}
