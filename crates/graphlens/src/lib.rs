//! Graphlens - a graph analysis and layout engine.
//!
//! The crate holds a directed or undirected weighted [`Graph`] and runs the
//! classic analyses over it: shortest paths, cycles, strongly connected
//! components, bridges, minimum spanning trees, LeaderRank centrality and
//! modularity-based communities. A pluggable
//! [`PlacementStrategy`](layout::PlacementStrategy) positions vertices on a
//! canvas for display.
//!
//! ```
//! use graphlens::algorithms::dijkstra;
//! use graphlens::{Graph, GraphKind};
//!
//! let graph = Graph::from_edges(GraphKind::Undirected, [(1, 2, 1), (2, 3, 2), (1, 3, 10)]);
//! assert_eq!(dijkstra(&graph, 1, 3), Some(vec![1, 2, 3]));
//! ```
//!
//! Algorithms never touch colors or sizes. The [`hints`] module turns their
//! results into cosmetic hints a view layer can apply.

#![forbid(unsafe_code)]

pub mod adjacency;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod hints;
pub mod layout;
pub mod model;

pub use adjacency::AdjacencyIndex;
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use model::{Edge, Graph, GraphKind, VertexId, Weight};
