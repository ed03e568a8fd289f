//! Analysis algorithms over a [`Graph`](crate::model::Graph) snapshot.
//!
//! Every entry point takes the graph by shared reference and returns a value;
//! none of them fail. Invalid or inapplicable input is expressed in the result
//! itself.
//!
//! | Module | Algorithm | Graph kind |
//! |--------|-----------|------------|
//! | [`paths`] | Dijkstra, Bellman-Ford | both |
//! | [`cycles`] | single-source DFS cycle search | both |
//! | [`components`] | Kosaraju strongly connected components | directed |
//! | [`bridges`] | Tarjan bridge finding | undirected |
//! | [`spanning_tree`] | Kruskal minimum spanning forest | undirected |
//! | [`centrality`] | LeaderRank | both |
//! | [`community`] | greedy modularity communities | undirected |
//!
//! Running an algorithm on the wrong kind of graph yields an empty result,
//! not an error.

pub mod bridges;
pub mod centrality;
pub mod community;
pub mod components;
pub mod cycles;
pub mod paths;
pub mod spanning_tree;

pub use bridges::find_bridges;
pub use centrality::{leader_rank, leader_rank_default};
pub use community::{CommunityId, detect_communities, modularity};
pub use components::strongly_connected_components;
pub use cycles::{directed_cycles, find_cycles, undirected_cycles};
pub use paths::{bellman_ford, dijkstra, has_negative_weight};
pub use spanning_tree::{DisjointSet, minimum_spanning_tree};
