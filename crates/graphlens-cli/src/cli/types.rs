//! CLI value enums and their engine counterparts.

use clap::ValueEnum;
use graphlens::GraphKind;

/// Graph kind for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    /// Edges are ordered pairs
    Directed,
    /// Edges join both endpoints symmetrically
    Undirected,
}

impl From<KindArg> for GraphKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Directed => Self::Directed,
            KindArg::Undirected => Self::Undirected,
        }
    }
}

/// Shortest-path algorithm
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAlgorithmArg {
    /// Non-negative weights only
    Dijkstra,
    /// Negative weights allowed; detects negative cycles
    #[value(name = "bellman-ford")]
    BellmanFord,
}

impl std::fmt::Display for PathAlgorithmArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dijkstra => write!(f, "dijkstra"),
            Self::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}

/// Placement strategy
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Built-in repulsion/attraction iterations
    #[value(name = "force-directed")]
    ForceDirected,
    /// Delegated physics simulation
    Simulation,
}

/// Analysis result to paint onto a layout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightArg {
    /// Default colors and sizes
    None,
    /// Vertex radius scaled by LeaderRank
    Rank,
    /// Vertex color per community
    Communities,
    /// Vertex color per strongly connected component
    Components,
    /// Bridges thickened and recolored
    Bridges,
    /// Spanning-tree edges thickened
    Mst,
}
