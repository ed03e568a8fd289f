//! `graphlens layout` command implementation.

use colored::Colorize;
use graphlens::algorithms::{
    detect_communities, find_bridges, leader_rank, minimum_spanning_tree,
    strongly_connected_components,
};
use graphlens::hints::{
    apply_edge_highlight, apply_rank_scales, apply_vertex_colors, community_colors,
    component_colors, rank_scales, EdgeHighlight,
};
use graphlens::layout::{
    placements_for, EdgePlacement, ForceDirectedLayout, PlacementStrategy, SimulationLayout,
    VertexPlacement,
};
use graphlens::{EngineConfig, Graph, GraphKind, VertexId};
use tracing::debug;

use super::display::{print_heading, print_wrong_kind};
use super::types::{HighlightArg, StrategyArg};

/// Canvas and presentation choices for one layout run.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Which placement strategy to run
    pub strategy: StrategyArg,
    /// Analysis painted onto the placements before layout
    pub highlight: HighlightArg,
}

/// Run the layout command.
pub fn run(graph: &Graph, config: &EngineConfig, options: &LayoutOptions) -> anyhow::Result<()> {
    print_heading(
        &format!("Layout on a {}x{} canvas", options.width, options.height),
        graph,
    );

    anyhow::ensure!(
        options.width > 0.0 && options.height > 0.0,
        "canvas dimensions must be positive, got {}x{}",
        options.width,
        options.height
    );

    let strategy: Box<dyn PlacementStrategy> = match options.strategy {
        StrategyArg::ForceDirected => Box::new(ForceDirectedLayout::new(config.layout.clone())),
        StrategyArg::Simulation => Box::new(SimulationLayout::new(config.simulation.clone())),
    };

    let (mut vertices, mut edges) = placements_for(graph, strategy.as_ref());
    apply_highlight(graph, config, options.highlight, strategy.as_ref(), &mut vertices, &mut edges);
    strategy.place(options.width, options.height, &mut vertices, &edges);

    print_vertices(&vertices);
    println!();
    print_edges(&edges);

    Ok(())
}

fn apply_highlight(
    graph: &Graph,
    config: &EngineConfig,
    highlight: HighlightArg,
    strategy: &dyn PlacementStrategy,
    vertices: &mut [VertexPlacement],
    edges: &mut [EdgePlacement],
) {
    let edge_pairs = |tree: &[graphlens::Edge]| -> Vec<(VertexId, VertexId)> {
        tree.iter().map(graphlens::Edge::endpoints).collect()
    };

    match highlight {
        HighlightArg::None => {}
        HighlightArg::Rank => {
            let scales = rank_scales(&leader_rank(graph, &config.leader_rank));
            apply_rank_scales(vertices, &scales, strategy.default_vertex_radius());
        }
        HighlightArg::Communities => {
            if graph.is_directed() {
                print_wrong_kind("--highlight communities", GraphKind::Undirected);
                return;
            }
            let partition = detect_communities(graph, &config.community);
            apply_vertex_colors(vertices, &community_colors(&partition));
        }
        HighlightArg::Components => {
            if !graph.is_directed() {
                print_wrong_kind("--highlight components", GraphKind::Directed);
                return;
            }
            let components = strongly_connected_components(graph);
            apply_vertex_colors(vertices, &component_colors(&components));
        }
        HighlightArg::Bridges => {
            if graph.is_directed() {
                print_wrong_kind("--highlight bridges", GraphKind::Undirected);
                return;
            }
            let pairs = edge_pairs(&find_bridges(graph));
            let changed = apply_edge_highlight(
                edges,
                &pairs,
                EdgeHighlight::BRIDGE,
                strategy.default_edge_width(),
            );
            debug!(bridges = pairs.len(), changed, "Highlighted bridges");
        }
        HighlightArg::Mst => {
            if graph.is_directed() {
                print_wrong_kind("--highlight mst", GraphKind::Undirected);
                return;
            }
            let pairs = edge_pairs(&minimum_spanning_tree(graph));
            let changed = apply_edge_highlight(
                edges,
                &pairs,
                EdgeHighlight::SPANNING_TREE,
                strategy.default_edge_width(),
            );
            debug!(tree_edges = pairs.len(), changed, "Highlighted spanning tree");
        }
    }
}

fn print_vertices(vertices: &[VertexPlacement]) {
    println!(
        "  {:>8}  {:>10}  {:>10}  {:>8}  {:>9}",
        "Vertex".bold(),
        "X".bold(),
        "Y".bold(),
        "Radius".bold(),
        "Color".bold()
    );
    for vertex in vertices {
        println!(
            "  {:>8}  {:>10.2}  {:>10.2}  {:>8.2}  {:>9}",
            vertex.id, vertex.x, vertex.y, vertex.radius, vertex.color
        );
    }
}

fn print_edges(edges: &[EdgePlacement]) {
    if edges.is_empty() {
        println!("{}", "No edges.".dimmed());
        return;
    }
    println!(
        "  {:>8}  {:>8}  {:>9}  {:>6}",
        "From".bold(),
        "To".bold(),
        "Color".bold(),
        "Width".bold()
    );
    for edge in edges {
        println!(
            "  {:>8}  {:>8}  {:>9}  {:>6.1}",
            edge.from, edge.to, edge.color, edge.width
        );
    }
}
