//! `graphlens summary` command implementation.

use std::collections::HashSet;

use colored::Colorize;
use graphlens::algorithms::{find_bridges, has_negative_weight, strongly_connected_components};
use graphlens::{Graph, VertexId};

use super::display::print_heading;

/// Run the summary command.
pub fn run(graph: &Graph) -> anyhow::Result<()> {
    print_heading("Graph summary", graph);

    let self_loops = graph.edges().filter(|edge| edge.is_self_loop()).count();
    let touched: HashSet<VertexId> = graph
        .edges()
        .flat_map(|edge| [edge.from, edge.to])
        .collect();
    let isolated = graph
        .vertices()
        .filter(|vertex| !touched.contains(vertex))
        .count();

    println!("  {}: {}", "Kind".white().bold(), graph.kind());
    println!("  {}: {}", "Vertices".white().bold(), graph.size());
    println!("  {}: {}", "Edges".white().bold(), graph.edge_count());
    println!("  {}: {self_loops}", "Self-loops".white().bold());
    println!("  {}: {isolated}", "Isolated vertices".white().bold());
    println!(
        "  {}: {}",
        "Negative weights".white().bold(),
        if has_negative_weight(graph) { "yes" } else { "no" }
    );

    if graph.is_directed() {
        let components = strongly_connected_components(graph);
        println!(
            "  {}: {}",
            "Strongly connected components".white().bold(),
            components.len()
        );
    } else {
        println!("  {}: {}", "Bridges".white().bold(), find_bridges(graph).len());
    }

    Ok(())
}
