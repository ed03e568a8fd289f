//! `graphlens path` command implementation.

use colored::Colorize;
use graphlens::algorithms::{bellman_ford, dijkstra, has_negative_weight};
use graphlens::{Graph, VertexId};

use super::display::{arrow_chain, print_heading};
use super::types::PathAlgorithmArg;

/// Run the path command.
pub fn run(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    algorithm: PathAlgorithmArg,
) -> anyhow::Result<()> {
    print_heading(&format!("Shortest path {start} → {end} ({algorithm})"), graph);

    let result = match algorithm {
        PathAlgorithmArg::Dijkstra => dijkstra(graph, start, end),
        PathAlgorithmArg::BellmanFord => bellman_ford(graph, start, end),
    };

    match result {
        Some(path) if path.is_empty() => {
            println!("{}", format!("No path from {start} to {end}.").yellow());
        }
        Some(path) => {
            let cost: i128 = path
                .windows(2)
                .filter_map(|pair| graph.edge_weight(pair[0], pair[1]))
                .map(i128::from)
                .sum();
            println!("  {}", arrow_chain(&path).green().bold());
            println!("  {}: {cost}", "Total weight".white().bold());
        }
        None => {
            let reason = if !graph.contains_vertex(start) {
                format!("vertex {start} is not in the graph")
            } else if !graph.contains_vertex(end) {
                format!("vertex {end} is not in the graph")
            } else if algorithm == PathAlgorithmArg::Dijkstra && has_negative_weight(graph) {
                "the graph has negative edge weights; try --algorithm bellman-ford".to_string()
            } else if algorithm == PathAlgorithmArg::BellmanFord {
                format!("a negative cycle is reachable from {start}, or {end} is unreachable")
            } else {
                "no result".to_string()
            };
            println!("{}", format!("No result: {reason}.").red());
        }
    }

    Ok(())
}
