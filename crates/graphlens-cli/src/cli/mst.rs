//! `graphlens mst` command implementation.

use colored::Colorize;
use graphlens::algorithms::minimum_spanning_tree;
use graphlens::algorithms::spanning_tree::total_weight;
use graphlens::{Graph, GraphKind};

use super::display::{print_heading, print_numbered, print_wrong_kind};

/// Run the mst command.
pub fn run(graph: &Graph) -> anyhow::Result<()> {
    print_heading("Minimum spanning tree", graph);

    if graph.is_directed() {
        print_wrong_kind("mst", GraphKind::Undirected);
        return Ok(());
    }

    let tree = minimum_spanning_tree(graph);
    let spanning = graph.size().saturating_sub(1);
    let label = if tree.len() == spanning {
        "tree"
    } else {
        "forest"
    };

    println!(
        "Spanning {label} with {} edges:",
        tree.len().to_string().green().bold()
    );
    print_numbered(&tree, "Edge", ToString::to_string);
    println!();
    println!("  {}: {}", "Total weight".white().bold(), total_weight(&tree));

    Ok(())
}
