//! `graphlens bridges` command implementation.

use colored::Colorize;
use graphlens::algorithms::find_bridges;
use graphlens::{Graph, GraphKind};

use super::display::{print_heading, print_numbered, print_wrong_kind};

/// Run the bridges command.
pub fn run(graph: &Graph) -> anyhow::Result<()> {
    print_heading("Bridges", graph);

    if graph.is_directed() {
        print_wrong_kind("bridges", GraphKind::Undirected);
        return Ok(());
    }

    let bridges = find_bridges(graph);
    if bridges.is_empty() {
        println!("{}", "No bridges: every edge lies on a cycle.".green());
        return Ok(());
    }

    println!("Found {} bridges:", bridges.len().to_string().red().bold());
    print_numbered(&bridges, "Bridge", ToString::to_string);

    Ok(())
}
