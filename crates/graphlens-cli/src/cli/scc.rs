//! `graphlens scc` command implementation.

use colored::Colorize;
use graphlens::algorithms::strongly_connected_components;
use graphlens::{Graph, GraphKind};

use super::display::{print_heading, print_numbered, print_wrong_kind, vertex_set};

/// Run the scc command.
pub fn run(graph: &Graph) -> anyhow::Result<()> {
    print_heading("Strongly connected components", graph);

    if !graph.is_directed() {
        print_wrong_kind("scc", GraphKind::Directed);
        return Ok(());
    }

    let mut components = strongly_connected_components(graph);
    // Largest first, then by smallest member, for stable output
    components.sort_by_key(|component| {
        (
            std::cmp::Reverse(component.len()),
            component.iter().min().copied(),
        )
    });

    println!(
        "Found {} components:",
        components.len().to_string().green().bold()
    );
    print_numbered(&components, "Component", |component| vertex_set(component));

    Ok(())
}
