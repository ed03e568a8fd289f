//! `graphlens cycles` command implementation.

use colored::Colorize;
use graphlens::algorithms::find_cycles;
use graphlens::{Graph, VertexId};

use super::display::{arrow_chain, print_heading, print_numbered};

/// Run the cycles command.
pub fn run(graph: &Graph, start: VertexId) -> anyhow::Result<()> {
    print_heading(&format!("Cycles reachable from {start}"), graph);

    anyhow::ensure!(
        graph.contains_vertex(start),
        "vertex {start} is not in the graph"
    );

    let cycles = find_cycles(graph, start);
    if cycles.is_empty() {
        println!("{}", "No cycles found.".green());
        return Ok(());
    }

    println!("Found {} cycles:", cycles.len().to_string().red().bold());
    print_numbered(&cycles, "Cycle", |cycle| {
        // Repeat the first vertex to show the cycle closing
        let mut closed = cycle.clone();
        closed.extend(cycle.first());
        arrow_chain(&closed)
    });

    Ok(())
}
