//! Common display utilities for CLI commands.

use colored::Colorize;
use graphlens::{Graph, GraphKind, VertexId};

const MAX_DISPLAY_ITEMS: usize = 20;

/// `a → b → c`
pub fn arrow_chain(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// `{a, b, c}` with the ids sorted.
pub fn vertex_set(vertices: &[VertexId]) -> String {
    let mut sorted = vertices.to_vec();
    sorted.sort_unstable();
    let ids: Vec<String> = sorted.iter().map(ToString::to_string).collect();
    format!("{{{}}}", ids.join(", "))
}

/// Bold heading with the graph kind and size.
pub fn print_heading(title: &str, graph: &Graph) {
    println!(
        "{} {}",
        title.cyan().bold(),
        format!(
            "({} graph, {} vertices, {} edges)",
            graph.kind(),
            graph.size(),
            graph.edge_count()
        )
        .dimmed()
    );
    println!();
}

/// Explain that a command does not apply to this kind of graph.
pub fn print_wrong_kind(command: &str, required: GraphKind) {
    let article = match required {
        GraphKind::Directed => "a",
        GraphKind::Undirected => "an",
    };
    println!(
        "{}",
        format!("{command} requires {article} {required} graph (use --kind {required}).").yellow()
    );
}

/// Print numbered lines, truncated after `MAX_DISPLAY_ITEMS`.
pub fn print_numbered<T>(items: &[T], label: &str, render: impl Fn(&T) -> String) {
    for (i, item) in items.iter().take(MAX_DISPLAY_ITEMS).enumerate() {
        println!("  {} {}: {}", label.yellow().bold(), i + 1, render(item));
    }
    if items.len() > MAX_DISPLAY_ITEMS {
        println!(
            "  {} ... and {} more",
            "•".dimmed(),
            items.len() - MAX_DISPLAY_ITEMS
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_chain_joins_ids() {
        assert_eq!(arrow_chain(&[1, 2, 3]), "1 → 2 → 3");
        assert_eq!(arrow_chain(&[]), "");
    }

    #[test]
    fn vertex_set_sorts_ids() {
        assert_eq!(vertex_set(&[3, -1, 2]), "{-1, 2, 3}");
    }
}
