//! `graphlens communities` command implementation.

use std::collections::BTreeMap;

use colored::Colorize;
use graphlens::algorithms::community::community_count;
use graphlens::algorithms::{detect_communities, modularity};
use graphlens::config::CommunityConfig;
use graphlens::hints::community_colors;
use graphlens::{Graph, GraphKind, VertexId};

use super::display::{print_heading, print_numbered, print_wrong_kind, vertex_set};

/// Run the communities command.
pub fn run(graph: &Graph, config: &CommunityConfig) -> anyhow::Result<()> {
    print_heading("Communities", graph);

    anyhow::ensure!(
        config.resolution.is_finite() && config.resolution >= 0.0,
        "resolution must be a non-negative number, got {}",
        config.resolution
    );

    if graph.is_directed() {
        print_wrong_kind("communities", GraphKind::Undirected);
        return Ok(());
    }

    let partition = detect_communities(graph, config);
    if partition.is_empty() {
        println!("{}", "Graph has no vertices.".yellow());
        return Ok(());
    }

    let colors = community_colors(&partition);
    let mut members: BTreeMap<usize, Vec<VertexId>> = BTreeMap::new();
    for (&vertex, &community) in &partition {
        members.entry(community).or_default().push(vertex);
    }
    let groups: Vec<(Vec<VertexId>, String)> = members
        .into_values()
        .map(|vertices| {
            let color = vertices
                .first()
                .and_then(|vertex| colors.get(vertex))
                .map(ToString::to_string)
                .unwrap_or_default();
            (vertices, color)
        })
        .collect();

    println!(
        "Found {} communities (modularity {:.4}):",
        community_count(&partition).to_string().green().bold(),
        modularity(graph, &partition, config.resolution)
    );
    print_numbered(&groups, "Community", |(vertices, color)| {
        format!("{} {}", vertex_set(vertices), color.dimmed())
    });

    Ok(())
}
