//! `graphlens rank` command implementation.

use colored::Colorize;
use graphlens::algorithms::leader_rank;
use graphlens::config::LeaderRankConfig;
use graphlens::hints::rank_scales;
use graphlens::Graph;

use super::display::print_heading;

/// Run the rank command.
pub fn run(graph: &Graph, config: &LeaderRankConfig, limit: usize) -> anyhow::Result<()> {
    print_heading("LeaderRank centrality", graph);

    let ranks = leader_rank(graph, config);
    if ranks.is_empty() {
        println!("{}", "Graph has no vertices.".yellow());
        return Ok(());
    }
    let scales = rank_scales(&ranks);

    let mut ordered: Vec<_> = ranks.iter().map(|(&vertex, &rank)| (vertex, rank)).collect();
    ordered.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    println!(
        "  {:>8}  {:>10}  {:>6}",
        "Vertex".bold(),
        "Rank".bold(),
        "Scale".bold()
    );
    for (vertex, rank) in ordered.iter().take(limit) {
        let scale = scales.get(vertex).copied().unwrap_or(1.0);
        println!("  {vertex:>8}  {rank:>10.4}  {scale:>6.2}");
    }

    if ordered.len() > limit {
        println!();
        println!(
            "  {} ... and {} more (use --limit to show more)",
            "•".dimmed(),
            ordered.len() - limit
        );
    }

    Ok(())
}
