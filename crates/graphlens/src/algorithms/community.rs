//! Community detection by greedy modularity optimization.
//!
//! This is the local-moving phase of the Louvain method without the
//! aggregation phase. Every vertex starts alone; each round visits vertices
//! in a shuffled order and moves each one to the neighbouring community with
//! the best strictly positive modularity gain. Rounds repeat until one
//! brings neither a modularity improvement above `epsilon` nor a single
//! move.
//!
//! The visiting order is random, so different seeds may produce different
//! (equally valid) partitions.

use std::collections::HashMap;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::config::CommunityConfig;
use crate::model::{Graph, VertexId};

/// Dense community label, `0..community_count`.
pub type CommunityId = usize;

/// Gains at or below this are treated as zero.
const MIN_GAIN: f64 = 1e-12;

/// Partition an undirected graph into communities.
///
/// Labels are dense and ordered by each community's smallest vertex id.
/// Directed or empty graphs yield an empty map. If the edge weights do not
/// sum to a positive total, every edge is weighted `1.0` instead.
#[must_use]
pub fn detect_communities(graph: &Graph, config: &CommunityConfig) -> HashMap<VertexId, CommunityId> {
    if graph.is_directed() || graph.is_empty() {
        return HashMap::new();
    }

    let weights = EdgeWeights::new(graph);
    let two_m = 2.0 * weights.total;
    if two_m <= 0.0 {
        debug!("No edges to optimize over; every vertex is its own community");
        return relabel(graph.vertices().map(|vertex| (vertex, vertex)));
    }

    let neighbours = weights.neighbours(graph);
    let degree = weights.degrees(graph);

    // Communities are labelled by a member vertex id while optimizing.
    let mut membership: HashMap<VertexId, VertexId> =
        graph.vertices().map(|vertex| (vertex, vertex)).collect();
    let mut totals: HashMap<VertexId, f64> = degree.clone();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut order: Vec<VertexId> = graph.vertices().collect();
    let mut best_modularity = f64::NEG_INFINITY;
    let mut rounds = 0u32;
    let mut settled = false;

    while rounds < config.max_rounds {
        rounds += 1;
        let current = modularity_with(graph, &membership, &weights, config.resolution);
        let improved = current > best_modularity + config.epsilon;
        if improved {
            best_modularity = current;
        }

        order.shuffle(&mut rng);
        let mut moved = 0usize;
        for &vertex in &order {
            let own = membership[&vertex];
            let k_i = degree[&vertex];

            let mut links: HashMap<VertexId, f64> = HashMap::new();
            for &(neighbour, weight) in &neighbours[&vertex] {
                if neighbour != vertex {
                    *links.entry(membership[&neighbour]).or_default() += weight;
                }
            }
            let mut candidates: Vec<(VertexId, f64)> = links.iter().map(|(&c, &w)| (c, w)).collect();
            candidates.sort_unstable_by_key(|&(community, _)| community);

            if let Some(total) = totals.get_mut(&own) {
                *total -= k_i;
            }
            let score = |community: VertexId, link_weight: f64| {
                let total = totals.get(&community).copied().unwrap_or(0.0);
                link_weight - config.resolution * total * k_i / two_m
            };
            let stay = score(own, links.get(&own).copied().unwrap_or(0.0));

            let mut target = own;
            let mut best_gain = MIN_GAIN;
            for (community, link_weight) in candidates {
                if community == own {
                    continue;
                }
                let gain = score(community, link_weight) - stay;
                if gain > best_gain {
                    best_gain = gain;
                    target = community;
                }
            }

            *totals.entry(target).or_default() += k_i;
            if target != own {
                membership.insert(vertex, target);
                moved += 1;
            }
        }

        debug!(round = rounds, modularity = current, moved, "Community round finished");
        if !improved && moved == 0 {
            settled = true;
            break;
        }
    }

    if !settled {
        warn!(
            rounds,
            "Community detection hit its round cap before settling"
        );
    }
    relabel(membership)
}

/// Modularity of `partition` on an undirected graph.
///
/// `Q = Σ_c [ in_c / m - resolution * (tot_c / 2m)² ]` where `in_c` is the
/// weight inside community `c`, `tot_c` the summed degree of its members and
/// `m` the total edge weight. Edges touching unlabelled vertices are
/// ignored. Returns `0.0` for directed graphs and graphs without weight.
#[must_use]
pub fn modularity<L>(graph: &Graph, partition: &HashMap<VertexId, L>, resolution: f64) -> f64
where
    L: Copy + Eq + Hash,
{
    if graph.is_directed() {
        return 0.0;
    }
    modularity_with(graph, partition, &EdgeWeights::new(graph), resolution)
}

fn modularity_with<L>(
    graph: &Graph,
    partition: &HashMap<VertexId, L>,
    weights: &EdgeWeights,
    resolution: f64,
) -> f64
where
    L: Copy + Eq + Hash,
{
    let m = weights.total;
    if m <= 0.0 {
        return 0.0;
    }
    let mut inside: HashMap<L, f64> = HashMap::new();
    let mut totals: HashMap<L, f64> = HashMap::new();
    for edge in graph.edges() {
        let (Some(&a), Some(&b)) = (partition.get(&edge.from), partition.get(&edge.to)) else {
            continue;
        };
        let weight = weights.of(edge.weight);
        if a == b {
            *inside.entry(a).or_default() += weight;
        }
        *totals.entry(a).or_default() += weight;
        *totals.entry(b).or_default() += weight;
    }
    totals
        .iter()
        .map(|(label, total)| {
            let internal = inside.get(label).copied().unwrap_or(0.0);
            internal / m - resolution * (total / (2.0 * m)).powi(2)
        })
        .sum()
}

/// Effective edge weights: raw weights, or unit weights when the raw total
/// is not positive.
struct EdgeWeights {
    unit: bool,
    total: f64,
}

impl EdgeWeights {
    #[allow(clippy::cast_precision_loss)]
    fn new(graph: &Graph) -> Self {
        let raw: f64 = graph.edges().map(|edge| edge.weight as f64).sum();
        if raw > 0.0 {
            Self { unit: false, total: raw }
        } else {
            Self {
                unit: true,
                total: graph.edge_count() as f64,
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn of(&self, weight: i64) -> f64 {
        if self.unit { 1.0 } else { weight as f64 }
    }

    fn neighbours(&self, graph: &Graph) -> HashMap<VertexId, Vec<(VertexId, f64)>> {
        let mut lists: HashMap<VertexId, Vec<(VertexId, f64)>> = graph
            .vertices()
            .map(|vertex| (vertex, Vec::new()))
            .collect();
        for edge in graph.edges() {
            let weight = self.of(edge.weight);
            lists.entry(edge.from).or_default().push((edge.to, weight));
            if !edge.is_self_loop() {
                lists.entry(edge.to).or_default().push((edge.from, weight));
            }
        }
        lists
    }

    /// Weighted degree of every vertex; a self-loop counts twice.
    fn degrees(&self, graph: &Graph) -> HashMap<VertexId, f64> {
        let mut degrees: HashMap<VertexId, f64> =
            graph.vertices().map(|vertex| (vertex, 0.0)).collect();
        for edge in graph.edges() {
            let weight = self.of(edge.weight);
            *degrees.entry(edge.from).or_default() += weight;
            *degrees.entry(edge.to).or_default() += weight;
        }
        degrees
    }
}

/// Dense labels ordered by each community's smallest member.
fn relabel(
    membership: impl IntoIterator<Item = (VertexId, VertexId)>,
) -> HashMap<VertexId, CommunityId> {
    let membership: Vec<(VertexId, VertexId)> = membership.into_iter().collect();
    let mut smallest: HashMap<VertexId, VertexId> = HashMap::new();
    for &(vertex, label) in &membership {
        smallest
            .entry(label)
            .and_modify(|min| *min = (*min).min(vertex))
            .or_insert(vertex);
    }
    let mut labels: Vec<(VertexId, VertexId)> =
        smallest.into_iter().map(|(label, min)| (min, label)).collect();
    labels.sort_unstable();
    let dense: HashMap<VertexId, CommunityId> = labels
        .into_iter()
        .enumerate()
        .map(|(id, (_, label))| (label, id))
        .collect();

    membership
        .into_iter()
        .map(|(vertex, label)| (vertex, dense[&label]))
        .collect()
}

/// Number of distinct communities in a partition.
#[must_use]
pub fn community_count(partition: &HashMap<VertexId, CommunityId>) -> usize {
    partition
        .values()
        .copied()
        .collect::<std::collections::HashSet<_>>()
        .len()
}
