//! Presentation hints derived from algorithm results.
//!
//! Algorithms return ids and numbers only. The functions here translate those
//! results into colors, radius multipliers and stroke widths that a view layer
//! can apply to its [`VertexPlacement`]s and [`EdgePlacement`]s. Nothing in
//! this module is read back by the algorithms.

use std::collections::{BTreeSet, HashMap};

use crate::algorithms::community::CommunityId;
use crate::layout::{Color, EdgePlacement, VertexPlacement};
use crate::model::VertexId;

/// Radius multiplier of the lowest-ranked vertex.
pub const RANK_SCALE_MIN: f64 = 1.0;
/// Radius multiplier of the highest-ranked vertex.
pub const RANK_SCALE_MAX: f64 = 4.0;

/// Stroke width multiplier for shortest paths and cycles.
pub const PATH_WIDTH_FACTOR: f32 = 3.0;
/// Stroke width multiplier for spanning-tree edges.
pub const MST_WIDTH_FACTOR: f32 = 7.0;
/// Stroke width multiplier for bridges.
pub const BRIDGE_WIDTH_FACTOR: f32 = 2.0;

/// Path highlight color.
pub const PATH_COLOR: Color = Color::from_argb(0xFF1E_88E5);
/// Cycle highlight color.
pub const CYCLE_COLOR: Color = Color::from_argb(0xFFFF_D700);
/// Bridge highlight color.
pub const BRIDGE_COLOR: Color = Color::from_argb(0xFF00_FF88);

const COMMUNITY_SATURATION: f64 = 0.7;
const COMPONENT_SATURATION: f64 = 0.6;
const LIGHTNESS: f64 = 0.5;

/// How to restyle a set of edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHighlight {
    /// New stroke color, or keep the current one
    pub color: Option<Color>,
    /// Multiplier applied to the default width, or keep the current width
    pub width_factor: Option<f32>,
}

impl EdgeHighlight {
    /// Shortest path edges.
    pub const PATH: Self = Self {
        color: Some(PATH_COLOR),
        width_factor: Some(PATH_WIDTH_FACTOR),
    };
    /// Cycle edges.
    pub const CYCLE: Self = Self {
        color: Some(CYCLE_COLOR),
        width_factor: Some(PATH_WIDTH_FACTOR),
    };
    /// Bridges.
    pub const BRIDGE: Self = Self {
        color: Some(BRIDGE_COLOR),
        width_factor: Some(BRIDGE_WIDTH_FACTOR),
    };
    /// Spanning-tree edges keep their color and get thicker.
    pub const SPANNING_TREE: Self = Self {
        color: None,
        width_factor: Some(MST_WIDTH_FACTOR),
    };
}

/// Map ranks linearly onto `[RANK_SCALE_MIN, RANK_SCALE_MAX]`.
///
/// Returns an empty map when there is nothing to distinguish: no ranks, or
/// every rank equal.
#[must_use]
pub fn rank_scales(ranks: &HashMap<VertexId, f64>) -> HashMap<VertexId, f64> {
    let min = ranks.values().copied().fold(f64::INFINITY, f64::min);
    let max = ranks.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return HashMap::new();
    }

    ranks
        .iter()
        .map(|(&vertex, &rank)| {
            let t = (rank - min) / range;
            (vertex, RANK_SCALE_MIN + (RANK_SCALE_MAX - RANK_SCALE_MIN) * t)
        })
        .collect()
}

/// `count` colors with evenly spaced hues.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn distinct_colors(count: usize, saturation: f64) -> Vec<Color> {
    let step = 360.0 / count.max(1) as f64;
    (0..count)
        .map(|index| Color::hsl(index as f64 * step, saturation, LIGHTNESS))
        .collect()
}

/// One color per community, hues spread evenly around the wheel.
#[must_use]
pub fn community_colors(partition: &HashMap<VertexId, CommunityId>) -> HashMap<VertexId, Color> {
    let communities: BTreeSet<CommunityId> = partition.values().copied().collect();
    let palette: HashMap<CommunityId, Color> = communities
        .iter()
        .copied()
        .zip(distinct_colors(communities.len(), COMMUNITY_SATURATION))
        .collect();

    partition
        .iter()
        .map(|(&vertex, community)| (vertex, palette[community]))
        .collect()
}

/// One color per strongly connected component.
#[must_use]
pub fn component_colors(components: &[Vec<VertexId>]) -> HashMap<VertexId, Color> {
    let palette = distinct_colors(components.len(), COMPONENT_SATURATION);
    components
        .iter()
        .zip(palette)
        .flat_map(|(component, color)| component.iter().map(move |&vertex| (vertex, color)))
        .collect()
}

/// Consecutive vertex pairs along a path.
#[must_use]
pub fn path_edges(path: &[VertexId]) -> Vec<(VertexId, VertexId)> {
    path.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Consecutive vertex pairs around a cycle, including the closing pair.
#[must_use]
pub fn cycle_edges(cycle: &[VertexId]) -> Vec<(VertexId, VertexId)> {
    let mut pairs = path_edges(cycle);
    if let (Some(&first), Some(&last)) = (cycle.first(), cycle.last()) {
        pairs.push((last, first));
    }
    pairs
}

/// Restyle every edge joining one of `pairs` (in either order).
///
/// Returns the number of edges changed.
pub fn apply_edge_highlight(
    edges: &mut [EdgePlacement],
    pairs: &[(VertexId, VertexId)],
    highlight: EdgeHighlight,
    default_width: f32,
) -> usize {
    let mut changed = 0;
    for edge in edges.iter_mut() {
        if !pairs.iter().any(|&(a, b)| edge.joins(a, b)) {
            continue;
        }
        if let Some(color) = highlight.color {
            edge.color = color;
        }
        if let Some(factor) = highlight.width_factor {
            edge.width = default_width * factor;
        }
        changed += 1;
    }
    changed
}

/// Scale each vertex's radius from `default_radius`; vertices without a
/// scale are left alone.
pub fn apply_rank_scales(
    vertices: &mut [VertexPlacement],
    scales: &HashMap<VertexId, f64>,
    default_radius: f64,
) {
    for vertex in vertices {
        if let Some(scale) = scales.get(&vertex.id) {
            vertex.radius = default_radius * scale;
        }
    }
}

/// Recolor every vertex that has an entry in `colors`.
pub fn apply_vertex_colors(vertices: &mut [VertexPlacement], colors: &HashMap<VertexId, Color>) {
    for vertex in vertices {
        if let Some(&color) = colors.get(&vertex.id) {
            vertex.color = color;
        }
    }
}
