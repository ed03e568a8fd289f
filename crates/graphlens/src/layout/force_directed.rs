//! Native force-directed placement.
//!
//! Every iteration visits vertices in order and moves each one immediately:
//!
//! - every other vertex pushes it away with `repulsion / d²`, plus
//!   `overlap_prevention * ((min_d - d) / min_d) / d²` once closer than the
//!   pair's minimum distance `min_d`;
//! - every incident edge pulls it toward the neighbour with
//!   `attraction * (d - min_d) / optimal`, which pushes instead when the pair
//!   is closer than `min_d`.
//!
//! `optimal = sqrt(width * height / n)` and
//! `min_d = max(default_radius * min_distance_multiplier, r1 + r2)`.
//! The displacement is damped, then clamped so the whole disc stays on the
//! canvas.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{EdgePlacement, PlacementStrategy, VertexPlacement, clamp_axis};
use crate::config::LayoutConfig;
use crate::model::VertexId;

/// Distances are floored here to keep the inverse-square terms finite.
const MIN_DISTANCE: f64 = 0.1;

/// Fixed-iteration force-directed layout.
#[derive(Debug, Clone, Default)]
pub struct ForceDirectedLayout {
    config: LayoutConfig,
}

impl ForceDirectedLayout {
    /// Layout with the given parameters.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The parameters in use.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn scatter(&self, width: f64, height: f64, vertices: &mut [VertexPlacement]) {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        for vertex in vertices {
            vertex.x = rng.random::<f64>() * width;
            vertex.y = rng.random::<f64>() * height;
        }
    }

    fn force_on(
        &self,
        current: usize,
        vertices: &[VertexPlacement],
        neighbours: &[Vec<usize>],
        optimal: f64,
    ) -> (f64, f64) {
        let config = &self.config;
        let min_allowed = config.default_vertex_radius * config.min_distance_multiplier;
        let me = &vertices[current];
        let (mut force_x, mut force_y) = (0.0, 0.0);

        for (other_index, other) in vertices.iter().enumerate() {
            if other_index == current {
                continue;
            }
            let min_distance = min_allowed.max(me.radius + other.radius);
            let (dx, dy, distance) = separation(me, other);

            let repulsion = config.repulsion / (distance * distance);
            let anti_overlap = if distance < min_distance {
                let overlap = (min_distance - distance) / min_distance;
                config.overlap_prevention * overlap / (distance * distance)
            } else {
                0.0
            };
            force_x += dx / distance * (repulsion + anti_overlap);
            force_y += dy / distance * (repulsion + anti_overlap);
        }

        for &neighbour_index in &neighbours[current] {
            let neighbour = &vertices[neighbour_index];
            let min_distance = min_allowed.max(me.radius + neighbour.radius);
            let (dx, dy, distance) = separation(me, neighbour);

            let attraction = config.attraction * (distance - min_distance) / optimal;
            force_x -= dx / distance * attraction;
            force_y -= dy / distance * attraction;
        }

        (force_x, force_y)
    }
}

fn separation(a: &VertexPlacement, b: &VertexPlacement) -> (f64, f64, f64) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx, dy, dx.hypot(dy).max(MIN_DISTANCE))
}

/// Incident neighbours by slice index; unknown endpoints and self-loops are
/// dropped.
fn neighbour_lists(vertices: &[VertexPlacement], edges: &[EdgePlacement]) -> Vec<Vec<usize>> {
    let index: HashMap<VertexId, usize> = vertices
        .iter()
        .enumerate()
        .map(|(position, vertex)| (vertex.id, position))
        .collect();
    let mut lists = vec![Vec::new(); vertices.len()];
    for edge in edges {
        let (Some(&a), Some(&b)) = (index.get(&edge.from), index.get(&edge.to)) else {
            continue;
        };
        if a != b {
            lists[a].push(b);
            lists[b].push(a);
        }
    }
    lists
}

impl PlacementStrategy for ForceDirectedLayout {
    fn default_vertex_radius(&self) -> f64 {
        self.config.default_vertex_radius
    }

    fn default_edge_width(&self) -> f32 {
        self.config.default_edge_width
    }

    #[allow(clippy::cast_precision_loss)]
    fn place(&self, width: f64, height: f64, vertices: &mut [VertexPlacement], edges: &[EdgePlacement]) {
        if vertices.is_empty() {
            return;
        }
        if vertices.iter().all(VertexPlacement::at_origin) {
            self.scatter(width, height, vertices);
        }

        let optimal = (width * height / vertices.len() as f64).sqrt().max(MIN_DISTANCE);
        let neighbours = neighbour_lists(vertices, edges);
        let damping = self.config.damping;

        for _ in 0..self.config.iterations {
            for current in 0..vertices.len() {
                let (force_x, force_y) = self.force_on(current, vertices, &neighbours, optimal);
                let vertex = &mut vertices[current];
                vertex.x = clamp_axis(vertex.x + force_x * damping, vertex.radius, width);
                vertex.y = clamp_axis(vertex.y + force_y * damping, vertex.radius, height);
            }
        }

        debug!(
            vertex_count = vertices.len(),
            iterations = self.config.iterations,
            "Force-directed layout finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> ForceDirectedLayout {
        ForceDirectedLayout::new(LayoutConfig {
            seed: Some(seed),
            ..LayoutConfig::default()
        })
    }

    fn triangle() -> (Vec<VertexPlacement>, Vec<EdgePlacement>) {
        let vertices = (1..=3).map(|id| VertexPlacement::new(id, 25.0)).collect();
        let edges = vec![
            EdgePlacement::new(1, 2, 1.0),
            EdgePlacement::new(2, 3, 1.0),
            EdgePlacement::new(3, 1, 1.0),
        ];
        (vertices, edges)
    }

    fn in_bounds(vertex: &VertexPlacement, width: f64, height: f64) -> bool {
        vertex.x >= vertex.radius
            && vertex.x <= width - vertex.radius
            && vertex.y >= vertex.radius
            && vertex.y <= height - vertex.radius
    }

    #[test]
    fn vertices_stay_on_canvas() {
        let layout = seeded(1);
        let mut vertices: Vec<_> = (0..12).map(|id| VertexPlacement::new(id, 25.0)).collect();
        let edges: Vec<_> = (1..12).map(|id| EdgePlacement::new(0, id, 1.0)).collect();

        layout.place(400.0, 300.0, &mut vertices, &edges);

        assert!(vertices.iter().all(|v| in_bounds(v, 400.0, 300.0)));
        assert!(vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let (mut first, edges) = triangle();
        let (mut second, _) = triangle();

        seeded(42).place(800.0, 600.0, &mut first, &edges);
        seeded(42).place(800.0, 600.0, &mut second, &edges);

        assert_eq!(first, second);
    }

    #[test]
    fn connected_vertices_do_not_overlap() {
        for seed in 0..4 {
            let (mut vertices, edges) = triangle();
            seeded(seed).place(800.0, 600.0, &mut vertices, &edges);

            for (i, a) in vertices.iter().enumerate() {
                for b in &vertices[i + 1..] {
                    let (_, _, distance) = separation(a, b);
                    assert!(distance > a.radius + b.radius, "seed {seed}: {distance}");
                }
            }
        }
    }

    #[test]
    fn preset_positions_are_not_scattered() {
        let layout = ForceDirectedLayout::new(LayoutConfig {
            iterations: 0,
            ..LayoutConfig::default()
        });
        let mut vertices = vec![VertexPlacement::at(1, 100.0, 100.0, 25.0), VertexPlacement::new(2, 25.0)];

        layout.place(800.0, 600.0, &mut vertices, &[]);

        assert_eq!(vertices[0], VertexPlacement::at(1, 100.0, 100.0, 25.0));
        assert_eq!(vertices[1], VertexPlacement::new(2, 25.0));
    }

    #[test]
    fn unconnected_pair_is_pushed_apart() {
        let layout = seeded(0);
        let mut vertices = vec![
            VertexPlacement::at(1, 390.0, 300.0, 25.0),
            VertexPlacement::at(2, 410.0, 300.0, 25.0),
        ];

        layout.place(800.0, 600.0, &mut vertices, &[]);

        assert!(vertices[1].x - vertices[0].x > 20.0);
    }

    #[test]
    fn dangling_edges_and_empty_input_are_ignored() {
        let layout = seeded(3);
        let mut vertices = vec![VertexPlacement::new(1, 25.0)];

        layout.place(200.0, 200.0, &mut [], &[]);
        layout.place(200.0, 200.0, &mut vertices, &[EdgePlacement::new(1, 99, 1.0)]);

        assert!(in_bounds(&vertices[0], 200.0, 200.0));
    }
}
