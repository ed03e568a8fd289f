//! Placement delegated to the `force_graph` physics simulation.
//!
//! Vertices are seeded on a circle of radius 100 around the origin and the
//! simulation is stepped until it stops reducing overlap or the step budget
//! runs out. Simulation coordinates are unbounded, so the result is scaled
//! and centered into the canvas afterwards.

use std::collections::HashMap;
use std::f64::consts::TAU;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use tracing::debug;

use super::{EdgePlacement, PlacementStrategy, VertexPlacement, clamp_axis};
use crate::config::SimulationConfig;
use crate::model::VertexId;

const SEED_RADIUS: f64 = 100.0;
const NODE_MASS: f32 = 10.0;
/// Pairs closer than this count toward the overlap score.
const MIN_NODE_SPACING: f64 = 10.0;
const OVERLAP_PREVENTION: f64 = 1.5;
const PADDING_FACTOR: f64 = 1.5;

/// Force-simulation layout backed by [`force_graph`].
#[derive(Debug, Clone, Default)]
pub struct SimulationLayout {
    config: SimulationConfig,
}

impl SimulationLayout {
    /// Layout with the given parameters.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The parameters in use.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn build(&self, vertices: &[VertexPlacement], edges: &[EdgePlacement]) -> ForceGraph<usize, ()> {
        let config = &self.config;
        let mut graph = ForceGraph::new(SimulationParameters {
            force_charge: config.charge,
            force_spring: config.spring,
            force_max: config.max_force,
            node_speed: config.node_speed,
            damping_factor: config.damping_factor,
        });

        #[allow(clippy::cast_precision_loss)]
        let step = TAU / vertices.len() as f64;
        let mut nodes: HashMap<VertexId, DefaultNodeIdx> = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * position as f64;
            #[allow(clippy::cast_possible_truncation)]
            let node = graph.add_node(NodeData {
                x: (SEED_RADIUS * angle.cos()) as f32,
                y: (SEED_RADIUS * angle.sin()) as f32,
                mass: NODE_MASS,
                is_anchor: false,
                user_data: position,
            });
            nodes.insert(vertex.id, node);
        }

        for edge in edges {
            if edge.from == edge.to {
                continue;
            }
            if let (Some(&a), Some(&b)) = (nodes.get(&edge.from), nodes.get(&edge.to)) {
                graph.add_edge(a, b, EdgeData::default());
            }
        }
        graph
    }

    /// Positions indexed like the placement slice.
    fn positions(graph: &ForceGraph<usize, ()>, count: usize) -> Vec<(f64, f64)> {
        let mut positions = vec![(0.0, 0.0); count];
        graph.visit_nodes(|node| {
            if let Some(slot) = positions.get_mut(node.data.user_data) {
                *slot = (f64::from(node.x()), f64::from(node.y()));
            }
        });
        positions
    }

    fn scale_and_center(
        &self,
        width: f64,
        height: f64,
        positions: &[(f64, f64)],
        vertices: &mut [VertexPlacement],
    ) {
        let (min_x, max_x, min_y, max_y) = bounds(positions);
        let padding = self.config.default_vertex_radius * 2.0 * OVERLAP_PREVENTION * PADDING_FACTOR;
        #[allow(clippy::cast_precision_loss)]
        let minimum_extent = MIN_NODE_SPACING * vertices.len() as f64 / 2.0;

        let scale_x = (width - padding * 2.0) / (max_x - min_x).max(minimum_extent);
        let scale_y = (height - padding * 2.0) / (max_y - min_y).max(minimum_extent);
        let scale = scale_x.min(scale_y);
        let center_x = f64::midpoint(min_x, max_x);
        let center_y = f64::midpoint(min_y, max_y);

        for (vertex, &(x, y)) in vertices.iter_mut().zip(positions) {
            vertex.x = clamp_axis(width / 2.0 + (x - center_x) * scale, padding, width);
            vertex.y = clamp_axis(height / 2.0 + (y - center_y) * scale, padding, height);
        }
    }
}

/// Summed shortfall below [`MIN_NODE_SPACING`] over every node pair.
fn overlap(positions: &[(f64, f64)]) -> f64 {
    let mut total = 0.0;
    for (i, &(ax, ay)) in positions.iter().enumerate() {
        for &(bx, by) in &positions[i + 1..] {
            total += (MIN_NODE_SPACING - (ax - bx).hypot(ay - by)).max(0.0);
        }
    }
    total
}

fn bounds(positions: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    positions.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(min_x, max_x, min_y, max_y), &(x, y)| {
            (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
        },
    )
}

impl PlacementStrategy for SimulationLayout {
    fn default_vertex_radius(&self) -> f64 {
        self.config.default_vertex_radius
    }

    fn default_edge_width(&self) -> f32 {
        self.config.default_edge_width
    }

    fn place(&self, width: f64, height: f64, vertices: &mut [VertexPlacement], edges: &[EdgePlacement]) {
        if vertices.is_empty() {
            return;
        }

        let mut graph = self.build(vertices, edges);
        let mut best_overlap = f64::INFINITY;
        let mut last_improvement = 0u32;
        let mut steps = 0u32;

        while steps < self.config.steps {
            graph.update(self.config.time_step);
            let current = overlap(&Self::positions(&graph, vertices.len()));
            if current < best_overlap {
                best_overlap = current;
                last_improvement = steps;
            } else if steps - last_improvement > self.config.patience {
                break;
            }
            steps += 1;
        }

        debug!(
            vertex_count = vertices.len(),
            steps,
            overlap = best_overlap,
            "Force simulation finished"
        );

        let positions = Self::positions(&graph, vertices.len());
        self.scale_and_center(width, height, &positions, vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Color;

    fn ring(count: VertexId) -> (Vec<VertexPlacement>, Vec<EdgePlacement>) {
        let vertices = (0..count).map(|id| VertexPlacement::new(id, 25.0)).collect();
        let edges = (0..count)
            .map(|id| EdgePlacement::new(id, (id + 1) % count, 1.0))
            .collect();
        (vertices, edges)
    }

    fn short_run() -> SimulationLayout {
        SimulationLayout::new(SimulationConfig {
            steps: 200,
            ..SimulationConfig::default()
        })
    }

    #[test]
    fn result_fits_inside_padding() {
        let (mut vertices, edges) = ring(8);
        let layout = short_run();
        let padding = 25.0 * 2.0 * OVERLAP_PREVENTION * PADDING_FACTOR;

        layout.place(800.0, 600.0, &mut vertices, &edges);

        for vertex in &vertices {
            assert!(vertex.x.is_finite() && vertex.y.is_finite());
            assert!(vertex.x >= padding && vertex.x <= 800.0 - padding, "x = {}", vertex.x);
            assert!(vertex.y >= padding && vertex.y <= 600.0 - padding, "y = {}", vertex.y);
        }
    }

    #[test]
    fn simulation_is_deterministic() {
        let (mut first, edges) = ring(6);
        let (mut second, _) = ring(6);
        let layout = short_run();

        layout.place(640.0, 480.0, &mut first, &edges);
        layout.place(640.0, 480.0, &mut second, &edges);

        assert_eq!(first, second);
    }

    #[test]
    fn single_vertex_lands_in_the_middle() {
        let mut vertices = vec![VertexPlacement::new(7, 25.0)];

        short_run().place(500.0, 300.0, &mut vertices, &[]);

        assert!((vertices[0].x - 250.0).abs() < 1e-6);
        assert!((vertices[0].y - 150.0).abs() < 1e-6);
    }

    #[test]
    fn overlap_counts_close_pairs_only() {
        let positions = [(0.0, 0.0), (4.0, 0.0), (100.0, 0.0)];

        assert!((overlap(&positions) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn cosmetics_survive_placement() {
        let (mut vertices, edges) = ring(3);
        vertices[1].radius = 40.0;

        short_run().place(400.0, 400.0, &mut vertices, &edges);

        assert!((vertices[1].radius - 40.0).abs() < f64::EPSILON);
        assert!(vertices.iter().all(|v| v.color == Color::GRAY));
    }
}
