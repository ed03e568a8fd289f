//! Layout strategies driven through the `PlacementStrategy` trait object.

use graphlens::algorithms::{find_bridges, leader_rank_default};
use graphlens::config::{LayoutConfig, SimulationConfig};
use graphlens::hints::{self, EdgeHighlight};
use graphlens::layout::{
    Color, ForceDirectedLayout, PlacementStrategy, SimulationLayout, placements_for,
};
use graphlens::{Graph, GraphKind};
use rstest::rstest;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 700.0;

fn barbell() -> Graph {
    Graph::from_edges(
        GraphKind::Undirected,
        [
            (1, 2, 1),
            (2, 3, 1),
            (3, 1, 1),
            (3, 4, 1),
            (4, 5, 1),
            (5, 6, 1),
            (6, 4, 1),
        ],
    )
}

fn strategy(name: &str) -> Box<dyn PlacementStrategy> {
    match name {
        "force-directed" => Box::new(ForceDirectedLayout::new(LayoutConfig {
            seed: Some(17),
            ..LayoutConfig::default()
        })),
        _ => Box::new(SimulationLayout::new(SimulationConfig {
            steps: 300,
            ..SimulationConfig::default()
        })),
    }
}

#[rstest]
#[case::force_directed("force-directed")]
#[case::simulation("simulation")]
fn every_vertex_lands_on_canvas(#[case] name: &str) {
    let graph = barbell();
    let layout = strategy(name);
    let (mut vertices, edges) = placements_for(&graph, layout.as_ref());

    layout.place(WIDTH, HEIGHT, &mut vertices, &edges);

    assert_eq!(vertices.len(), graph.size());
    for vertex in &vertices {
        assert!(vertex.x >= vertex.radius && vertex.x <= WIDTH - vertex.radius);
        assert!(vertex.y >= vertex.radius && vertex.y <= HEIGHT - vertex.radius);
    }
}

#[rstest]
#[case::force_directed("force-directed")]
#[case::simulation("simulation")]
fn placement_is_reproducible(#[case] name: &str) {
    let graph = barbell();
    let layout = strategy(name);
    let (mut first, edges) = placements_for(&graph, layout.as_ref());
    let (mut second, _) = placements_for(&graph, layout.as_ref());

    layout.place(WIDTH, HEIGHT, &mut first, &edges);
    layout.place(WIDTH, HEIGHT, &mut second, &edges);

    assert_eq!(first, second);
}

#[test]
fn hints_then_reset_round_trip() {
    let graph = barbell();
    let layout = strategy("force-directed");
    let (mut vertices, mut edges) = placements_for(&graph, layout.as_ref());
    layout.place(WIDTH, HEIGHT, &mut vertices, &edges);
    let positions: Vec<(f64, f64)> = vertices.iter().map(|v| (v.x, v.y)).collect();

    let scales = hints::rank_scales(&leader_rank_default(&graph));
    hints::apply_rank_scales(&mut vertices, &scales, layout.default_vertex_radius());
    let bridge_pairs: Vec<_> = find_bridges(&graph).iter().map(|edge| edge.endpoints()).collect();
    let changed = hints::apply_edge_highlight(
        &mut edges,
        &bridge_pairs,
        EdgeHighlight::BRIDGE,
        layout.default_edge_width(),
    );

    assert_eq!(changed, 1);
    assert!(vertices.iter().any(|v| v.radius > layout.default_vertex_radius()));

    layout.reset_vertices(&mut vertices);
    layout.reset_edges(&mut edges);

    assert!(vertices.iter().all(|v| v.color == Color::GRAY));
    assert!(vertices.iter().all(|v| (v.radius - 25.0).abs() < f64::EPSILON));
    assert!(edges.iter().all(|e| e.color == Color::BLACK));
    assert_eq!(
        vertices.iter().map(|v| (v.x, v.y)).collect::<Vec<_>>(),
        positions
    );
}
