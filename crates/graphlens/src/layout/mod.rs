//! Vertex placement on a 2D canvas.
//!
//! A [`PlacementStrategy`] receives caller-owned placement state and moves
//! vertices in place. Two strategies ship with the crate:
//!
//! - [`ForceDirectedLayout`] runs a fixed number of repulsion/attraction
//!   iterations with anti-overlap forces.
//! - [`SimulationLayout`] hands the graph to the `force_graph` simulation and
//!   fits its result into the canvas.
//!
//! Placement state carries cosmetic attributes (color, radius, width) that
//! the strategies can restore to defaults but never interpret.

mod force_directed;
mod simulation;

pub use force_directed::ForceDirectedLayout;
pub use simulation::SimulationLayout;

use std::fmt;

use crate::model::{Graph, VertexId};

/// ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Default vertex color.
    pub const GRAY: Self = Self::from_argb(0xFF88_8888);
    /// Default edge color.
    pub const BLACK: Self = Self::from_argb(0xFF00_0000);

    /// Unpack a `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack into `0xAARRGGBB`.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Opaque color from hue (degrees), saturation and lightness (`0..=1`).
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;
        let (r, g, b) = match h {
            h if h < 1.0 => (chroma, x, 0.0),
            h if h < 2.0 => (x, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, x),
            h if h < 4.0 => (0.0, x, chroma),
            h if h < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        Self {
            a: 0xFF,
            r: channel(r + m),
            g: channel(g + m),
            b: channel(b + m),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Position and cosmetic state of one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexPlacement {
    /// Vertex this placement belongs to
    pub id: VertexId,
    /// Horizontal position of the center
    pub x: f64,
    /// Vertical position of the center
    pub y: f64,
    /// Drawn radius
    pub radius: f64,
    /// Fill color
    pub color: Color,
}

impl VertexPlacement {
    /// A gray vertex at the origin.
    #[must_use]
    pub fn new(id: VertexId, radius: f64) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            radius,
            color: Color::GRAY,
        }
    }

    /// A gray vertex at `(x, y)`.
    #[must_use]
    pub fn at(id: VertexId, x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            ..Self::new(id, radius)
        }
    }

    fn at_origin(&self) -> bool {
        self.x.abs() < f64::EPSILON && self.y.abs() < f64::EPSILON
    }
}

/// Endpoints and cosmetic state of one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePlacement {
    /// First endpoint
    pub from: VertexId,
    /// Second endpoint
    pub to: VertexId,
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: f32,
}

impl EdgePlacement {
    /// A black edge of the given width.
    #[must_use]
    pub fn new(from: VertexId, to: VertexId, width: f32) -> Self {
        Self {
            from,
            to,
            color: Color::BLACK,
            width,
        }
    }

    /// Returns `true` if this edge joins `a` and `b` in either order.
    #[must_use]
    pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Default placement state for every vertex and edge of `graph`, all
/// vertices at the origin.
#[must_use]
pub fn placements_for(
    graph: &Graph,
    strategy: &dyn PlacementStrategy,
) -> (Vec<VertexPlacement>, Vec<EdgePlacement>) {
    let radius = strategy.default_vertex_radius();
    let width = strategy.default_edge_width();
    let vertices = graph
        .vertices()
        .map(|id| VertexPlacement::new(id, radius))
        .collect();
    let edges = graph
        .edges()
        .map(|edge| EdgePlacement::new(edge.from, edge.to, width))
        .collect();
    (vertices, edges)
}

/// A way of positioning vertices on a `width` x `height` canvas.
pub trait PlacementStrategy {
    /// Radius restored by [`reset_vertices`](Self::reset_vertices).
    fn default_vertex_radius(&self) -> f64;

    /// Width restored by [`reset_edges`](Self::reset_edges).
    fn default_edge_width(&self) -> f32;

    /// Move every vertex in place. Edges whose endpoints are not among
    /// `vertices` are ignored.
    fn place(&self, width: f64, height: f64, vertices: &mut [VertexPlacement], edges: &[EdgePlacement]);

    /// Restore default color and radius; positions are left untouched.
    fn reset_vertices(&self, vertices: &mut [VertexPlacement]) {
        let radius = self.default_vertex_radius();
        for vertex in vertices {
            vertex.color = Color::GRAY;
            vertex.radius = radius;
        }
    }

    /// Restore default color and width.
    fn reset_edges(&self, edges: &mut [EdgePlacement]) {
        let width = self.default_edge_width();
        for edge in edges {
            edge.color = Color::BLACK;
            edge.width = width;
        }
    }
}

/// Clamp a coordinate to `[margin, extent - margin]`, or to the middle of
/// the axis when the canvas is narrower than twice the margin.
fn clamp_axis(value: f64, margin: f64, extent: f64) -> f64 {
    let upper = extent - margin;
    if upper < margin {
        extent / 2.0
    } else {
        value.clamp(margin, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphKind;
    use rstest::rstest;

    #[rstest]
    #[case::gray(Color::GRAY, 0xFF88_8888)]
    #[case::black(Color::BLACK, 0xFF00_0000)]
    #[case::translucent(Color::from_argb(0x801E_88E5), 0x801E_88E5)]
    fn argb_packing(#[case] color: Color, #[case] argb: u32) {
        assert_eq!(color.to_argb(), argb);
    }

    #[rstest]
    #[case::red(0.0, Color::from_argb(0xFFFF_0000))]
    #[case::green(120.0, Color::from_argb(0xFF00_FF00))]
    #[case::blue(240.0, Color::from_argb(0xFF00_00FF))]
    #[case::wraps(360.0, Color::from_argb(0xFFFF_0000))]
    fn hsl_primaries(#[case] hue: f64, #[case] expected: Color) {
        assert_eq!(Color::hsl(hue, 1.0, 0.5), expected);
    }

    #[test]
    fn color_displays_as_hex() {
        assert_eq!(Color::from_argb(0xFFFF_D700).to_string(), "#FFFFD700");
    }

    #[rstest]
    #[case::inside(50.0, 10.0, 100.0, 50.0)]
    #[case::below(2.0, 10.0, 100.0, 10.0)]
    #[case::above(99.0, 10.0, 100.0, 90.0)]
    #[case::canvas_too_small(3.0, 30.0, 40.0, 20.0)]
    fn clamp_axis_cases(
        #[case] value: f64,
        #[case] margin: f64,
        #[case] extent: f64,
        #[case] expected: f64,
    ) {
        assert!((clamp_axis(value, margin, extent) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn edge_placement_joins_either_order() {
        let edge = EdgePlacement::new(1, 2, 1.0);

        assert!(edge.joins(2, 1));
        assert!(!edge.joins(1, 3));
    }

    #[test]
    fn placements_cover_whole_graph() {
        let graph = Graph::from_edges(GraphKind::Directed, [(1, 2, 0), (2, 3, 0)]);
        let strategy = ForceDirectedLayout::default();
        let (vertices, edges) = placements_for(&graph, &strategy);

        assert_eq!(vertices.len(), 3);
        assert_eq!(edges.len(), 2);
        assert!(vertices.iter().all(VertexPlacement::at_origin));
        assert!(edges.iter().all(|edge| edge.color == Color::BLACK));
    }

    #[test]
    fn resets_restore_defaults_without_moving() {
        let strategy = ForceDirectedLayout::default();
        let mut vertices = vec![VertexPlacement::at(1, 40.0, 60.0, 80.0)];
        vertices[0].color = Color::from_argb(0xFFFF_0000);
        let mut edges = vec![EdgePlacement::new(1, 1, 7.0)];
        edges[0].color = Color::from_argb(0xFF00_FF88);

        strategy.reset_vertices(&mut vertices);
        strategy.reset_edges(&mut edges);

        assert_eq!(vertices[0], VertexPlacement::at(1, 40.0, 60.0, 25.0));
        assert_eq!(edges[0], EdgePlacement::new(1, 1, 1.0));
    }
}
