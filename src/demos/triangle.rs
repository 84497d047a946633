use std::f64::consts::FRAC_PI_6;

use crate::config::DemoKind;
use crate::geometry::{flatten, Vec2};
use crate::scene::{ClipScale, DrawCall, Scene, Topology, VertexLayout, BLACK, TRANSPARENT, WHITE};

use super::Demo;

const SIDE: f64 = 400.0;

const CORNER_COLORS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Equilateral triangle centred on the origin, either with interpolated
/// corner colours or in a single colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    per_vertex_color: bool,
}

impl Triangle {
    pub fn per_vertex_color() -> Self {
        Self { per_vertex_color: true }
    }

    pub fn flat() -> Self {
        Self { per_vertex_color: false }
    }
}

pub fn corners(side: f64) -> [Vec2; 3] {
    let half_height = side * FRAC_PI_6.cos() / 2.0;
    [
        Vec2::new(0.0, half_height),
        Vec2::new(-side / 2.0, -half_height),
        Vec2::new(side / 2.0, -half_height),
    ]
}

impl Demo for Triangle {
    fn kind(&self) -> DemoKind {
        if self.per_vertex_color {
            DemoKind::Triangle
        } else {
            DemoKind::TriangleFlat
        }
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let corners = corners(SIDE);
        if !self.per_vertex_color {
            let mut scene = Scene::new(BLACK, ClipScale::Pixels { factor: 1.0 });
            scene.push(DrawCall::new(Topology::Triangles, flatten(&corners), WHITE));
            return scene;
        }

        let vertices = corners
            .iter()
            .zip(CORNER_COLORS)
            .flat_map(|(p, [r, g, b])| [p.x as f32, p.y as f32, r, g, b])
            .collect();
        let mut scene = Scene::new(TRANSPARENT, ClipScale::Pixels { factor: 1.0 });
        scene.push(
            DrawCall::new(Topology::Triangles, vertices, WHITE)
                .with_layout(VertexLayout::PositionColor),
        );
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaves_position_and_color() {
        let scene = Triangle::per_vertex_color().scene(Vec2::new(800.0, 800.0));
        let call = &scene.calls[0];
        assert_eq!(call.layout, VertexLayout::PositionColor);
        assert_eq!(call.vertex_count(), 3);
        assert_eq!(call.vertices[2..5], [1.0, 0.0, 0.0]);
        assert_eq!(call.vertices[12..15], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn corners_are_equidistant() {
        let [a, b, c] = corners(SIDE);
        for d in [a.distance(b), b.distance(c), c.distance(a)] {
            assert!((d - SIDE).abs() < 1e-9);
        }
    }
}
