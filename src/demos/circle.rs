use crate::config::{DemoKind, ParamSpec};
use crate::error::Result;
use crate::geometry::{flatten, polygon_outline, Vec2};
use crate::scene::{ClipScale, DrawCall, Scene, Topology, BLACK, WHITE};

use super::{unknown_param, Demo};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("r", "rValue", 100.0),
    ParamSpec::new("vertexCount", "vertexCountValue", 32.0),
];

/// Outline of a regular polygon approximating a circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub segments: usize,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            radius: PARAMS[0].default,
            segments: PARAMS[1].default as usize,
        }
    }
}

impl Demo for Circle {
    fn kind(&self) -> DemoKind {
        DemoKind::Circle
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "r" => self.radius = value,
            "vertexCount" => self.segments = value.max(0.0) as usize,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let mut scene = Scene::new(BLACK, ClipScale::Pixels { factor: 1.0 });
        let outline = polygon_outline(self.radius, self.segments);
        if !outline.is_empty() {
            scene.push(DrawCall::new(Topology::LineStrip, flatten(&outline), WHITE));
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_has_one_more_vertex_than_segments() {
        let mut circle = Circle::default();
        circle.set_param("vertexCount", 5.0).unwrap();
        circle.set_param("r", 40.0).unwrap();
        let scene = circle.scene(Vec2::new(300.0, 300.0));
        assert_eq!(scene.calls.len(), 1);
        assert_eq!(scene.calls[0].vertex_count(), 6);
        assert_eq!(scene.calls[0].vertices[..2], [40.0, 0.0]);
    }

    #[test]
    fn zero_segments_draws_nothing() {
        let mut circle = Circle::default();
        circle.set_param("vertexCount", 0.0).unwrap();
        assert!(circle.scene(Vec2::new(300.0, 300.0)).calls.is_empty());
    }
}
