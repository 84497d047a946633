use std::f64::consts::TAU;

use crate::config::DemoKind;
use crate::geometry::{flatten, Vec2};
use crate::plot::{linspace, Limits};
use crate::scene::{ClipScale, DrawCall, Scene, Topology, BLACK, WHITE};

use super::Demo;

pub const SAMPLES: usize = 100;

/// `sin(x)` over two periods either side of zero.
#[derive(Clone, Debug, PartialEq)]
pub struct SinePlot {
    vertices: Vec<f32>,
}

impl Default for SinePlot {
    fn default() -> Self {
        let limits = Limits::new((-TAU, TAU), (-2.0, 2.0));
        let curve: Vec<Vec2> = linspace(-TAU, TAU, SAMPLES)
            .into_iter()
            .map(|x| limits.to_clip(Vec2::new(x, x.sin())))
            .collect();
        Self {
            vertices: flatten(&curve),
        }
    }
}

impl Demo for SinePlot {
    fn kind(&self) -> DemoKind {
        DemoKind::Plot
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let mut scene = Scene::new(BLACK, ClipScale::Clip);
        scene.push(DrawCall::new(Topology::LineStrip, self.vertices.clone(), WHITE));
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_spans_the_width_at_half_height() {
        let scene = SinePlot::default().scene(Vec2::new(800.0, 600.0));
        let call = &scene.calls[0];
        assert_eq!(call.vertex_count(), SAMPLES);
        let xs: Vec<f32> = call.vertices.iter().step_by(2).copied().collect();
        let ys: Vec<f32> = call.vertices.iter().skip(1).step_by(2).copied().collect();
        assert!((xs[0] + 1.0).abs() < 1e-6 && (xs[SAMPLES - 1] - 1.0).abs() < 1e-6);
        assert!(ys.iter().all(|y| y.abs() <= 0.5 + 1e-6));
    }
}
