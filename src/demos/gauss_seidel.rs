use glam::DVec2;

use crate::config::{DemoKind, ParamSpec};
use crate::error::Result;
use crate::gauss_seidel::{mat2_from_rows, plot_points};
use crate::geometry::{flatten, point_marker, Vec2};
use crate::plot::Limits;
use crate::scene::{ClipScale, DrawCall, Scene, Topology, BLACK, BLUE, RED, WHITE};

use super::{unknown_param, Demo};

pub const ITERATIONS: usize = 10;

const MARKER_RADIUS: f64 = 8.0;
const MARKER_SEGMENTS: usize = 8;
const X_PAD: f64 = 0.07;
const Y_PAD: f64 = 0.1;

const PARAMS: &[ParamSpec] = &[ParamSpec::new("iter", "iter-value", 0.0)];

/// Iterates of Gauss-Seidel on a fixed system, revealed one slider step at a
/// time. The exact solution is drawn in blue, the estimates in red.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussSeidelDemo {
    points: Vec<Vec2>,
    shown: usize,
}

impl Default for GaussSeidelDemo {
    fn default() -> Self {
        let a = mat2_from_rows([[2.0, 1.0], [1.0, 3.0]]);
        let b = DVec2::new(1.0, 2.0);
        let x0 = DVec2::new(0.5, 0.5);
        Self {
            points: plot_points(a, b, x0, ITERATIONS),
            shown: 0,
        }
    }
}

impl GaussSeidelDemo {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Solution, initial guess and the first `shown` iterates.
    pub fn visible(&self) -> &[Vec2] {
        &self.points[..(self.shown + 2).min(self.points.len())]
    }
}

impl Demo for GaussSeidelDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::GaussSeidel
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "iter" => self.shown = value.clamp(0.0, ITERATIONS as f64) as usize,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }

    fn scene(&self, surface: Vec2) -> Scene {
        let mut scene = Scene::new(WHITE, ClipScale::Clip);
        // Limits cover every iterate so the view does not jump while sliding.
        let Some(limits) = Limits::enclosing(&self.points) else {
            return scene;
        };
        let limits = limits.padded(X_PAD, Y_PAD);
        let visible = self.visible();

        for pair in visible.windows(2).skip(1) {
            let segment = [limits.to_clip(pair[0]), limits.to_clip(pair[1])];
            scene.push(DrawCall::new(Topology::LineStrip, flatten(&segment), BLACK));
        }
        for (i, p) in visible.iter().enumerate() {
            let color = if i == 0 { BLUE } else { RED };
            let marker = point_marker(limits.to_clip(*p), MARKER_RADIUS, surface, MARKER_SEGMENTS);
            scene.push(DrawCall::new(Topology::TriangleFan, flatten(&marker), color));
        }
        scene
    }
}
