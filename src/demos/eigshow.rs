use glam::DMat2;

use crate::config::{DemoKind, ParamSpec};
use crate::error::Result;
use crate::gauss_seidel::mat2_from_rows;
use crate::geometry::{build_arrow_glyph, build_rotation_frame, ArrowStyle, Vec2};
use crate::interaction::{GrabRule, InteractionState, PointerMove};
use crate::scene::{ClipScale, DrawCall, Rgba, Scene, Topology, BLUE, RED, WHITE};

use super::{unknown_param, Demo};

/// Pixels per unit of vector length.
pub const SCALE: f64 = 100.0;

const GRAB: GrabRule = GrabRule {
    max_magnitude: SCALE,
    perp_tolerance: 0.1,
};

const HOVER_BLUE: Rgba = [0.0, 0.0, 1.0, 0.5];

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("a11", "a11-value", 2.0),
    ParamSpec::new("a12", "a12-value", 2.0),
    ParamSpec::new("a21", "a21-value", 2.0),
    ParamSpec::new("a22", "a22-value", 2.0),
];

/// A unit vector `v` the user rotates by dragging, drawn next to `A·v`.
/// Eigenvectors are the directions where the two arrows line up.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigshow {
    v: Vec2,
    rows: [[f64; 2]; 2],
    interaction: InteractionState,
}

impl Default for Eigshow {
    fn default() -> Self {
        Self {
            v: Vec2::Y,
            rows: [[2.0, 2.0], [2.0, 2.0]],
            interaction: InteractionState::default(),
        }
    }
}

impl Eigshow {
    pub fn vector(&self) -> Vec2 {
        self.v
    }

    pub fn matrix(&self) -> DMat2 {
        mat2_from_rows(self.rows)
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    fn arrow(&self, m: DMat2, color: Rgba) -> DrawCall {
        let mv = m * self.v;
        let glyph = build_arrow_glyph(SCALE * mv.length(), &ArrowStyle::THIN);
        DrawCall::new(Topology::Triangles, glyph.to_buffer(), color)
            .rotated(build_rotation_frame(mv))
    }
}

impl Demo for Eigshow {
    fn kind(&self) -> DemoKind {
        DemoKind::Eigshow
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        let (r, c) = match name {
            "a11" => (0, 0),
            "a12" => (0, 1),
            "a21" => (1, 0),
            "a22" => (1, 1),
            _ => return Err(unknown_param(self.kind(), name)),
        };
        self.rows[r][c] = value;
        Ok(())
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let mut scene = Scene::new(WHITE, ClipScale::Pixels { factor: 2.0 });
        scene.push(self.arrow(self.matrix(), RED));
        let held = self.interaction.is_hovering() || self.interaction.is_dragging();
        let color = if held { HOVER_BLUE } else { BLUE };
        scene.push(self.arrow(DMat2::IDENTITY, color));
        scene
    }

    fn wants_pointer(&self) -> bool {
        true
    }

    fn pointer_down(&mut self) {
        self.interaction.pointer_down();
    }

    fn pointer_up(&mut self) {
        self.interaction.pointer_up();
    }

    fn pointer_move(&mut self, p: Vec2) -> bool {
        if let PointerMove::Drag(q) = self.interaction.pointer_move(p, self.v, GRAB) {
            // Only the direction is kept; a pointer exactly on the centre has none.
            if let Some(dir) = q.try_normalize() {
                self.v = dir;
            }
        }
        true
    }
}
