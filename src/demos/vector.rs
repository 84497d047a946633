use crate::config::{DemoKind, ParamSpec};
use crate::error::Result;
use crate::geometry::{build_arrow_glyph, build_rotation_frame, ArrowStyle, Vec2};
use crate::interaction::{GrabRule, InteractionState, PointerMove};
use crate::scene::{ClipScale, DrawCall, Rgba, Scene, Topology, BLACK, BLUE, WHITE};

use super::{unknown_param, Demo};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("x1", "x1-value", 0.0),
    ParamSpec::new("y1", "y1-value", 0.0),
    ParamSpec::new("x2", "x2-value", 0.0),
    ParamSpec::new("y2", "y2-value", 0.0),
];

fn arrow(from: Vec2, to: Vec2, style: &ArrowStyle, color: Rgba) -> DrawCall {
    let d = to - from;
    let glyph = build_arrow_glyph(d.length(), style);
    DrawCall::new(Topology::Triangles, glyph.to_buffer(), color)
        .rotated(build_rotation_frame(d))
        .translated(from)
}

/// Arrow between two slider-controlled points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    pub from: Vec2,
    pub to: Vec2,
}

impl Demo for Vector {
    fn kind(&self) -> DemoKind {
        DemoKind::Vector
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "x1" => self.from.x = value,
            "y1" => self.from.y = value,
            "x2" => self.to.x = value,
            "y2" => self.to.y = value,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let mut scene = Scene::new(BLACK, ClipScale::Pixels { factor: 1.0 });
        scene.push(arrow(self.from, self.to, &ArrowStyle::BOLD, WHITE));
        scene
    }
}

const HOVER_BLUE: Rgba = [0.0, 0.0, 1.0, 0.5];

/// Arrow from the centre whose tip follows the pointer once grabbed.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorDrag {
    tip: Vec2,
    interaction: InteractionState,
}

impl Default for VectorDrag {
    fn default() -> Self {
        Self {
            tip: Vec2::new(150.0, 100.0),
            interaction: InteractionState::default(),
        }
    }
}

impl VectorDrag {
    const STYLE: ArrowStyle = ArrowStyle::BOLD;

    pub fn tip(&self) -> Vec2 {
        self.tip
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// The tolerance is in pixels because the reference is the tip itself.
    fn grab_rule(&self) -> GrabRule {
        GrabRule {
            max_magnitude: self.tip.length() + Self::STYLE.half_head_height(),
            perp_tolerance: Self::STYLE.head_width / 2.0,
        }
    }
}

impl Demo for VectorDrag {
    fn kind(&self) -> DemoKind {
        DemoKind::VectorDrag
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let mut scene = Scene::new(WHITE, ClipScale::Pixels { factor: 2.0 });
        let held = self.interaction.is_hovering() || self.interaction.is_dragging();
        let color = if held { HOVER_BLUE } else { BLUE };
        scene.push(arrow(Vec2::ZERO, self.tip, &Self::STYLE, color));
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
        let rule = self.grab_rule();
        match self.interaction.pointer_move(p, self.tip, rule) {
            // Too short to grab again once released.
            PointerMove::Drag(q) if q.length() >= Self::STYLE.head_width => self.tip = q,
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RotationFrame;

    #[test]
    fn arrow_is_anchored_at_the_start_point() {
        let mut demo = Vector::default();
        for (name, v) in [("x1", -50.0), ("y1", 20.0), ("x2", 10.0), ("y2", 100.0)] {
            demo.set_param(name, v).unwrap();
        }
        let call = &demo.scene(Vec2::new(500.0, 500.0)).calls[0];
        assert_eq!(call.translation, Vec2::new(-50.0, 20.0));
        let frame: RotationFrame = call.rotation;
        assert!((frame.as_vec2() - Vec2::new(0.6, 0.8)).length() < 1e-12);
        // Tip of the shaft, rotated into place, lands on the end point.
        let top = Vec2::new(0.0, call.vertices[17] as f64);
        let end = frame.apply(top) + call.translation;
        assert!((end - Vec2::new(10.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn dragging_moves_the_tip() {
        let mut demo = VectorDrag::default();
        demo.pointer_move(Vec2::new(75.0, 50.0));
        assert!(demo.interaction().is_hovering());
        demo.pointer_down();
        demo.pointer_move(Vec2::new(-120.0, 40.0));
        assert_eq!(demo.tip(), Vec2::new(-120.0, 40.0));
        assert_eq!(demo.scene(Vec2::new(400.0, 400.0)).calls[0].color, HOVER_BLUE);
        // Too close to the centre: the tip stays put.
        demo.pointer_move(Vec2::new(1.0, 1.0));
        assert_eq!(demo.tip(), Vec2::new(-120.0, 40.0));
        demo.pointer_up();
        assert!(!demo.interaction().is_dragging());
    }

    #[test]
    fn press_elsewhere_leaves_tip() {
        let mut demo = VectorDrag::default();
        demo.pointer_move(Vec2::new(-100.0, -100.0));
        demo.pointer_down();
        demo.pointer_move(Vec2::new(75.0, 50.0));
        demo.pointer_move(Vec2::new(0.0, 200.0));
        assert_eq!(demo.tip(), Vec2::new(150.0, 100.0));
    }
}
