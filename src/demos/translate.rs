use crate::config::{DemoKind, ParamSpec};
use crate::error::Result;
use crate::geometry::{build_arrow_glyph, ArrowGlyph, ArrowStyle, Vec2};
use crate::scene::{ClipScale, DrawCall, Scene, Topology, BLACK, WHITE};

use super::{unknown_param, Demo};

const HEAD_WIDTH: f64 = 40.0;
const SHAFT_WIDTH: f64 = 10.0;
const SHAFT_LENGTH: f64 = 200.0;
const HEAD_RECESS: f64 = 10.0;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::new("x", "x-value", 0.0),
    ParamSpec::new("y", "y-value", 0.0),
];

/// A fixed arrow with its head centred on the origin, moved around by two
/// sliders.
#[derive(Clone, Debug, PartialEq)]
pub struct Translate {
    pub translation: Vec2,
    glyph: ArrowGlyph,
}

impl Default for Translate {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            glyph: pointer_glyph(),
        }
    }
}

/// Shaft runs from `-SHAFT_LENGTH` up to the back of the recessed head.
fn pointer_glyph() -> ArrowGlyph {
    let mut style = ArrowStyle {
        shaft_width: SHAFT_WIDTH,
        head_width: HEAD_WIDTH,
        head_recess: HEAD_RECESS,
        shaft_offset: 0.0,
    };
    style.shaft_offset = style.half_head_height() - HEAD_RECESS;
    build_arrow_glyph(SHAFT_LENGTH, &style).translated(Vec2::new(0.0, -SHAFT_LENGTH))
}

impl Demo for Translate {
    fn kind(&self) -> DemoKind {
        DemoKind::Translate
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "x" => self.translation.x = value,
            "y" => self.translation.y = value,
            _ => return Err(unknown_param(self.kind(), name)),
        }
        Ok(())
    }

    fn scene(&self, _surface: Vec2) -> Scene {
        let mut scene = Scene::new(BLACK, ClipScale::Pixels { factor: 1.0 });
        scene.push(
            DrawCall::new(Topology::Triangles, self.glyph.to_buffer(), WHITE)
                .translated(self.translation),
        );
        scene
    }
}
