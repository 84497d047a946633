//! The visualizations. Each one is a session object that owns its state and
//! turns it into a [`Scene`] on demand; the browser shell feeds it slider
//! values and pointer events and redraws after every change.

mod circle;
mod eigshow;
mod gauss_seidel;
mod plot;
mod translate;
mod triangle;
mod vector;

pub use circle::Circle;
pub use eigshow::Eigshow;
pub use gauss_seidel::GaussSeidelDemo;
pub use plot::SinePlot;
pub use translate::Translate;
pub use triangle::Triangle;
pub use vector::{Vector, VectorDrag};

use crate::config::{DemoKind, ParamSpec};
use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::scene::Scene;

pub trait Demo {
    fn kind(&self) -> DemoKind;

    fn params(&self) -> &'static [ParamSpec] {
        &[]
    }

    fn set_param(&mut self, name: &str, _value: f64) -> Result<()> {
        Err(unknown_param(self.kind(), name))
    }

    /// `surface` is the drawing buffer size in pixels.
    fn scene(&self, surface: Vec2) -> Scene;

    fn wants_pointer(&self) -> bool {
        false
    }

    fn pointer_down(&mut self) {}

    fn pointer_up(&mut self) {}

    /// `p` is surface-local (centred, y up). Returns whether to redraw.
    fn pointer_move(&mut self, _p: Vec2) -> bool {
        false
    }
}

pub fn create(kind: DemoKind) -> Box<dyn Demo> {
    match kind {
        DemoKind::Circle => Box::new(Circle::default()),
        DemoKind::Eigshow => Box::new(Eigshow::default()),
        DemoKind::GaussSeidel => Box::new(GaussSeidelDemo::default()),
        DemoKind::Plot => Box::new(SinePlot::default()),
        DemoKind::Translate => Box::new(Translate::default()),
        DemoKind::Triangle => Box::new(Triangle::per_vertex_color()),
        DemoKind::TriangleFlat => Box::new(Triangle::flat()),
        DemoKind::Vector => Box::new(Vector::default()),
        DemoKind::VectorDrag => Box::new(VectorDrag::default()),
    }
}

pub(crate) fn unknown_param(kind: DemoKind, name: &str) -> Error {
    Error::UnknownParam {
        demo: kind.name(),
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_demo_accepts_its_own_params() {
        for kind in DemoKind::ALL {
            let mut demo = create(kind);
            assert_eq!(demo.kind(), kind);
            for spec in demo.params() {
                demo.set_param(spec.id, spec.default)
                    .unwrap_or_else(|e| panic!("{kind}: {e}"));
            }
            assert!(demo.set_param("nope", 1.0).is_err(), "{kind}");
        }
    }

    #[test]
    fn every_scene_has_drawable_calls() {
        let surface = Vec2::new(640.0, 480.0);
        for kind in DemoKind::ALL {
            let scene = create(kind).scene(surface);
            assert!(!scene.calls.is_empty(), "{kind}");
            for call in &scene.calls {
                assert!(call.vertex_count() > 0, "{kind}");
                assert_eq!(call.vertices.len() % call.layout.stride(), 0, "{kind}");
                assert!(call.vertices.iter().all(|v| v.is_finite()), "{kind}");
            }
        }
    }
}
