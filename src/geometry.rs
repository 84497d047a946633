//! 2D glyph construction and hit-testing shared by the arrow demos.
//!
//! Glyphs are built in their own local frame (tip along +y, base at the
//! origin) and oriented at draw time by a [`RotationFrame`], so the vertex
//! data only changes when a vector's length changes.

use std::f64::consts::{FRAC_PI_6, TAU};

pub type Vec2 = glam::DVec2;

/// Unit direction `(cos θ, sin θ)` used to orient glyph-local coordinates.
///
/// The transform is `(x·sin θ + y·cos θ, y·sin θ − x·cos θ)`, which takes the
/// local +y axis onto the frame's direction. The vertex shader applies the
/// same expression to `u_rotation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationFrame {
    pub cos: f64,
    pub sin: f64,
}

impl RotationFrame {
    /// Frame pointing along +y; leaves local coordinates untouched.
    pub const IDENTITY: Self = Self { cos: 0.0, sin: 1.0 };

    /// `None` when `source` has zero or non-finite length.
    pub fn try_from_source(source: Vec2) -> Option<Self> {
        source.try_normalize().map(|dir| Self {
            cos: dir.x,
            sin: dir.y,
        })
    }

    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.sin + p.y * self.cos,
            p.y * self.sin - p.x * self.cos,
        )
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.cos, self.sin)
    }

    pub fn to_uniform(self) -> [f32; 2] {
        [self.cos as f32, self.sin as f32]
    }
}

impl Default for RotationFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Direction frame of `source`, falling back to [`RotationFrame::IDENTITY`]
/// for a zero-length vector instead of propagating NaN into the draw.
pub fn build_rotation_frame(source: Vec2) -> RotationFrame {
    RotationFrame::try_from_source(source).unwrap_or(RotationFrame::IDENTITY)
}

/// Visual constants of an arrow glyph, in surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    pub shaft_width: f64,
    pub head_width: f64,
    /// How far the back of the head is pulled in towards the tip.
    pub head_recess: f64,
    /// Amount cut from the top of the shaft.
    pub shaft_offset: f64,
}

impl ArrowStyle {
    pub const THIN: Self = Self {
        shaft_width: 4.0,
        head_width: 15.0,
        head_recess: 5.0,
        shaft_offset: 0.0,
    };

    pub const BOLD: Self = Self {
        shaft_width: 10.0,
        head_width: 30.0,
        head_recess: 5.0,
        shaft_offset: 0.0,
    };

    /// Half of the head's height: the head is an equilateral triangle of side
    /// `head_width` centred on the tip position.
    pub fn half_head_height(&self) -> f64 {
        self.head_width * FRAC_PI_6.cos() / 2.0
    }
}

/// Triangle list for one arrow: two head triangles, then the shaft quad.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowGlyph {
    pub vertices: [Vec2; 12],
}

impl ArrowGlyph {
    pub const VERTEX_COUNT: usize = 12;

    pub fn head(&self) -> &[Vec2] {
        &self.vertices[..6]
    }

    pub fn shaft(&self) -> &[Vec2] {
        &self.vertices[6..]
    }

    pub fn translated(mut self, offset: Vec2) -> Self {
        for v in &mut self.vertices {
            *v += offset;
        }
        self
    }

    pub fn to_buffer(&self) -> Vec<f32> {
        flatten(&self.vertices)
    }
}

pub fn build_arrow_glyph(length: f64, style: &ArrowStyle) -> ArrowGlyph {
    let half_head = style.half_head_height();
    let half_shaft = style.shaft_width / 2.0;
    let top = length - style.shaft_offset;

    let apex = Vec2::new(0.0, half_head + length);
    let left = Vec2::new(-style.head_width / 2.0, -half_head + length);
    let right = Vec2::new(style.head_width / 2.0, -half_head + length);
    let recess = Vec2::new(0.0, -half_head + style.head_recess + length);

    ArrowGlyph {
        vertices: [
            apex,
            left,
            recess,
            apex,
            right,
            recess,
            Vec2::new(-half_shaft, 0.0),
            Vec2::new(half_shaft, 0.0),
            Vec2::new(half_shaft, top),
            Vec2::new(-half_shaft, 0.0),
            Vec2::new(half_shaft, top),
            Vec2::new(-half_shaft, top),
        ],
    }
}

/// Grab test for a vector drawn from the origin.
///
/// The perpendicular check rejects `reference` from `query`, not the other
/// way round, so the tolerance is measured in units of `reference`.
pub fn is_near_vector(query: Vec2, reference: Vec2, max_magnitude: f64, perp_tolerance: f64) -> bool {
    query.dot(reference) > 0.0
        && query.length() <= max_magnitude
        && reference.reject_from(query).length() <= perp_tolerance
}

/// Closed outline with `segments` edges: the first point is repeated at the end.
pub fn polygon_outline(radius: f64, segments: usize) -> Vec<Vec2> {
    if segments == 0 {
        return Vec::new();
    }
    let mut points: Vec<Vec2> = (0..segments)
        .map(|i| Vec2::from_angle(TAU * i as f64 / segments as f64) * radius)
        .collect();
    points.push(points[0]);
    points
}

/// Small filled disc around `center` (clip space) whose radius is given in
/// pixels of a surface of size `surface`. Draw as a triangle fan.
pub fn point_marker(center: Vec2, radius_px: f64, surface: Vec2, segments: usize) -> Vec<Vec2> {
    (0..segments)
        .map(|i| center + Vec2::from_angle(TAU * i as f64 / segments as f64) * radius_px / surface)
        .collect()
}

pub fn flatten(points: &[Vec2]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_frame_is_a_no_op() {
        let p = Vec2::new(3.0, -7.5);
        assert_eq!(RotationFrame::IDENTITY.apply(p), p);
    }

    #[test]
    fn zero_vector_gets_identity_frame() {
        assert_eq!(build_rotation_frame(Vec2::ZERO), RotationFrame::IDENTITY);
        assert!(RotationFrame::try_from_source(Vec2::ZERO).is_none());
    }

    #[test]
    fn zero_length_glyph_is_finite() {
        let glyph = build_arrow_glyph(0.0, &ArrowStyle::THIN);
        assert!(glyph.vertices.iter().all(|v| v.is_finite()));
        assert!(glyph.shaft().iter().all(|v| v.y == 0.0));
    }

    #[test]
    fn outline_is_closed() {
        let pts = polygon_outline(50.0, 6);
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[0], pts[6]);
        assert!(pts.iter().all(|p| (p.length() - 50.0).abs() < 1e-9));
        assert!(polygon_outline(50.0, 0).is_empty());
    }

    #[test]
    fn marker_radius_is_scaled_per_axis() {
        let surface = Vec2::new(800.0, 400.0);
        let pts = point_marker(Vec2::ZERO, 8.0, surface, 8);
        assert_eq!(pts.len(), 8);
        assert!((pts[0].x - 0.01).abs() < 1e-12);
        assert!((pts[2].y - 0.02).abs() < 1e-12);
    }
}
