//! What to draw for one redraw, independent of the GL context.

use crate::geometry::{RotationFrame, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    LineStrip,
    Triangles,
    TriangleFan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexLayout {
    /// `x, y`
    Position,
    /// `x, y, r, g, b`
    PositionColor,
}

impl VertexLayout {
    pub fn stride(self) -> usize {
        match self {
            VertexLayout::Position => 2,
            VertexLayout::PositionColor => 5,
        }
    }
}

pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub topology: Topology,
    pub layout: VertexLayout,
    pub vertices: Vec<f32>,
    /// Ignored for [`VertexLayout::PositionColor`].
    pub color: Rgba,
    pub rotation: RotationFrame,
    pub translation: Vec2,
}

impl DrawCall {
    pub fn new(topology: Topology, vertices: Vec<f32>, color: Rgba) -> Self {
        Self {
            topology,
            layout: VertexLayout::Position,
            vertices,
            color,
            rotation: RotationFrame::IDENTITY,
            translation: Vec2::ZERO,
        }
    }

    pub fn with_layout(mut self, layout: VertexLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn rotated(mut self, rotation: RotationFrame) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn translated(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.stride()
    }
}

/// How surface units become clip space in the vertex shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipScale {
    /// Vertices are already in clip space.
    Clip,
    /// Vertices are in pixels; clip = position · factor / resolution.
    Pixels { factor: f64 },
}

impl ClipScale {
    pub fn uniform(self, surface: Vec2) -> [f32; 2] {
        match self {
            ClipScale::Clip => [1.0, 1.0],
            ClipScale::Pixels { factor } => {
                let s = factor / surface;
                [s.x as f32, s.y as f32]
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub clear_color: Rgba,
    pub clip_scale: ClipScale,
    pub calls: Vec<DrawCall>,
}

impl Scene {
    pub fn new(clear_color: Rgba, clip_scale: ClipScale) -> Self {
        Self {
            clear_color,
            clip_scale,
            calls: Vec::new(),
        }
    }

    pub fn push(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}
