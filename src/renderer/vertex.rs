//! Vertex types for 2D meshes

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Reinterpret a vertex slice as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for scene elements
pub mod colors {
    pub const OBSTACLE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const PARTICLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CONTACT: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// CSS color string for a canvas fill style
    pub fn css(color: [f32; 4]) -> String {
        let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }
}
