//! Rendering boundary
//!
//! The simulation only emits draw requests. Backends decide what a filled
//! rotated rectangle or a filled circle looks like on their surface.

pub mod mesh;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use mesh::MeshRenderer;
pub use vertex::Vertex;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::Point;

/// A filled rectangle of `width` x `height` centered on `center`, turned by `rotation`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleDraw {
    pub center: Point,
    pub width: f32,
    pub height: f32,
    /// Radians
    pub rotation: f32,
}

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDraw {
    pub center: Point,
    pub radius: f32,
}

/// Consumer of one frame's worth of draw requests
pub trait Renderer {
    /// Called before the first request of a frame
    fn begin_frame(&mut self, _canvas: Point) {}

    fn draw_obstacle(&mut self, obstacle: &ObstacleDraw);

    fn draw_particle(&mut self, particle: &ParticleDraw);

    /// Debug marker at an obstacle outline point a particle is close to
    fn draw_contact(&mut self, _point: Point, _radius: f32) {}

    /// Called after the last request of a frame
    fn end_frame(&mut self) {}
}
