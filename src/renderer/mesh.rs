//! Triangle-list renderer
//!
//! Tessellates each frame into a flat vertex list a host can upload to any
//! GPU API as-is.

use super::shapes::{circle, rotated_rect};
use super::vertex::{Vertex, colors};
use super::{ObstacleDraw, ParticleDraw, Renderer};
use crate::Point;

/// Circle segments for particles and contact markers
const CIRCLE_SEGMENTS: u32 = 16;

#[derive(Debug, Default)]
pub struct MeshRenderer {
    vertices: Vec<Vertex>,
    canvas: Point,
    obstacles: usize,
    particles: usize,
    contacts: usize,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles of the last frame (obstacles, then contacts, then particles)
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Canvas extent of the last frame
    pub fn canvas(&self) -> Point {
        self.canvas
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles
    }

    pub fn particle_count(&self) -> usize {
        self.particles
    }

    pub fn contact_count(&self) -> usize {
        self.contacts
    }
}

impl Renderer for MeshRenderer {
    fn begin_frame(&mut self, canvas: Point) {
        self.vertices.clear();
        self.canvas = canvas;
        self.obstacles = 0;
        self.particles = 0;
        self.contacts = 0;
    }

    fn draw_obstacle(&mut self, obstacle: &ObstacleDraw) {
        self.vertices.extend(rotated_rect(
            obstacle.center,
            obstacle.width,
            obstacle.height,
            obstacle.rotation,
            colors::OBSTACLE,
        ));
        self.obstacles += 1;
    }

    fn draw_particle(&mut self, particle: &ParticleDraw) {
        self.vertices.extend(circle(
            particle.center,
            particle.radius,
            colors::PARTICLE,
            CIRCLE_SEGMENTS,
        ));
        self.particles += 1;
    }

    fn draw_contact(&mut self, point: Point, radius: f32) {
        self.vertices
            .extend(circle(point, radius, colors::CONTACT, CIRCLE_SEGMENTS));
        self.contacts += 1;
    }
}
