//! Triangle lists for the two primitives the scene draws

use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::Point;
use crate::sim::geometry::rotated_rect_corners;

/// Filled circle as a fan of `segments` triangles
pub fn circle(center: Point, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let rim = |i: u32| center + Point::from_angle(i as f32 / segments as f32 * TAU) * radius;

    (0..segments)
        .flat_map(|i| [center, rim(i), rim(i + 1)])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Filled rotated rectangle (two triangles)
pub fn rotated_rect(center: Point, width: f32, height: f32, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let [tl, tr, br, bl] = rotated_rect_corners(center, width, height, rotation);

    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(bl.x, bl.y, color),
    ]
}
