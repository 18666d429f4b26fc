//! Rotated, optionally oscillating rectangular obstacles
//!
//! An obstacle is anchored at (x, y): unrotated it spans [x, x+w] x [y, y+h]
//! and rotation turns it about its middle. Its outline is kept as a dense
//! ring of sample points, regenerated every time the pose changes.

use std::f32::consts::TAU;

use serde::Serialize;

use super::geometry::{Rect, ray_intersects_rectangle, rotated_rect_corners, segments_intersect};
use crate::config::{ObstacleSpec, OcclusionMode};
use crate::{Point, distance};

/// A rectangle that blocks line of sight and pushes particles off its surface
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation about the rectangle middle (radians)
    pub rotation: f32,
    pub oscillating: bool,
    /// Peak horizontal offset from `reference_x`
    pub amplitude: f32,
    /// Phase increment per frame (radians)
    pub frequency: f32,
    /// Oscillation clock, kept in [0, 2pi)
    phase: f32,
    /// x the oscillation swings around
    reference_x: f32,
    samples_per_edge: usize,
    /// Closed outline, edge after edge in corner order
    #[serde(skip)]
    points: Vec<Point>,
}

impl Obstacle {
    pub fn new(spec: &ObstacleSpec, samples_per_edge: usize) -> Self {
        let mut obstacle = Self {
            x: spec.x,
            y: spec.y,
            width: spec.width,
            height: spec.height,
            rotation: spec.rotation,
            oscillating: spec.oscillating,
            amplitude: spec.amplitude,
            frequency: spec.frequency,
            phase: 0.0,
            reference_x: spec.x,
            samples_per_edge,
            points: Vec::new(),
        };
        obstacle.refresh_boundary();
        obstacle
    }

    /// Middle of the rectangle (the rotation pivot)
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn reference_x(&self) -> f32 {
        self.reference_x
    }

    /// Cached outline samples
    pub fn boundary(&self) -> &[Point] {
        &self.points
    }

    /// Unrotated w x h box centered on (x, y), used for cheap occlusion
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.x - self.width / 2.0,
            self.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    /// Sample `samples_per_edge` evenly spaced points (ends included) along
    /// each rotated edge, concatenated in corner order.
    pub fn compute_boundary_points(&self, samples_per_edge: usize) -> Vec<Point> {
        let corners = rotated_rect_corners(self.center(), self.width, self.height, self.rotation);

        let denom = samples_per_edge.saturating_sub(1).max(1) as f32;
        let mut points = Vec::with_capacity(samples_per_edge * corners.len());
        for (i, &start) in corners.iter().enumerate() {
            let end = corners[(i + 1) % corners.len()];
            points.extend((0..samples_per_edge).map(|s| start.lerp(end, s as f32 / denom)));
        }
        points
    }

    /// Re-sample the outline after a pose change
    pub fn refresh_boundary(&mut self) {
        self.points = self.compute_boundary_points(self.samples_per_edge);
    }

    /// Move along the sine path and advance the clock. No-op when static.
    ///
    /// The clock wraps at 2pi so the increment never drops below f32
    /// resolution on long runs.
    pub fn update_oscillation(&mut self) {
        if !self.oscillating {
            return;
        }
        self.x = self.reference_x + self.phase.sin() * self.amplitude;
        self.refresh_boundary();
        self.phase = (self.phase + self.frequency).rem_euclid(TAU);
        log::trace!("obstacle oscillated to x={:.2} (phase {:.3})", self.x, self.phase);
    }

    /// Closest outline sample to `point`.
    ///
    /// An empty outline yields (inf, inf), which keeps every proximity check false.
    pub fn nearest_boundary_point(&self, point: Point) -> Point {
        let mut best = Point::splat(f32::INFINITY);
        let mut best_dist = f32::INFINITY;
        for &candidate in &self.points {
            let d = distance(candidate, point);
            if d < best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }

    /// True when the outline passes strictly closer than `range` to `point`
    pub fn is_in_range(&self, point: Point, range: f32) -> bool {
        distance(point, self.nearest_boundary_point(point)) < range
    }

    /// Exact occlusion test against the sampled (rotated) outline
    pub fn blocks_segment(&self, a: Point, b: Point) -> bool {
        let n = self.points.len();
        (0..n).any(|i| segments_intersect(a, b, self.points[i], self.points[(i + 1) % n]))
    }

    /// Whether this obstacle sits on the segment `a`-`b` under `mode`
    pub fn occludes(&self, a: Point, b: Point, mode: OcclusionMode) -> bool {
        match mode {
            OcclusionMode::BoundingRect => ray_intersects_rectangle(a, b, &self.bounding_rect()),
            OcclusionMode::SampledPolygon => self.blocks_segment(a, b),
        }
    }
}

/// Whether any obstacle blocks the line between `a` and `b`
pub fn line_of_sight_blocked(a: Point, b: Point, obstacles: &[Obstacle], mode: OcclusionMode) -> bool {
    obstacles.iter().any(|obstacle| obstacle.occludes(a, b, mode))
}
