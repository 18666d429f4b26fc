//! Repulse - particles that push each other apart unless something is in the way
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, obstacles, particles, frame step)
//! - `renderer`: Draw-request boundary plus mesh and canvas backends
//! - `frame`: Host-facing frame loop
//! - `config`: Startup configuration and validation
//! - `tuning`: Data-driven force constants

pub mod config;
pub mod error;
pub mod frame;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use config::{ObstacleSpec, OcclusionMode, SimConfig};
pub use error::ConfigError;
pub use frame::FrameLoop;
pub use tuning::Tuning;

/// Positions, velocities and forces all live in canvas pixel space
pub type Point = glam::Vec2;

/// Simulation constants (defaults for [`Tuning`] and [`SimConfig`])
pub mod consts {
    /// Boundary sample density per obstacle edge. Tunable, not a law:
    /// nearest-point queries are an approximation at any density.
    pub const SAMPLES_PER_EDGE: usize = 500;
    /// Upper bound accepted from a scene file
    pub const MAX_SAMPLES_PER_EDGE: usize = 100_000;

    /// Pairwise repulsion cutoff (pixels)
    pub const REPULSION_RANGE: f32 = 60.0;
    /// Pairwise repulsion scale: magnitude = strength / distance
    pub const REPULSION_STRENGTH: f32 = 20.0;

    /// Distance from a canvas edge at which the wall force kicks in
    pub const BOUNDARY_THRESHOLD: f32 = 30.0;
    /// Exponent scale of the wall force: 2^((threshold - d) * growth)
    pub const BOUNDARY_GROWTH: f32 = 0.01;

    /// Obstacle proximity check radius
    pub const PROXIMITY_RANGE: f32 = 60.0;
    /// Penetration force multiplier (same feel as the walls)
    pub const COLLISION_MULTIPLIER: f32 = 3.0;
    /// Extra clearance kept between particle edge and obstacle surface
    pub const COLLISION_SKIN: f32 = 2.0;

    /// Particle defaults
    pub const PARTICLE_RADIUS: f32 = 5.0;
    pub const PARTICLE_FRICTION: f32 = 0.92;

    /// Default scene
    pub const DEFAULT_PARTICLE_COUNT: usize = 200;
    pub const DEFAULT_CANVAS_WIDTH: f32 = 1280.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 800.0;
    pub const DEFAULT_OSCILLATION_AMPLITUDE: f32 = 50.0;
    pub const DEFAULT_OSCILLATION_FREQUENCY: f32 = 0.01;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (a - b).length()
}

/// Vector of length `magnitude` pointing along `offset`.
///
/// A zero offset points along +x.
#[inline]
pub fn polar_force(offset: Point, magnitude: f32) -> Point {
    Point::from_angle(offset.y.atan2(offset.x)) * magnitude
}
