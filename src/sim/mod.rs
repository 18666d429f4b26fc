//! Deterministic simulation module
//!
//! All force and geometry logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only (initial placement)
//! - Stable iteration order (insertion order of obstacles and particles)
//! - No rendering or platform dependencies beyond emitting draw requests

pub mod geometry;
pub mod obstacle;
pub mod particle;
pub mod state;
pub mod tick;

pub use geometry::{
    Orientation, Rect, orientation, ray_intersects_rectangle, rotated_rect_corners, segments_intersect,
};
pub use obstacle::{Obstacle, line_of_sight_blocked};
pub use particle::{PairInteraction, Particle};
pub use state::{FrameStats, Simulation};
pub use tick::tick;
