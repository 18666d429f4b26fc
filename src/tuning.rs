//! Data-driven force constants
//!
//! Every number the force model uses lives here so a scene file can retune the
//! feel without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Outline samples per obstacle edge (density of nearest-point queries)
    pub samples_per_edge: usize,

    // === Pairwise repulsion ===
    pub repulsion_range: f32,
    pub repulsion_strength: f32,

    // === Canvas walls ===
    pub boundary_threshold: f32,
    pub boundary_growth: f32,

    // === Obstacle surfaces ===
    /// Only obstacles whose outline is this close are checked for contact
    pub proximity_range: f32,
    pub collision_multiplier: f32,
    pub collision_skin: f32,

    // === Particles ===
    pub particle_radius: f32,
    /// Velocity damping applied every frame
    pub friction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            samples_per_edge: SAMPLES_PER_EDGE,

            repulsion_range: REPULSION_RANGE,
            repulsion_strength: REPULSION_STRENGTH,

            boundary_threshold: BOUNDARY_THRESHOLD,
            boundary_growth: BOUNDARY_GROWTH,

            proximity_range: PROXIMITY_RANGE,
            collision_multiplier: COLLISION_MULTIPLIER,
            collision_skin: COLLISION_SKIN,

            particle_radius: PARTICLE_RADIUS,
            friction: PARTICLE_FRICTION,
        }
    }
}

impl Tuning {
    /// Reject values that would make the per-frame math meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_SAMPLES_PER_EDGE).contains(&self.samples_per_edge) {
            return Err(ConfigError::InvalidTuning {
                field: "samples_per_edge",
                reason: format!("must be between 2 and {MAX_SAMPLES_PER_EDGE}"),
            });
        }

        let positive = [
            ("repulsion_range", self.repulsion_range),
            ("boundary_threshold", self.boundary_threshold),
            ("proximity_range", self.proximity_range),
            ("particle_radius", self.particle_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be finite and positive"));
            }
        }

        let finite = [
            ("repulsion_strength", self.repulsion_strength),
            ("boundary_growth", self.boundary_growth),
            ("collision_multiplier", self.collision_multiplier),
            ("collision_skin", self.collision_skin),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(invalid("friction", "must be in (0, 1)"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidTuning {
        field,
        reason: reason.to_string(),
    }
}
