//! Scene configuration
//!
//! Supplied once at startup and never reloaded. The defaults describe the demo
//! scene: two crossed bars and a tall bar sweeping left and right.

use std::f32::consts::FRAC_PI_4;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// How the pair force decides whether an obstacle is in the way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OcclusionMode {
    /// Unrotated w x h box around the obstacle anchor (cheap approximation)
    #[default]
    BoundingRect,
    /// The sampled, rotated outline
    SampledPolygon,
}

/// One obstacle as written in a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Radians
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub oscillating: bool,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

fn default_amplitude() -> f32 {
    DEFAULT_OSCILLATION_AMPLITUDE
}

fn default_frequency() -> f32 {
    DEFAULT_OSCILLATION_FREQUENCY
}

impl ObstacleSpec {
    /// A static, possibly rotated bar
    pub fn fixed(x: f32, y: f32, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation,
            oscillating: false,
            amplitude: DEFAULT_OSCILLATION_AMPLITUDE,
            frequency: DEFAULT_OSCILLATION_FREQUENCY,
        }
    }

    /// An unrotated bar sweeping horizontally around `x`
    pub fn oscillating(x: f32, y: f32, width: f32, height: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            oscillating: true,
            amplitude,
            frequency,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let reason = if ![self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite()) {
            Some("position and size must be finite")
        } else if self.width <= 0.0 || self.height <= 0.0 {
            Some("width and height must be positive")
        } else if !self.rotation.is_finite() {
            Some("rotation must be finite")
        } else if self.oscillating && !(self.amplitude.is_finite() && self.frequency.is_finite()) {
            Some("oscillation amplitude and frequency must be finite")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConfigError::InvalidObstacle {
                index,
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Complete startup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub particle_count: usize,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Seed for initial particle placement
    pub seed: u64,
    /// Scan order is insertion order
    pub obstacles: Vec<ObstacleSpec>,
    pub occlusion: OcclusionMode,
    /// Draw the nearest outline point of every obstacle a particle is near
    pub show_contacts: bool,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            seed: 0,
            obstacles: vec![
                ObstacleSpec::fixed(300.0, 160.0, 550.0, 20.0, -FRAC_PI_4),
                ObstacleSpec::fixed(300.0, 640.0, 550.0, 20.0, FRAC_PI_4),
                ObstacleSpec::oscillating(900.0, 0.0, 20.0, 1000.0, 100.0, 0.05),
            ],
            occlusion: OcclusionMode::default(),
            show_contacts: false,
            tuning: Tuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON scene
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded scene from {} ({} particles, {} obstacles)",
            path.as_ref().display(),
            config.particle_count,
            config.obstacles.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas_ok = [self.canvas_width, self.canvas_height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !canvas_ok {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        for (index, spec) in self.obstacles.iter().enumerate() {
            spec.validate(index)?;
        }

        self.tuning.validate()
    }
}
