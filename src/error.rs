//! Configuration errors
//!
//! Everything is checked once at startup; the frame loop itself cannot fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Canvas dimensions must be finite and positive
    #[error("Invalid canvas {width}x{height}: dimensions must be finite and positive")]
    InvalidCanvas { width: f32, height: f32 },

    /// An obstacle spec failed validation
    #[error("Obstacle #{index} is invalid: {reason}")]
    InvalidObstacle { index: usize, reason: String },

    /// An explicit particle position is not finite
    #[error("Particle #{index} has a non-finite position")]
    InvalidParticle { index: usize },

    /// A tuning constant is out of range
    #[error("Tuning field `{field}` is invalid: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    /// Config file is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
