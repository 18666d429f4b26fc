//! Simulation state
//!
//! One explicit owner for the obstacle list, the particle list and the
//! configuration they were built from. Nothing here is global.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::obstacle::Obstacle;
use super::particle::Particle;
use crate::Point;
use crate::config::{OcclusionMode, SimConfig};
use crate::error::ConfigError;
use crate::renderer::{ObstacleDraw, ParticleDraw, Renderer};
use crate::tuning::Tuning;

/// Counters gathered while stepping one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrameStats {
    /// Index of the frame just completed (1-based)
    pub frame: u64,
    /// Ordered pairs whose line of sight was blocked
    pub occluded_pairs: usize,
    /// Ordered pairs that pushed each other
    pub repelling_pairs: usize,
    /// Particle/obstacle surface pushes
    pub obstacle_pushes: usize,
    /// Nearest outline points found within proximity range
    pub contacts: usize,
    /// Mean particle speed after integration
    pub mean_speed: f32,
}

/// Complete simulation state (deterministic for a given config)
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    /// Canvas extent used by the wall force
    pub(super) canvas: Point,
    /// Scanned in insertion order
    pub(super) obstacles: Vec<Obstacle>,
    pub(super) particles: Vec<Particle>,
    pub(super) occlusion: OcclusionMode,
    pub(super) show_contacts: bool,
    pub(super) tuning: Tuning,
    pub(super) seed: u64,
    /// Frames advanced so far
    pub(super) frame: u64,
    /// Outline points near particles during the last frame
    #[serde(skip)]
    pub(super) contacts: Vec<Point>,
}

impl Simulation {
    /// Validate the config, sample every obstacle outline once and scatter
    /// particles uniformly over the canvas.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let positions: Vec<Point> = (0..config.particle_count)
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..config.canvas_width),
                    rng.random_range(0.0..config.canvas_height),
                )
            })
            .collect();

        Self::build(config, positions)
    }

    /// Like [`Simulation::new`] but with particles at rest at the given
    /// positions; `particle_count` and `seed` are ignored for placement.
    pub fn with_positions(config: &SimConfig, positions: &[Point]) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::InvalidParticle { index });
        }
        Self::build(config, positions.to_vec())
    }

    fn build(config: &SimConfig, positions: Vec<Point>) -> Result<Self, ConfigError> {
        let tuning = config.tuning.clone();
        let obstacles: Vec<Obstacle> = config
            .obstacles
            .iter()
            .map(|spec| Obstacle::new(spec, tuning.samples_per_edge))
            .collect();

        let particles: Vec<Particle> = positions
            .into_iter()
            .map(|pos| Particle::new(pos, tuning.particle_radius, tuning.friction))
            .collect();

        log::info!(
            "Simulation ready: {} particles, {} obstacles ({} oscillating), canvas {}x{}, seed {}",
            particles.len(),
            obstacles.len(),
            obstacles.iter().filter(|o| o.oscillating).count(),
            config.canvas_width,
            config.canvas_height,
            config.seed
        );

        Ok(Self {
            canvas: Point::new(config.canvas_width, config.canvas_height),
            obstacles,
            particles,
            occlusion: config.occlusion,
            show_contacts: config.show_contacts,
            tuning,
            seed: config.seed,
            frame: 0,
            contacts: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Point {
        self.canvas
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn occlusion(&self) -> OcclusionMode {
        self.occlusion
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Outline points found near particles during the last frame
    pub fn contacts(&self) -> &[Point] {
        &self.contacts
    }

    /// Advance one frame of physics (obstacle poses, forces, integration)
    pub fn advance(&mut self) -> FrameStats {
        super::tick::tick(self)
    }

    /// Hand every obstacle and particle to the renderer
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_frame(self.canvas);

        for obstacle in &self.obstacles {
            renderer.draw_obstacle(&ObstacleDraw {
                center: obstacle.center(),
                width: obstacle.width,
                height: obstacle.height,
                rotation: obstacle.rotation,
            });
        }

        if self.show_contacts {
            for &contact in &self.contacts {
                renderer.draw_contact(contact, self.tuning.particle_radius);
            }
        }

        for particle in &self.particles {
            renderer.draw_particle(&ParticleDraw {
                center: particle.pos,
                radius: particle.radius,
            });
        }

        renderer.end_frame();
    }
}
