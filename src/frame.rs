//! Host-facing frame loop
//!
//! The host owns scheduling (a display refresh callback, a fixed-count loop,
//! a test). Each call to [`FrameLoop::advance`] is exactly one frame:
//! physics step, then every draw request handed to the renderer.

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::renderer::Renderer;
use crate::sim::{FrameStats, Simulation};

pub struct FrameLoop<R: Renderer> {
    sim: Simulation,
    renderer: R,
    last_stats: FrameStats,
}

impl<R: Renderer> FrameLoop<R> {
    pub fn new(sim: Simulation, renderer: R) -> Self {
        Self {
            sim,
            renderer,
            last_stats: FrameStats::default(),
        }
    }

    /// Build the simulation from config and pair it with `renderer`
    pub fn from_config(config: &SimConfig, renderer: R) -> Result<Self, ConfigError> {
        Ok(Self::new(Simulation::new(config)?, renderer))
    }

    /// Run one full frame
    pub fn advance(&mut self) -> FrameStats {
        self.last_stats = self.sim.advance();
        self.sim.draw(&mut self.renderer);
        self.last_stats
    }

    /// Run `frames` frames back to back, returning the last frame's stats
    pub fn run(&mut self, frames: u64) -> FrameStats {
        for _ in 0..frames {
            self.advance();
        }
        self.last_stats
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Give back the owned parts
    pub fn into_parts(self) -> (Simulation, R) {
        (self.sim, self.renderer)
    }
}
