//! Canvas 2D renderer (browser only)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::vertex::colors;
use super::{ObstacleDraw, ParticleDraw, Renderer};
use crate::Point;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    background_style: String,
    obstacle_style: String,
    particle_style: String,
    contact_style: String,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            background_style: colors::css(colors::BACKGROUND),
            obstacle_style: colors::css(colors::OBSTACLE),
            particle_style: colors::css(colors::PARTICLE),
            contact_style: colors::css(colors::CONTACT),
        }
    }

    fn fill_circle(&self, center: Point, radius: f32, style: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(style);
        self.ctx.fill();
    }
}

impl Renderer for CanvasRenderer {
    fn begin_frame(&mut self, canvas: Point) {
        self.ctx.set_fill_style_str(&self.background_style);
        self.ctx.fill_rect(0.0, 0.0, canvas.x as f64, canvas.y as f64);
    }

    fn draw_obstacle(&mut self, obstacle: &ObstacleDraw) {
        let ctx = &self.ctx;
        ctx.save();
        let placed = ctx
            .translate(obstacle.center.x as f64, obstacle.center.y as f64)
            .and_then(|_| ctx.rotate(obstacle.rotation as f64));
        if let Err(e) = placed {
            log::warn!("Canvas transform failed: {:?}", e);
        } else {
            ctx.set_fill_style_str(&self.obstacle_style);
            ctx.fill_rect(
                -(obstacle.width as f64) / 2.0,
                -(obstacle.height as f64) / 2.0,
                obstacle.width as f64,
                obstacle.height as f64,
            );
        }
        ctx.restore();
    }

    fn draw_particle(&mut self, particle: &ParticleDraw) {
        self.fill_circle(particle.center, particle.radius, &self.particle_style);
    }

    fn draw_contact(&mut self, point: Point, radius: f32) {
        self.fill_circle(point, radius, &self.contact_style);
    }
}
