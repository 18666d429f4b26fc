//! Particles and the forces acting on them
//!
//! Forces are accumulated into `acc` during a frame and consumed by
//! [`Particle::integrate`], which clears the buffer again.

use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, line_of_sight_blocked};
use crate::config::OcclusionMode;
use crate::tuning::Tuning;
use crate::{Point, distance, polar_force};

/// Outcome of looking at one other particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairInteraction {
    /// An obstacle sits on the line between the two
    Occluded,
    /// Too far apart, or exactly coincident
    OutOfRange,
    /// Push to apply to this particle
    Repel(Point),
}

impl PairInteraction {
    pub fn force(&self) -> Point {
        match self {
            PairInteraction::Repel(force) => *force,
            _ => Point::ZERO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Point,
    pub vel: Point,
    /// Force accumulated this frame, cleared by `integrate`
    pub acc: Point,
    pub radius: f32,
    /// Velocity damping per frame
    pub friction: f32,
}

impl Particle {
    /// A particle at rest
    pub fn new(pos: Point, radius: f32, friction: f32) -> Self {
        Self {
            pos,
            vel: Point::ZERO,
            acc: Point::ZERO,
            radius,
            friction,
        }
    }

    #[inline]
    pub fn apply_force(&mut self, force: Point) {
        self.acc += force;
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        distance(self.pos, other.pos)
    }

    /// Repulsion this particle feels from `other`.
    ///
    /// Occlusion wins over distance: a blocked pair never interacts. Coincident
    /// particles do not interact either.
    pub fn pair_interaction(
        &self,
        other: &Particle,
        obstacles: &[Obstacle],
        mode: OcclusionMode,
        tuning: &Tuning,
    ) -> PairInteraction {
        if line_of_sight_blocked(self.pos, other.pos, obstacles, mode) {
            return PairInteraction::Occluded;
        }

        let d = self.distance_to(other);
        if d > 0.0 && d < tuning.repulsion_range {
            let magnitude = (1.0 / d) * tuning.repulsion_strength;
            PairInteraction::Repel(polar_force(self.pos - other.pos, magnitude))
        } else {
            PairInteraction::OutOfRange
        }
    }

    /// Force vector form of [`Particle::pair_interaction`]
    pub fn compute_pair_force(
        &self,
        other: &Particle,
        obstacles: &[Obstacle],
        mode: OcclusionMode,
        tuning: &Tuning,
    ) -> Point {
        self.pair_interaction(other, obstacles, mode, tuning).force()
    }

    /// Exponential push away from canvas edges, per axis.
    ///
    /// Near edge is checked first; the far edge only applies when the near one
    /// did not.
    pub fn apply_boundary_force(&mut self, canvas: Point, tuning: &Tuning) {
        let threshold = tuning.boundary_threshold;
        let growth = tuning.boundary_growth;
        let wall = |pos: f32, extent: f32| -> f32 {
            if pos < threshold {
                2f32.powf((threshold - pos) * growth)
            } else if pos > extent - threshold {
                -(2f32.powf((pos - (extent - threshold)) * growth))
            } else {
                0.0
            }
        };

        let force = Point::new(wall(self.pos.x, canvas.x), wall(self.pos.y, canvas.y));
        self.apply_force(force);
    }

    /// Soft push off every obstacle surface this particle overlaps.
    ///
    /// Nearest outline points of obstacles within proximity range are appended
    /// to `contacts`. Returns how many obstacles actually pushed.
    pub fn apply_obstacle_collision_force(
        &mut self,
        obstacles: &[Obstacle],
        tuning: &Tuning,
        contacts: &mut Vec<Point>,
    ) -> usize {
        let reach = self.radius + tuning.collision_skin;
        let mut pushes = 0;

        for obstacle in obstacles {
            if !obstacle.is_in_range(self.pos, tuning.proximity_range) {
                continue;
            }
            let nearest = obstacle.nearest_boundary_point(self.pos);
            contacts.push(nearest);

            let offset = self.pos - nearest;
            let d = offset.length();
            if d < reach {
                let magnitude = (reach - d) * tuning.collision_multiplier;
                self.apply_force(polar_force(offset, magnitude));
                pushes += 1;
            }
        }

        pushes
    }

    /// Explicit Euler step with damping; unit mass and time step
    pub fn integrate(&mut self) {
        self.vel += self.acc;
        self.vel *= self.friction;
        self.pos += self.vel;
        self.acc = Point::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObstacleSpec;
    use crate::consts::*;

    fn particle(x: f32, y: f32) -> Particle {
        Particle::new(Point::new(x, y), PARTICLE_RADIUS, PARTICLE_FRICTION)
    }

    /// Thin upright wall; both its occlusion box and its outline cross y = 0
    /// between x = 0 and x = 10
    fn wall_between() -> Obstacle {
        Obstacle::new(&ObstacleSpec::fixed(4.0, -10.0, 2.0, 40.0, 0.0), 50)
    }

    #[test]
    fn test_pair_force_magnitude_and_direction() {
        let tuning = Tuning::default();
        let a = particle(0.0, 0.0);
        let b = particle(10.0, 0.0);

        let force = a.compute_pair_force(&b, &[], OcclusionMode::BoundingRect, &tuning);
        assert!((force.length() - 2.0).abs() < 1e-5);
        // Points from b toward a
        assert!(force.x < 0.0);
        assert!(force.y.abs() < 1e-5);
    }

    #[test]
    fn test_pair_force_diagonal() {
        let tuning = Tuning::default();
        let a = particle(3.0, 4.0);
        let b = particle(0.0, 0.0);
        let force = a.compute_pair_force(&b, &[], OcclusionMode::BoundingRect, &tuning);
        // d = 5, magnitude 4, along (0.6, 0.8)
        assert!((force - Point::new(2.4, 3.2)).length() < 1e-4);
    }

    #[test]
    fn test_pair_force_out_of_range() {
        let tuning = Tuning::default();
        let a = particle(0.0, 0.0);
        let b = particle(60.0, 0.0);
        assert_eq!(
            a.pair_interaction(&b, &[], OcclusionMode::BoundingRect, &tuning),
            PairInteraction::OutOfRange
        );
    }

    #[test]
    fn test_coincident_particles_do_not_interact() {
        let tuning = Tuning::default();
        let a = particle(7.0, 7.0);
        let b = particle(7.0, 7.0);
        assert_eq!(
            a.compute_pair_force(&b, &[], OcclusionMode::BoundingRect, &tuning),
            Point::ZERO
        );
    }

    #[test]
    fn test_occlusion_short_circuits() {
        let tuning = Tuning::default();
        let a = particle(0.0, 0.0);
        let b = particle(10.0, 0.0);
        let obstacles = [wall_between()];

        for mode in [OcclusionMode::BoundingRect, OcclusionMode::SampledPolygon] {
            assert_eq!(
                a.pair_interaction(&b, &obstacles, mode, &tuning),
                PairInteraction::Occluded
            );
            assert_eq!(a.compute_pair_force(&b, &obstacles, mode, &tuning), Point::ZERO);
        }
    }

    #[test]
    fn test_occlusion_ignores_distance() {
        let tuning = Tuning::default();
        // Far beyond repulsion range, still reported as occluded
        let a = particle(-500.0, 0.0);
        let b = particle(500.0, 0.0);
        assert_eq!(
            a.pair_interaction(&b, &[wall_between()], OcclusionMode::BoundingRect, &tuning),
            PairInteraction::Occluded
        );
    }

    #[test]
    fn test_boundary_force_near_edges() {
        let tuning = Tuning::default();
        let canvas = Point::new(100.0, 100.0);

        let mut left = particle(10.0, 50.0);
        left.apply_boundary_force(canvas, &tuning);
        assert!((left.acc.x - 2f32.powf(0.2)).abs() < 1e-5);
        assert_eq!(left.acc.y, 0.0);

        let mut bottom = particle(50.0, 90.0);
        bottom.apply_boundary_force(canvas, &tuning);
        assert_eq!(bottom.acc.x, 0.0);
        assert!((bottom.acc.y + 2f32.powf(0.2)).abs() < 1e-5);

        let mut middle = particle(50.0, 50.0);
        middle.apply_boundary_force(canvas, &tuning);
        assert_eq!(middle.acc, Point::ZERO);
    }

    #[test]
    fn test_boundary_force_grows_past_edge() {
        let tuning = Tuning::default();
        let canvas = Point::new(100.0, 100.0);
        let mut inside = particle(5.0, 50.0);
        let mut outside = particle(-200.0, 50.0);
        inside.apply_boundary_force(canvas, &tuning);
        outside.apply_boundary_force(canvas, &tuning);
        assert!(outside.acc.x > inside.acc.x);
        assert!((outside.acc.x - 2f32.powf(2.3)).abs() < 1e-4);
    }

    #[test]
    fn test_collision_force_pushes_off_surface() {
        let tuning = Tuning::default();
        // Square occupying [0, 10] x [0, 10]
        let obstacle = Obstacle::new(&ObstacleSpec::fixed(0.0, 0.0, 10.0, 10.0, 0.0), 500);
        let mut p = particle(5.0, -3.0);
        let mut contacts = Vec::new();

        let pushes = p.apply_obstacle_collision_force(&[obstacle], &tuning, &mut contacts);
        assert_eq!(pushes, 1);
        assert_eq!(contacts.len(), 1);
        // Reach 7, distance 3 -> magnitude 12, straight up (away from the top edge)
        assert!(p.acc.x.abs() < 0.05);
        assert!((p.acc.y + 12.0).abs() < 1e-3);
    }

    #[test]
    fn test_collision_in_range_but_not_touching() {
        let tuning = Tuning::default();
        let obstacle = Obstacle::new(&ObstacleSpec::fixed(0.0, 0.0, 10.0, 10.0, 0.0), 500);
        let mut p = particle(5.0, -30.0);
        let mut contacts = Vec::new();

        let pushes = p.apply_obstacle_collision_force(&[obstacle], &tuning, &mut contacts);
        assert_eq!(pushes, 0);
        assert_eq!(contacts.len(), 1);
        assert_eq!(p.acc, Point::ZERO);
    }

    #[test]
    fn test_integrate_applies_and_clears() {
        let mut p = particle(0.0, 0.0);
        p.apply_force(Point::new(1.0, 0.0));
        p.apply_force(Point::new(0.0, 2.0));
        p.integrate();

        let expected_vel = Point::new(1.0, 2.0) * PARTICLE_FRICTION;
        assert!((p.vel - expected_vel).length() < 1e-6);
        assert!((p.pos - expected_vel).length() < 1e-6);
        assert_eq!(p.acc, Point::ZERO);
    }

    #[test]
    fn test_integrate_decays_velocity() {
        let mut p = particle(0.0, 0.0);
        p.vel = Point::new(10.0, -4.0);
        let mut last = p.vel.length();
        for _ in 0..50 {
            let before = p.pos;
            p.integrate();
            assert!((p.pos - before - p.vel).length() < 1e-5);
            let speed = p.vel.length();
            assert!(speed <= last);
            last = speed;
        }
        assert!(last < 1.0);
    }
}
