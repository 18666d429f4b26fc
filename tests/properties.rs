//! Property tests for the force model and geometry

use std::f32::consts::TAU;

use proptest::prelude::*;
use repulse::sim::{Obstacle, Particle, segments_intersect};
use repulse::{ObstacleSpec, OcclusionMode, Point, Tuning};

fn point() -> impl Strategy<Value = Point> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn speed_never_grows_without_force(
        vx in -50.0f32..50.0,
        vy in -50.0f32..50.0,
        friction in 0.01f32..0.99,
    ) {
        let mut p = Particle::new(Point::ZERO, 5.0, friction);
        p.vel = Point::new(vx, vy);
        let mut last = p.vel.length();
        for _ in 0..20 {
            p.integrate();
            let speed = p.vel.length();
            prop_assert!(speed <= last);
            prop_assert_eq!(p.acc, Point::ZERO);
            last = speed;
        }
    }

    #[test]
    fn oscillation_returns_after_full_period(
        reference in -1000.0f32..1000.0,
        amplitude in 1.0f32..200.0,
        steps in 10usize..200,
    ) {
        let spec = ObstacleSpec::oscillating(reference, 0.0, 20.0, 100.0, amplitude, TAU / steps as f32);
        let mut obstacle = Obstacle::new(&spec, 2);
        // The first update samples phase 0; `steps` more bring the clock round
        for _ in 0..=steps {
            obstacle.update_oscillation();
        }
        prop_assert!((obstacle.x - reference).abs() < amplitude * 1e-3 + 1e-3);
    }

    #[test]
    fn pair_force_follows_inverse_distance(a in point(), b in point()) {
        let tuning = Tuning::default();
        let pa = Particle::new(a, 5.0, 0.92);
        let pb = Particle::new(b, 5.0, 0.92);
        let force = pa.compute_pair_force(&pb, &[], OcclusionMode::BoundingRect, &tuning);
        let d = (a - b).length();

        if d > 0.0 && d < tuning.repulsion_range {
            let expected = tuning.repulsion_strength / d;
            prop_assert!((force.length() - expected).abs() <= expected * 1e-4);
            // Pushes away from the other particle
            prop_assert!(force.dot(a - b) > 0.0);
        } else {
            prop_assert_eq!(force, Point::ZERO);
        }
    }

    #[test]
    fn segment_test_is_symmetric(a in point(), b in point(), c in point(), d in point()) {
        prop_assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
    }

    #[test]
    fn nearest_point_is_on_outline(
        target in point(),
        width in 1.0f32..300.0,
        height in 1.0f32..300.0,
        rotation in -3.2f32..3.2,
    ) {
        let obstacle = Obstacle::new(&ObstacleSpec::fixed(0.0, 0.0, width, height, rotation), 40);
        let nearest = obstacle.nearest_boundary_point(target);
        prop_assert!(obstacle.boundary().contains(&nearest));
        let best = (nearest - target).length();
        prop_assert!(obstacle.boundary().iter().all(|p| (*p - target).length() >= best));
    }
}
