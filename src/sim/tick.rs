//! Per-frame simulation step
//!
//! Fixed order, every frame:
//! 1. oscillating obstacles move (and re-sample their outline)
//! 2. every ordered pair (i, j), i != j, adds j's push to i
//! 3. obstacle surface force, then wall force, per particle
//! 4. every particle integrates
//!
//! All forces are gathered before anyone moves, so integration order does not
//! matter. Pairs are evaluated in both directions independently; nothing
//! assumes the two pushes are equal and opposite.

use super::particle::PairInteraction;
use super::state::{FrameStats, Simulation};
use crate::Point;

/// Advance the simulation by one frame
pub fn tick(sim: &mut Simulation) -> FrameStats {
    let mut stats = FrameStats::default();

    // 1. Obstacle poses settle before anything reads their geometry
    for obstacle in &mut sim.obstacles {
        if obstacle.oscillating {
            obstacle.update_oscillation();
        }
    }

    // 2. Pairwise repulsion
    let mut pair_forces = vec![Point::ZERO; sim.particles.len()];
    for (i, particle) in sim.particles.iter().enumerate() {
        for (j, other) in sim.particles.iter().enumerate() {
            if i == j {
                continue;
            }
            match particle.pair_interaction(other, &sim.obstacles, sim.occlusion, &sim.tuning) {
                PairInteraction::Occluded => stats.occluded_pairs += 1,
                PairInteraction::OutOfRange => {}
                PairInteraction::Repel(force) => {
                    pair_forces[i] += force;
                    stats.repelling_pairs += 1;
                }
            }
        }
    }
    for (particle, force) in sim.particles.iter_mut().zip(pair_forces) {
        particle.apply_force(force);
    }

    // 3. Obstacle surfaces, then canvas walls
    sim.contacts.clear();
    for particle in &mut sim.particles {
        stats.obstacle_pushes +=
            particle.apply_obstacle_collision_force(&sim.obstacles, &sim.tuning, &mut sim.contacts);
        particle.apply_boundary_force(sim.canvas, &sim.tuning);
    }
    stats.contacts = sim.contacts.len();

    // 4. Integrate
    let mut speed_sum = 0.0;
    for particle in &mut sim.particles {
        particle.integrate();
        speed_sum += particle.vel.length();
    }
    if !sim.particles.is_empty() {
        stats.mean_speed = speed_sum / sim.particles.len() as f32;
    }

    sim.frame += 1;
    stats.frame = sim.frame;

    log::trace!(
        "frame {}: {} repelling, {} occluded, {} pushes, mean speed {:.3}",
        stats.frame,
        stats.repelling_pairs,
        stats.occluded_pairs,
        stats.obstacle_pushes,
        stats.mean_speed
    );

    stats
}
