//! The XPBD solver: particle/constraint owner and substep driver.

use std::collections::HashSet;

use rayon::prelude::*;

use weft_contact::SpatialHash;
use weft_dynamics::{
    BendingConstraint, Constraint, DistanceConstraint, Particle, PinConstraint,
};
use weft_types::constants::{DEFAULT_HASH_TABLE_SIZE, EPS_DENOM};
use weft_types::{Scalar, Vec3};

use crate::config::SolverSettings;
use crate::world::World;

/// Owner of all particles and constraints, and driver of the frame loop.
///
/// Particle and constraint identity is stable for the solver's lifetime;
/// [`Solver::clear`] invalidates every id handed out so far (including the
/// id lists recorded in cloths).
pub struct Solver {
    particles: Vec<Particle>,
    constraints: Vec<Box<dyn Constraint>>,
    /// Packed `(max << 32) | min` keys of particle pairs already wired by a
    /// distance or bending constraint. Such pairs are exempt from
    /// self-collision.
    adjacency: HashSet<u64>,
    spatial_hash: SpatialHash,
    neighbor_buffer: Vec<usize>,
    substeps: u32,
    iterations: u32,
    collision_compliance: Scalar,
    self_contact_count: u32,
}

impl Solver {
    /// Creates a solver with default settings.
    pub fn new() -> Self {
        Self::with_settings(SolverSettings::default())
    }

    /// Creates a solver from explicit settings.
    pub fn with_settings(settings: SolverSettings) -> Self {
        Self {
            particles: Vec::new(),
            constraints: Vec::new(),
            adjacency: HashSet::new(),
            spatial_hash: SpatialHash::new(DEFAULT_HASH_TABLE_SIZE, 0.08),
            neighbor_buffer: Vec::new(),
            substeps: settings.substeps.max(1),
            iterations: settings.iterations.max(1),
            collision_compliance: settings.collision_compliance,
            self_contact_count: 0,
        }
    }

    // ─── Particle management ──────────────────────────────────────────

    /// Adds a particle and returns its id.
    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// All particles, in id order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of owned particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of owned constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Accumulates mass onto a particle (used by the builder's mass pass).
    pub fn add_mass_to_particle(&mut self, id: usize, mass: Scalar) {
        self.particles[id].add_mass(mass);
    }

    /// Overrides a particle's inverse mass. Zero pins it in place.
    pub fn set_particle_inverse_mass(&mut self, id: usize, inverse_mass: Scalar) {
        self.particles[id].set_inverse_mass(inverse_mass);
    }

    /// Drops all particles, constraints, and adjacency. Every previously
    /// returned id becomes invalid.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.constraints.clear();
        self.adjacency.clear();
        self.self_contact_count = 0;
    }

    // ─── Constraint synthesis ─────────────────────────────────────────

    /// Adds a distance constraint at the pair's current separation and
    /// marks the pair as adjacent.
    pub fn add_distance_constraint(&mut self, id_a: usize, id_b: usize, compliance: Scalar) {
        let rest_length =
            (self.particles[id_a].position() - self.particles[id_b].position()).length();
        self.constraints.push(Box::new(DistanceConstraint::new(
            id_a, id_b, rest_length, compliance,
        )));
        self.adjacency.insert(adjacency_key(id_a, id_b));
    }

    /// Adds a bending constraint over hinge `(id_a, id_b)` with wings
    /// `id_c`, `id_d`, marking each hinge–wing pair as adjacent.
    pub fn add_bending_constraint(
        &mut self,
        id_a: usize,
        id_b: usize,
        id_c: usize,
        id_d: usize,
        rest_angle: Scalar,
        compliance: Scalar,
    ) {
        self.constraints.push(Box::new(BendingConstraint::new(
            id_a, id_b, id_c, id_d, rest_angle, compliance,
        )));
        self.adjacency.insert(adjacency_key(id_a, id_c));
        self.adjacency.insert(adjacency_key(id_b, id_c));
        self.adjacency.insert(adjacency_key(id_a, id_d));
        self.adjacency.insert(adjacency_key(id_b, id_d));
    }

    /// Pins a particle to a world-space target.
    pub fn add_pin(&mut self, id: usize, target: Vec3, compliance: Scalar) {
        self.constraints
            .push(Box::new(PinConstraint::new(id, target, compliance)));
    }

    /// Adds an arbitrary constraint (extension seam).
    pub fn add_constraint(&mut self, constraint: Box<dyn Constraint>) {
        self.constraints.push(constraint);
    }

    /// True if this pair is wired by a distance or bending constraint and
    /// therefore exempt from self-collision.
    pub fn is_adjacent(&self, id_a: usize, id_b: usize) -> bool {
        self.adjacency.contains(&adjacency_key(id_a, id_b))
    }

    // ─── Settings ─────────────────────────────────────────────────────

    /// Sets the substep count (clamped to at least 1).
    pub fn set_substeps(&mut self, substeps: u32) {
        self.substeps = substeps.max(1);
    }

    /// Sets the constraint iteration count (clamped to at least 1).
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations.max(1);
    }

    /// Sets the self-collision compliance.
    pub fn set_collision_compliance(&mut self, compliance: Scalar) {
        self.collision_compliance = compliance;
    }

    /// Current substep count.
    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Current iteration count.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Current self-collision compliance.
    pub fn collision_compliance(&self) -> Scalar {
        self.collision_compliance
    }

    /// Self-collision corrections applied during the last frame.
    pub fn self_contact_count(&self) -> u32 {
        self.self_contact_count
    }

    // ─── Frame loop ───────────────────────────────────────────────────

    /// Advances the simulation by one frame of `delta_time` seconds.
    ///
    /// The spatial hash is sized to the world's contact thickness and
    /// rebuilt once per frame, not per substep — neighbor lists go slightly
    /// stale across substeps in exchange for broad-phase cost.
    pub fn update(&mut self, world: &mut World, delta_time: Scalar) {
        if self.particles.is_empty() {
            return;
        }
        self.self_contact_count = 0;

        self.spatial_hash.set_cell_size(world.thickness());
        self.spatial_hash.build(&self.particles);

        let dt = delta_time / Scalar::from(self.substeps);
        for _ in 0..self.substeps {
            self.step(world, dt);
        }
    }

    fn step(&mut self, world: &mut World, dt: Scalar) {
        self.apply_forces(world, dt);
        self.predict(dt);

        for constraint in &mut self.constraints {
            constraint.reset_lambda();
        }
        for _ in 0..self.iterations {
            for constraint in &mut self.constraints {
                constraint.solve(&mut self.particles, dt);
            }
        }

        for collider in world.colliders() {
            collider.resolve(&mut self.particles, dt, world.thickness());
        }

        self.solve_self_collisions(dt, world.thickness());
    }

    fn apply_forces(&mut self, world: &mut World, dt: Scalar) {
        self.particles.par_iter_mut().for_each(|p| p.clear_forces());
        for force in world.forces_mut() {
            force.apply(&mut self.particles, dt);
        }
    }

    fn predict(&mut self, dt: Scalar) {
        self.particles.par_iter_mut().for_each(|p| p.integrate(dt));
    }

    /// One pass of inline particle–particle contact projection.
    ///
    /// Corrections are applied immediately without a persistent multiplier;
    /// the collision compliance still regularizes the denominator. The pass
    /// is serial: each correction can change later pairs' distances.
    fn solve_self_collisions(&mut self, dt: Scalar, thickness: Scalar) {
        let alpha_hat = self.collision_compliance / (dt * dt);
        let thickness_sq = thickness * thickness;

        for i in 0..self.particles.len() {
            let w_a = self.particles[i].inverse_mass();
            if w_a == 0.0 {
                continue;
            }

            let pos_a = self.particles[i].position();
            self.spatial_hash
                .query(&self.particles, pos_a, thickness, &mut self.neighbor_buffer);

            for k in 0..self.neighbor_buffer.len() {
                let j = self.neighbor_buffer[k];
                if j <= i {
                    continue;
                }
                if self.adjacency.contains(&adjacency_key(i, j)) {
                    continue;
                }

                let w_b = self.particles[j].inverse_mass();
                let w_sum = w_a + w_b;
                if w_sum + alpha_hat < EPS_DENOM {
                    continue;
                }

                let p_a = self.particles[i].position();
                let p_b = self.particles[j].position();
                let delta = p_a - p_b;
                let dist_sq = delta.length_squared();
                if dist_sq <= 0.0 || dist_sq >= thickness_sq {
                    continue;
                }

                let dist = dist_sq.sqrt();
                let normal = delta / dist;
                let c = dist - thickness;
                let delta_lambda = -c / (w_sum + alpha_hat);

                self.particles[i].set_position(p_a + normal * (w_a * delta_lambda));
                self.particles[j].set_position(p_b - normal * (w_b * delta_lambda));
                self.self_contact_count += 1;
            }
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-independent packed key for a particle pair.
fn adjacency_key(id_a: usize, id_b: usize) -> u64 {
    let low = id_a.min(id_b) as u64;
    let high = id_a.max(id_b) as u64;
    (high << 32) | low
}
