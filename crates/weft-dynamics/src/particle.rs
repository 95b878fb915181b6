//! The atomic mass point of the simulation.

use weft_types::constants::EPS_VELOCITY_DT;
use weft_types::{Scalar, Vec3};

/// One mass point, integrated with position-based Verlet.
///
/// Velocity is implicit: `(position - old_position) / dt`. Forces are
/// accumulated into `acceleration` between [`Particle::integrate`] calls;
/// the accumulator is consumed and zeroed by the integration step.
///
/// An inverse mass of zero marks the particle as pinned/kinematic — it is
/// skipped by integration and receives no constraint corrections.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    position: Vec3,
    old_position: Vec3,
    acceleration: Vec3,
    inverse_mass: Scalar,
    mass: Scalar,
}

impl Particle {
    /// Creates a particle at rest at the given position with unit mass.
    ///
    /// Builders normally overwrite the mass via [`Particle::add_mass`]
    /// as triangle areas are accumulated.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            old_position: position,
            acceleration: Vec3::ZERO,
            inverse_mass: 1.0,
            mass: 0.0,
        }
    }

    /// Accumulates an external contribution into the acceleration buffer.
    #[inline]
    pub fn add_force(&mut self, force: Vec3) {
        self.acceleration += force;
    }

    /// Zeroes the acceleration accumulator.
    #[inline]
    pub fn clear_forces(&mut self) {
        self.acceleration = Vec3::ZERO;
    }

    /// Adds real mass and refreshes the inverse mass from the running total.
    pub fn add_mass(&mut self, mass: Scalar) {
        self.mass += mass;
        self.inverse_mass = if self.mass > 0.0 { 1.0 / self.mass } else { 0.0 };
    }

    /// Overrides the inverse mass directly. Zero pins the particle.
    #[inline]
    pub fn set_inverse_mass(&mut self, inverse_mass: Scalar) {
        self.inverse_mass = inverse_mass;
    }

    /// Advances the particle one substep with Verlet integration:
    /// `next = 2p - p_old + a·dt²`.
    ///
    /// Pinned particles do not move; their acceleration is still dropped so
    /// stale contributions cannot accumulate across substeps.
    pub fn integrate(&mut self, dt: Scalar) {
        if self.inverse_mass == 0.0 {
            self.old_position = self.position;
            self.acceleration = Vec3::ZERO;
            return;
        }
        let next = 2.0 * self.position - self.old_position + self.acceleration * (dt * dt);
        self.old_position = self.position;
        self.position = next;
        self.acceleration = Vec3::ZERO;
    }

    /// Implicit velocity derived from the Verlet state.
    #[inline]
    pub fn velocity(&self, dt: Scalar) -> Vec3 {
        if dt < EPS_VELOCITY_DT {
            return Vec3::ZERO;
        }
        (self.position - self.old_position) / dt
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position at the previous substep.
    #[inline]
    pub fn old_position(&self) -> Vec3 {
        self.old_position
    }

    /// Accumulated acceleration.
    #[inline]
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Current inverse mass.
    #[inline]
    pub fn inverse_mass(&self) -> Scalar {
        self.inverse_mass
    }

    /// Accumulated mass total.
    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Moves the particle, leaving the previous position untouched.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Rewrites the previous position. Colliders use this to edit the
    /// implicit velocity.
    #[inline]
    pub fn set_old_position(&mut self, old_position: Vec3) {
        self.old_position = old_position;
    }
}
