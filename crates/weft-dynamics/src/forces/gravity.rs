//! Uniform gravity.

use rayon::prelude::*;
use weft_types::{Scalar, Vec3};

use crate::particle::Particle;

use super::Force;

/// Adds a constant acceleration to every particle with positive inverse
/// mass. Pinned particles are skipped.
#[derive(Debug, Clone)]
pub struct GravityForce {
    gravity: Vec3,
}

impl GravityForce {
    /// Creates a gravity force with the given acceleration vector.
    pub fn new(gravity: Vec3) -> Self {
        Self { gravity }
    }

    /// The acceleration vector.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }
}

impl Force for GravityForce {
    fn apply(&mut self, particles: &mut [Particle], _dt: Scalar) {
        let g = self.gravity;
        particles.par_iter_mut().for_each(|p| {
            if p.inverse_mass() == 0.0 {
                return;
            }
            p.add_force(g);
        });
    }
}
