//! Transient contact constraint between two particles.

use weft_types::constants::{EPS_DENOM, EPS_LENGTH, EPS_NORM_SQ};
use weft_types::Scalar;

use crate::particle::Particle;

use super::Constraint;

/// Unilateral separation constraint used when the self-collision pass
/// materializes contacts as constraint objects.
///
/// Active only while the pair is closer than `thickness`; inactive pairs
/// are left untouched. The solver's collision compliance regularizes the
/// response.
#[derive(Debug, Clone)]
pub struct ContactConstraint {
    id_a: usize,
    id_b: usize,
    thickness: Scalar,
    compliance: Scalar,
    lambda: Scalar,
}

impl ContactConstraint {
    /// Creates a contact keeping `id_a` and `id_b` at least `thickness` apart.
    pub fn new(id_a: usize, id_b: usize, thickness: Scalar, compliance: Scalar) -> Self {
        Self {
            id_a,
            id_b,
            thickness,
            compliance,
            lambda: 0.0,
        }
    }

    /// The contacting particle pair.
    pub fn ids(&self) -> (usize, usize) {
        (self.id_a, self.id_b)
    }
}

impl Constraint for ContactConstraint {
    fn solve(&mut self, particles: &mut [Particle], dt: Scalar) {
        if dt < EPS_LENGTH {
            return;
        }
        let p_a = particles[self.id_a].position();
        let p_b = particles[self.id_b].position();

        let delta = p_a - p_b;
        let dist = delta.length();
        // Inactive when separated; degenerate when coincident.
        if dist >= self.thickness || dist < EPS_NORM_SQ {
            return;
        }

        let w_a = particles[self.id_a].inverse_mass();
        let w_b = particles[self.id_b].inverse_mass();

        let alpha_hat = self.compliance / (dt * dt);
        let denom = w_a + w_b + alpha_hat;
        if denom < EPS_DENOM {
            return;
        }

        let c = dist - self.thickness;
        let delta_lambda = -(c + alpha_hat * self.lambda) / denom;
        self.lambda += delta_lambda;

        let normal = delta / dist;
        particles[self.id_a].set_position(p_a + normal * (w_a * delta_lambda));
        particles[self.id_b].set_position(p_b - normal * (w_b * delta_lambda));
    }

    fn reset_lambda(&mut self) {
        self.lambda = 0.0;
    }
}
