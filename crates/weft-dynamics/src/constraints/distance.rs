//! Distance constraint between two particles.

use weft_types::constants::{EPS_DENOM, EPS_LENGTH};
use weft_types::Scalar;

use crate::particle::Particle;

use super::Constraint;

/// Keeps two particles at a fixed rest length.
///
/// Used for both structural edges and shear diagonals; the two roles
/// differ only in compliance.
#[derive(Debug, Clone)]
pub struct DistanceConstraint {
    id_a: usize,
    id_b: usize,
    rest_length: Scalar,
    compliance: Scalar,
    lambda: Scalar,
}

impl DistanceConstraint {
    /// Creates a constraint holding `id_a` and `id_b` at `rest_length`.
    pub fn new(id_a: usize, id_b: usize, rest_length: Scalar, compliance: Scalar) -> Self {
        Self {
            id_a,
            id_b,
            rest_length,
            compliance,
            lambda: 0.0,
        }
    }

    /// The constrained particle pair.
    pub fn ids(&self) -> (usize, usize) {
        (self.id_a, self.id_b)
    }

    /// The rest length.
    pub fn rest_length(&self) -> Scalar {
        self.rest_length
    }
}

impl Constraint for DistanceConstraint {
    fn solve(&mut self, particles: &mut [Particle], dt: Scalar) {
        if dt < EPS_LENGTH {
            return;
        }
        let p_a = particles[self.id_a].position();
        let p_b = particles[self.id_b].position();

        let delta = p_a - p_b;
        let length = delta.length();
        if length < EPS_LENGTH {
            return;
        }

        let w_a = particles[self.id_a].inverse_mass();
        let w_b = particles[self.id_b].inverse_mass();

        let alpha_hat = self.compliance / (dt * dt);
        let denom = w_a + w_b + alpha_hat;
        if denom < EPS_DENOM {
            return;
        }

        let c = length - self.rest_length;
        let delta_lambda = -(c + alpha_hat * self.lambda) / denom;
        self.lambda += delta_lambda;

        let gradient = delta / length;
        particles[self.id_a].set_position(p_a + gradient * (w_a * delta_lambda));
        particles[self.id_b].set_position(p_b - gradient * (w_b * delta_lambda));
    }

    fn reset_lambda(&mut self) {
        self.lambda = 0.0;
    }
}
