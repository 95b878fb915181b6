//! Pin constraint anchoring a particle to a world-space target.

use weft_types::constants::{EPS_DENOM, EPS_LENGTH};
use weft_types::{Scalar, Vec3};

use crate::particle::Particle;

use super::Constraint;

/// Anchors one particle to a fixed target position.
///
/// With zero compliance and a positive inverse mass this is a hard anchor:
/// the projection returns the particle exactly to the target. A small
/// positive compliance turns it into a spring-like attachment.
#[derive(Debug, Clone)]
pub struct PinConstraint {
    id: usize,
    target: Vec3,
    compliance: Scalar,
    lambda: Scalar,
}

impl PinConstraint {
    /// Creates a pin holding `id` at `target`.
    pub fn new(id: usize, target: Vec3, compliance: Scalar) -> Self {
        Self {
            id,
            target,
            compliance,
            lambda: 0.0,
        }
    }

    /// The pinned particle id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The anchor position.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Moves the anchor. Useful for dragging interactions.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }
}

impl Constraint for PinConstraint {
    fn solve(&mut self, particles: &mut [Particle], dt: Scalar) {
        if dt < EPS_LENGTH {
            return;
        }
        let position = particles[self.id].position();
        let delta = position - self.target;
        let dist = delta.length();
        if dist < EPS_LENGTH {
            return;
        }

        let w = particles[self.id].inverse_mass();
        let alpha_hat = self.compliance / (dt * dt);
        let denom = w + alpha_hat;
        if denom < EPS_DENOM {
            return;
        }

        let delta_lambda = (-dist - alpha_hat * self.lambda) / denom;
        self.lambda += delta_lambda;

        let gradient = delta / dist;
        particles[self.id].set_position(position + gradient * (w * delta_lambda));
    }

    fn reset_lambda(&mut self) {
        self.lambda = 0.0;
    }
}
