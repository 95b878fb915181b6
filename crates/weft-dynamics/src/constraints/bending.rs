//! Dihedral bending constraint over a hinge edge.

use weft_types::constants::{EPS_LENGTH, EPS_NORM_SQ};
use weft_types::{Scalar, Vec3};

use crate::particle::Particle;

use super::Constraint;

/// Resists change of the dihedral angle across the hinge edge `(a, b)`.
///
/// `c` and `d` are the wing vertices of the two incident triangles. The
/// signed angle uses the `atan2` convention of [`dihedral_angle`]; rest
/// angles computed with that helper at build time are therefore exactly
/// consistent with the solve.
#[derive(Debug, Clone)]
pub struct BendingConstraint {
    id_a: usize,
    id_b: usize,
    id_c: usize,
    id_d: usize,
    rest_angle: Scalar,
    compliance: Scalar,
    lambda: Scalar,
}

impl BendingConstraint {
    /// Creates a bending constraint over hinge `(id_a, id_b)` with wings
    /// `id_c`, `id_d` and the given rest dihedral angle.
    pub fn new(
        id_a: usize,
        id_b: usize,
        id_c: usize,
        id_d: usize,
        rest_angle: Scalar,
        compliance: Scalar,
    ) -> Self {
        Self {
            id_a,
            id_b,
            id_c,
            id_d,
            rest_angle,
            compliance,
            lambda: 0.0,
        }
    }

    /// The four involved particle ids, hinge first.
    pub fn ids(&self) -> (usize, usize, usize, usize) {
        (self.id_a, self.id_b, self.id_c, self.id_d)
    }

    /// The rest dihedral angle.
    pub fn rest_angle(&self) -> Scalar {
        self.rest_angle
    }
}

/// Signed dihedral angle over the hinge `(x_a, x_b)` with wings `x_c`, `x_d`.
///
/// Returns `None` for degenerate hinges (collapsed edge or zero-area
/// wings). The sign follows `atan2(sinθ, cosθ)` with
/// `sinθ = (n₁×n₂)·ê` — the one convention used everywhere: the bending
/// solve, and rest-angle computation for imported meshes.
pub fn dihedral_angle(x_a: Vec3, x_b: Vec3, x_c: Vec3, x_d: Vec3) -> Option<Scalar> {
    let e = x_b - x_a;
    let len = e.length();
    if len < EPS_LENGTH {
        return None;
    }
    let n1 = e.cross(x_c - x_a);
    let n2 = e.cross(x_d - x_a);
    signed_angle(e, len, n1, n2)
}

/// The shared angle formula: inputs are the hinge edge and the two
/// (unnormalized) wing-plane normals.
fn signed_angle(e: Vec3, e_len: Scalar, n1: Vec3, n2: Vec3) -> Option<Scalar> {
    let n1_sq = n1.length_squared();
    let n2_sq = n2.length_squared();
    if n1_sq < EPS_NORM_SQ || n2_sq < EPS_NORM_SQ {
        return None;
    }
    let norm_product = (n1_sq * n2_sq).sqrt();
    let cos_theta = n1.dot(n2) / norm_product;
    let sin_theta = n1.cross(n2).dot(e) / (e_len * norm_product);
    Some(sin_theta.atan2(cos_theta))
}

impl Constraint for BendingConstraint {
    fn solve(&mut self, particles: &mut [Particle], dt: Scalar) {
        if dt < EPS_LENGTH {
            return;
        }
        let x_a = particles[self.id_a].position();
        let x_b = particles[self.id_b].position();
        let x_c = particles[self.id_c].position();
        let x_d = particles[self.id_d].position();

        let e = x_b - x_a;
        let len = e.length();
        if len < EPS_LENGTH {
            return;
        }
        let n1 = e.cross(x_c - x_a);
        let n2 = e.cross(x_d - x_a);

        let angle = match signed_angle(e, len, n1, n2) {
            Some(angle) => angle,
            None => return,
        };
        let c = angle - self.rest_angle;

        let n1_sq = n1.length_squared();
        let n2_sq = n2.length_squared();
        let len_sq = len * len;

        let grad_c = n1 * (len / n1_sq);
        let grad_d = n2 * (-len / n2_sq);
        let grad_a = grad_c * ((x_c - x_b).dot(e) / len_sq) + grad_d * ((x_d - x_b).dot(e) / len_sq);
        let grad_b = grad_c * ((x_a - x_c).dot(e) / len_sq) + grad_d * ((x_a - x_d).dot(e) / len_sq);

        let w_a = particles[self.id_a].inverse_mass();
        let w_b = particles[self.id_b].inverse_mass();
        let w_c = particles[self.id_c].inverse_mass();
        let w_d = particles[self.id_d].inverse_mass();

        let alpha_hat = self.compliance / (dt * dt);
        let denom = w_a * grad_a.length_squared()
            + w_b * grad_b.length_squared()
            + w_c * grad_c.length_squared()
            + w_d * grad_d.length_squared()
            + alpha_hat;
        if denom < EPS_NORM_SQ {
            return;
        }

        let delta_lambda = -(c + alpha_hat * self.lambda) / denom;
        self.lambda += delta_lambda;

        particles[self.id_a].set_position(x_a + grad_a * (w_a * delta_lambda));
        particles[self.id_b].set_position(x_b + grad_b * (w_b * delta_lambda));
        particles[self.id_c].set_position(x_c + grad_c * (w_c * delta_lambda));
        particles[self.id_d].set_position(x_d + grad_d * (w_d * delta_lambda));
    }

    fn reset_lambda(&mut self) {
        self.lambda = 0.0;
    }
}
