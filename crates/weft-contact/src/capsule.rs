//! Capsule collider.

use weft_types::constants::{EPS_LENGTH, EPS_NORM_SQ};
use weft_dynamics::{Collider, Particle};
use weft_types::{Scalar, Vec3};

/// A capsule: a sphere of `radius` swept along the segment `[start, end]`.
///
/// Each particle is tested against the closest point on the segment and
/// proceeds as a sphere around that point, including the friction rewrite.
pub struct CapsuleCollider {
    start: Vec3,
    end: Vec3,
    radius: Scalar,
    friction: Scalar,
}

impl CapsuleCollider {
    /// Creates a capsule collider over the segment `[start, end]`.
    pub fn new(start: Vec3, end: Vec3, radius: Scalar, friction: Scalar) -> Self {
        Self {
            start,
            end,
            radius,
            friction,
        }
    }

    /// Segment start point.
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// Segment end point.
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// The capsule radius (without the contact skin).
    pub fn radius(&self) -> Scalar {
        self.radius
    }
}

impl Collider for CapsuleCollider {
    fn resolve(&self, particles: &mut [Particle], _dt: Scalar, thickness: Scalar) {
        let collision_radius = self.radius + thickness;
        let collision_radius_sq = collision_radius * collision_radius;

        let segment = self.end - self.start;
        let segment_len_sq = segment.length_squared();

        for particle in particles.iter_mut() {
            if particle.inverse_mass() == 0.0 {
                continue;
            }
            let to_particle = particle.position() - self.start;

            let t = if segment_len_sq > EPS_LENGTH {
                (to_particle.dot(segment) / segment_len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let closest = self.start + segment * t;

            let offset = particle.position() - closest;
            let dist_sq = offset.length_squared();
            if dist_sq >= collision_radius_sq || dist_sq <= EPS_NORM_SQ {
                continue;
            }

            let normal = offset / dist_sq.sqrt();
            particle.set_position(closest + normal * collision_radius);

            let velocity = particle.position() - particle.old_position();
            let normal_vel = normal * velocity.dot(normal);
            let tangent_vel = velocity - normal_vel;
            let new_velocity = normal_vel + tangent_vel * (1.0 - self.friction);
            particle.set_old_position(particle.position() - new_velocity);
        }
    }
}
