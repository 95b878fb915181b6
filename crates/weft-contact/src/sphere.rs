//! Sphere collider.

use weft_types::constants::EPS_LENGTH;
use weft_dynamics::{Collider, Particle};
use weft_types::{Scalar, Vec3};

/// A solid sphere. Particles inside the thickness-expanded radius are
/// projected onto the offset surface with the same friction rewrite as the
/// plane. A particle sitting exactly at the center gets an arbitrary +Y
/// normal.
pub struct SphereCollider {
    center: Vec3,
    radius: Scalar,
    friction: Scalar,
}

impl SphereCollider {
    /// Creates a sphere collider.
    pub fn new(center: Vec3, radius: Scalar, friction: Scalar) -> Self {
        Self {
            center,
            radius,
            friction,
        }
    }

    /// The sphere center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The sphere radius (without the contact skin).
    pub fn radius(&self) -> Scalar {
        self.radius
    }
}

impl Collider for SphereCollider {
    fn resolve(&self, particles: &mut [Particle], _dt: Scalar, thickness: Scalar) {
        let collision_radius = self.radius + thickness;

        for particle in particles.iter_mut() {
            if particle.inverse_mass() == 0.0 {
                continue;
            }
            let mut offset = particle.position() - self.center;
            let mut distance = offset.length();

            if distance < EPS_LENGTH {
                offset = Vec3::Y * collision_radius;
                distance = collision_radius;
            }

            if distance >= collision_radius {
                continue;
            }

            let normal = offset / distance;
            particle.set_position(self.center + normal * collision_radius);

            let velocity = particle.position() - particle.old_position();
            let normal_vel = normal * velocity.dot(normal);
            let tangent_vel = velocity - normal_vel;
            let new_velocity = normal_vel + tangent_vel * (1.0 - self.friction);
            particle.set_old_position(particle.position() - new_velocity);
        }
    }
}
