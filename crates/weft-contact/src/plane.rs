//! Infinite plane collider.

use weft_dynamics::{Collider, Particle};
use weft_types::{Scalar, Vec3};

/// An infinite plane through `origin` with unit normal `normal`.
///
/// Particles closer than the contact thickness on the normal side are
/// pushed onto the offset surface; the tangential part of their implicit
/// velocity is scaled by `1 - friction`.
pub struct PlaneCollider {
    origin: Vec3,
    normal: Vec3,
    friction: Scalar,
}

impl PlaneCollider {
    /// Creates a plane collider. The normal is normalized here.
    pub fn new(origin: Vec3, normal: Vec3, friction: Scalar) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            friction,
        }
    }

    /// The plane origin.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// The unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Collider for PlaneCollider {
    fn resolve(&self, particles: &mut [Particle], _dt: Scalar, thickness: Scalar) {
        for particle in particles.iter_mut() {
            if particle.inverse_mass() == 0.0 {
                continue;
            }
            let distance = (particle.position() - self.origin).dot(self.normal);
            if distance >= thickness {
                continue;
            }

            let penetration = thickness - distance;
            particle.set_position(particle.position() + self.normal * penetration);

            let velocity = particle.position() - particle.old_position();
            let normal_vel = self.normal * velocity.dot(self.normal);
            let tangent_vel = velocity - normal_vel;
            let new_velocity = normal_vel + tangent_vel * (1.0 - self.friction);
            particle.set_old_position(particle.position() - new_velocity);
        }
    }
}
