//! Static collider seam.

use weft_types::Scalar;

use crate::particle::Particle;

/// A static collision shape that projects penetrating particles out of
/// itself and rewrites their implicit velocity for friction.
///
/// `thickness` adds a skin to the shape's surface. Implementations live in
/// `weft-contact` (plane, sphere, capsule); colliders are owned by the
/// `World` and resolved in insertion order after the constraint phase.
pub trait Collider: Send {
    /// Projects penetrating particles onto the offset surface and applies
    /// tangential friction by rewriting their previous position.
    fn resolve(&self, particles: &mut [Particle], dt: Scalar, thickness: Scalar);
}
