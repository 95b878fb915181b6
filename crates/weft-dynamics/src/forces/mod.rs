//! External force family.
//!
//! Forces accumulate into the particle acceleration buffer before each
//! substep's integration. They are owned by the `World` as trait objects
//! and applied in insertion order.

mod aerodynamic;
mod gravity;

pub use aerodynamic::{AeroFace, AerodynamicForce};
pub use gravity::GravityForce;

use weft_types::Scalar;

use crate::particle::Particle;

/// An external force field evaluated once per substep.
pub trait Force: Send {
    /// Accumulates this force into the particles' acceleration buffers.
    ///
    /// `dt` is the substep length; forces that keep internal clocks (the
    /// aerodynamic gust) advance them here.
    fn apply(&mut self, particles: &mut [Particle], dt: Scalar);
}
