//! # weft-dynamics
//!
//! The dynamic primitives of the Weft cloth engine: Verlet particles, the
//! XPBD constraint family, external forces, and the collider seam.
//!
//! ## Key Types
//!
//! - [`Particle`] — one mass point: position, previous position, inverse
//!   mass, acceleration accumulator
//! - [`Constraint`] — XPBD projection trait; implemented by
//!   [`DistanceConstraint`], [`BendingConstraint`], [`PinConstraint`],
//!   [`ContactConstraint`]
//! - [`Force`] — acceleration accumulation trait; implemented by
//!   [`GravityForce`] and [`AerodynamicForce`]
//! - [`Collider`] — projection seam implemented by the analytic colliders
//!   in `weft-contact`

pub mod collider;
pub mod constraints;
pub mod forces;
pub mod particle;

pub use collider::Collider;
pub use constraints::{
    dihedral_angle, BendingConstraint, Constraint, ContactConstraint, DistanceConstraint,
    PinConstraint,
};
pub use forces::{AeroFace, AerodynamicForce, Force, GravityForce};
pub use particle::Particle;
