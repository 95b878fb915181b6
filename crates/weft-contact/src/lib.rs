//! # weft-contact
//!
//! Collision support for the Weft cloth engine:
//!
//! - [`SpatialHash`] — uniform-grid broad phase used by the solver's
//!   self-collision pass
//! - [`PlaneCollider`], [`SphereCollider`], [`CapsuleCollider`] — analytic
//!   static colliders implementing the `Collider` seam from `weft-dynamics`
//!
//! Colliders add a skin of the world's contact thickness to their surface
//! and handle friction by rewriting the particle's previous position,
//! which edits the implicit Verlet velocity.

pub mod capsule;
pub mod plane;
pub mod spatial_hash;
pub mod sphere;

pub use capsule::CapsuleCollider;
pub use plane::PlaneCollider;
pub use spatial_hash::SpatialHash;
pub use sphere::SphereCollider;
