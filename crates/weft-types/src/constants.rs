//! Physical constants, solver defaults, and numerical guard thresholds.

use crate::scalar::Scalar;

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: Scalar = 9.81;

/// Default frame timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: Scalar = 1.0 / 60.0;

/// Default number of substeps per frame.
pub const DEFAULT_SUBSTEPS: u32 = 15;

/// Default number of constraint iterations per substep.
pub const DEFAULT_ITERATIONS: u32 = 2;

/// Default compliance of self-collision contacts.
pub const DEFAULT_COLLISION_COMPLIANCE: Scalar = 1.0e-9;

/// Default contact thickness (meters). Skin radius for colliders and the
/// target separation for self-collision.
pub const DEFAULT_CONTACT_THICKNESS: Scalar = 0.02;

/// Default spatial hash table size. Prime, so cell coordinates spread
/// evenly over the buckets.
pub const DEFAULT_HASH_TABLE_SIZE: usize = 10007;

/// Lengths below this are treated as degenerate.
pub const EPS_LENGTH: Scalar = 1.0e-6;

/// Squared norms below this are treated as degenerate.
pub const EPS_NORM_SQ: Scalar = 1.0e-8;

/// Denominators below this would amplify noise; the update is skipped.
pub const EPS_DENOM: Scalar = 1.0e-12;

/// Timesteps below this yield no meaningful implicit velocity.
pub const EPS_VELOCITY_DT: Scalar = 1.0e-7;
