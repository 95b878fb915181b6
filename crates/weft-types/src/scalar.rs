//! Scalar and vector type aliases for the simulation.
//!
//! The engine is CPU-only, so it runs in double precision throughout:
//! the XPBD denominators mix quantities spanning ~12 orders of magnitude
//! (compliance over dt² against inverse masses), which is uncomfortable
//! in f32.

/// The floating-point type used throughout the simulation.
pub type Scalar = f64;

/// The canonical 3-component vector type.
///
/// Re-exported from `glam` so downstream crates never name `glam` directly.
pub use glam::DVec3 as Vec3;
