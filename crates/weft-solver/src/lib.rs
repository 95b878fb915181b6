//! # weft-solver
//!
//! The simulation core of the Weft engine: the XPBD [`Solver`], the
//! [`World`] aggregate, the [`Cloth`] topology record, and the
//! [`builder`] that synthesizes cloth constraints from a grid or an
//! imported triangle mesh.
//!
//! ## Frame pipeline
//!
//! `Solver::update(world, Δt)` sizes the spatial hash to the world's
//! contact thickness, rebuilds it once, then runs S substeps of:
//!
//! 1. zero accelerations, apply every force
//! 2. Verlet-predict every particle (parallel)
//! 3. reset multipliers, run I Gauss–Seidel iterations over all
//!    constraints in insertion order
//! 4. resolve every collider in insertion order
//! 5. one self-collision pass over the spatial hash

pub mod builder;
pub mod cloth;
pub mod config;
pub mod solver;
pub mod world;

pub use cloth::Cloth;
pub use config::SolverSettings;
pub use solver::Solver;
pub use world::World;
