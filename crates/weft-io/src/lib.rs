//! # weft-io
//!
//! The I/O boundary of the Weft engine:
//!
//! - [`config`] — JSON simulation configuration, load/save/validate
//! - [`obj`] — wavefront-style triangle mesh export
//! - [`archive`] — frame-animation archive export (static topology +
//!   per-frame positions at a fixed sample period)
//!
//! Everything here returns `WeftResult`; the simulation core itself never
//! performs I/O.

pub mod archive;
pub mod config;
pub mod obj;
pub mod validator;

pub use archive::FrameArchive;
pub use config::SimulationConfig;
