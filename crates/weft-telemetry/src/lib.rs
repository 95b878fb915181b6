//! # weft-telemetry
//!
//! Structured telemetry for the Weft engine. Drivers (the CLI, the bench
//! runner) emit [`SimulationEvent`]s around solver frames; an [`EventBus`]
//! fans them out to pluggable [`sinks`] (an in-memory vec for tests, a
//! `tracing` bridge for logs).
//!
//! The simulation core never touches this crate — telemetry stays at the
//! driver boundary, and there is no global state.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
