//! # weft-bench
//!
//! Canonical simulation scenarios and a benchmark runner for the Weft
//! engine.
//!
//! A [`Scenario`] assembles a complete solver + world; the
//! [`BenchRunner`] steps it for a fixed frame count, emits telemetry, and
//! collects [`RunMetrics`] (wall time, final kinetic energy, maximum
//! displacement, self-contact activity) for regression tracking and CSV
//! output.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::RunMetrics;
pub use runner::BenchRunner;
pub use scenarios::{Scenario, ScenarioKind};
