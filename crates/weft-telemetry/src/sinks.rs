//! Pluggable event consumers.

use crate::events::SimulationEvent;

/// An event consumer fed by [`crate::EventBus::flush`].
pub trait EventSink: Send {
    /// Processes one event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the run ends. Flush buffers, close files.
    fn finalize(&mut self) {}

    /// Human-readable sink name.
    fn name(&self) -> &str;
}

/// Collects events into a vec. Meant for tests and inspection.
pub struct VecSink {
    /// Every event seen so far.
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec"
    }
}

/// Bridges events into the `tracing` ecosystem as info-level records.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        tracing::info!(frame = event.frame, kind = ?event.kind, "simulation event");
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
