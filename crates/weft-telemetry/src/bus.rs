//! Event bus with fan-out to registered sinks.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Collects events from the driver side and dispatches them to sinks.
///
/// Emission goes through an mpsc channel, so `emit` never blocks on sink
/// work; [`EventBus::flush`] drains the channel into every sink. Call it
/// at frame boundaries or at shutdown.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
}

impl EventBus {
    /// Creates a bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. A disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True if events are being accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event for dispatch.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        let _ = self.sender.send(event);
    }

    /// Drains queued events into every registered sink.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flushes, then finalizes every sink.
    pub fn shutdown(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
