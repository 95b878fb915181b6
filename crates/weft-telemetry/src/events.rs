//! Simulation event types.
//!
//! Lightweight value types tagged with a frame index. Variants carry just
//! enough data for monitoring a run without holding particle buffers.

use serde::{Deserialize, Serialize};

/// One telemetry event, tagged with the frame it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A frame is about to be simulated.
    FrameBegin {
        /// Simulation time at the start of the frame (seconds).
        sim_time: f64,
    },

    /// A frame finished.
    FrameEnd {
        /// Wall-clock duration of the frame (seconds).
        wall_time: f64,
    },

    /// Kinetic energy snapshot after a frame.
    Energy {
        /// Total kinetic energy, 0.5·Σ mᵢ‖vᵢ‖² over finite-mass particles.
        kinetic: f64,
    },

    /// Self-collision activity during a frame.
    SelfContacts {
        /// Number of pair corrections applied.
        count: u32,
    },

    /// A frame or mesh export completed.
    Export {
        /// Destination path.
        path: String,
    },
}

impl SimulationEvent {
    /// Creates an event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
