//! Solver settings.

use serde::{Deserialize, Serialize};
use weft_types::constants::{
    DEFAULT_COLLISION_COMPLIANCE, DEFAULT_ITERATIONS, DEFAULT_SUBSTEPS,
};
use weft_types::Scalar;

/// Parameters that control the solver loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Number of substeps each frame is divided into.
    pub substeps: u32,

    /// Gauss–Seidel iterations over all constraints per substep.
    pub iterations: u32,

    /// Compliance regularizing self-collision contacts.
    pub collision_compliance: Scalar,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            substeps: DEFAULT_SUBSTEPS,
            iterations: DEFAULT_ITERATIONS,
            collision_compliance: DEFAULT_COLLISION_COMPLIANCE,
        }
    }
}

impl SolverSettings {
    /// Settings matching the interactive-config defaults: fewer substeps,
    /// more iterations per substep.
    pub fn interactive() -> Self {
        Self {
            substeps: 10,
            iterations: 5,
            ..Default::default()
        }
    }

    /// High-quality settings for offline export.
    pub fn offline() -> Self {
        Self {
            substeps: 30,
            iterations: 4,
            ..Default::default()
        }
    }
}
