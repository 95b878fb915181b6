//! Metrics collected from a scenario run.

use serde::{Deserialize, Serialize};
use weft_dynamics::Particle;
use weft_types::Scalar;

/// Aggregate metrics from one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Particle count.
    pub particles: usize,
    /// Constraint count.
    pub constraints: usize,
    /// Frames simulated.
    pub frames: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    /// Final kinetic energy (approaches zero as a drape settles).
    pub final_kinetic_energy: f64,
    /// Largest displacement of any particle from its build position.
    pub max_displacement: Scalar,
    /// Self-collision corrections during the last frame.
    pub final_self_contacts: u32,
}

impl RunMetrics {
    /// CSV header matching [`RunMetrics::to_csv_row`].
    pub fn csv_header() -> String {
        "scenario,particles,constraints,frames,total_wall_time_s,avg_frame_ms,final_ke,max_displacement,final_self_contacts"
            .to_string()
    }

    /// This run as one CSV row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.6e},{:.6},{}",
            self.scenario,
            self.particles,
            self.constraints,
            self.frames,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.final_self_contacts,
        )
    }

    /// Formats a batch of runs as a complete CSV document.
    pub fn to_csv(runs: &[RunMetrics]) -> String {
        let mut csv = Self::csv_header();
        for run in runs {
            csv.push('\n');
            csv.push_str(&run.to_csv_row());
        }
        csv
    }
}

/// Total kinetic energy of a particle set: 0.5·Σ mᵢ‖vᵢ‖², skipping
/// kinematic particles.
pub fn kinetic_energy(particles: &[Particle], dt: Scalar) -> f64 {
    particles
        .iter()
        .filter(|p| p.inverse_mass() > 0.0 && p.mass() > 0.0)
        .map(|p| 0.5 * p.mass() * p.velocity(dt).length_squared())
        .sum()
}
