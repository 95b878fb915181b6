//! Scenario runner: steps an assembled scenario and collects metrics.

use std::time::Instant;

use weft_telemetry::{EventBus, EventKind, SimulationEvent};
use weft_types::Vec3;

use crate::metrics::{kinetic_energy, RunMetrics};
use crate::scenarios::Scenario;

/// Executes scenarios frame by frame.
pub struct BenchRunner;

impl BenchRunner {
    /// Runs one scenario to completion.
    ///
    /// When a bus is supplied, frame begin/end, energy, and self-contact
    /// events are emitted and flushed once per frame.
    pub fn run(scenario: &Scenario, bus: Option<&mut EventBus>) -> RunMetrics {
        let mut assembled = scenario.assemble();
        let initial: Vec<Vec3> = assembled
            .solver
            .particles()
            .iter()
            .map(|p| p.position())
            .collect();

        let mut bus = bus;
        let total_start = Instant::now();

        for frame in 0..scenario.frames {
            let frame_start = Instant::now();
            if let Some(bus) = bus.as_deref_mut() {
                bus.emit(SimulationEvent::new(
                    frame,
                    EventKind::FrameBegin {
                        sim_time: f64::from(frame) * scenario.dt,
                    },
                ));
            }

            assembled.solver.update(&mut assembled.world, scenario.dt);

            if let Some(bus) = bus.as_deref_mut() {
                bus.emit(SimulationEvent::new(
                    frame,
                    EventKind::FrameEnd {
                        wall_time: frame_start.elapsed().as_secs_f64(),
                    },
                ));
                bus.emit(SimulationEvent::new(
                    frame,
                    EventKind::Energy {
                        kinetic: kinetic_energy(assembled.solver.particles(), scenario.dt),
                    },
                ));
                bus.emit(SimulationEvent::new(
                    frame,
                    EventKind::SelfContacts {
                        count: assembled.solver.self_contact_count(),
                    },
                ));
                bus.flush();
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = assembled
            .solver
            .particles()
            .iter()
            .zip(&initial)
            .map(|(p, &start)| (p.position() - start).length())
            .fold(0.0_f64, f64::max);

        RunMetrics {
            scenario: scenario.kind.name().to_string(),
            particles: assembled.solver.particle_count(),
            constraints: assembled.solver.constraint_count(),
            frames: scenario.frames,
            total_wall_time,
            avg_frame_time: if scenario.frames > 0 {
                total_wall_time / f64::from(scenario.frames)
            } else {
                0.0
            },
            final_kinetic_energy: kinetic_energy(assembled.solver.particles(), scenario.dt),
            max_displacement,
            final_self_contacts: assembled.solver.self_contact_count(),
        }
    }

    /// Runs every canonical scenario.
    pub fn run_all(bus: Option<&mut EventBus>) -> Vec<RunMetrics> {
        use crate::scenarios::ScenarioKind;
        let mut bus = bus;
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario, bus.as_deref_mut()));
        }
        results
    }
}
