//! CLI command implementations.

use std::sync::Arc;

use weft_bench::{BenchRunner, RunMetrics, Scenario, ScenarioKind};
use weft_io::validator::validate_config;
use weft_io::{FrameArchive, SimulationConfig};
use weft_telemetry::{EventBus, TracingSink};
use weft_types::Vec3;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn parse_kind(name: &str) -> Result<ScenarioKind, Box<dyn std::error::Error>> {
    ScenarioKind::parse(name).ok_or_else(|| {
        format!(
            "unknown scenario '{name}' (available: grid_drop, hanging_sheet, wind_sheet, sphere_drape)"
        )
        .into()
    })
}

/// Run a scenario with solver/world/material parameters from a config file.
pub fn simulate(config_path: &str, scenario_name: &str, frames: u32) -> CommandResult {
    let text = std::fs::read_to_string(config_path)?;
    let config = SimulationConfig::from_json(&text)?;
    validate_config(&config)?;

    let kind = parse_kind(scenario_name)?;
    let scenario = Scenario {
        frames,
        ..Scenario::from_kind(kind)
    }
    .with_material(Arc::new(config.material()));

    let mut assembled = scenario.assemble();
    let mut material = config.material();
    config.apply(&mut assembled.solver, &mut assembled.world, &mut material);

    tracing::info!(
        scenario = kind.name(),
        particles = assembled.solver.particle_count(),
        constraints = assembled.solver.constraint_count(),
        substeps = assembled.solver.substeps(),
        iterations = assembled.solver.iterations(),
        "starting simulation"
    );

    let start = std::time::Instant::now();
    for _ in 0..frames {
        assembled.solver.update(&mut assembled.world, scenario.dt);
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!("Simulated {frames} frames in {elapsed:.3}s");
    println!(
        "  {} particles, {} constraints, {:.3} ms/frame",
        assembled.solver.particle_count(),
        assembled.solver.constraint_count(),
        elapsed / f64::from(frames.max(1)) * 1000.0,
    );
    Ok(())
}

/// Run the benchmark suite and report CSV metrics.
pub fn bench(
    scenario_name: &str,
    output_path: Option<&str>,
    material_name: Option<&str>,
) -> CommandResult {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink));

    let material = match material_name {
        Some(name) => Some(
            weft_material::MaterialLibrary::with_defaults()
                .get(name)
                .ok_or_else(|| format!("unknown material preset '{name}'"))?,
        ),
        None => None,
    };

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![parse_kind(scenario_name)?]
    };

    let mut all_metrics = Vec::new();
    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(ref material) = material {
            scenario = scenario.with_material(material.clone());
        }

        println!(
            "Running {} ({} frames)...",
            kind.name(),
            scenario.frames
        );
        let metrics = BenchRunner::run(&scenario, Some(&mut bus));
        println!("  wall time:      {:.3}s", metrics.total_wall_time);
        println!("  avg frame:      {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  final KE:       {:.6e}", metrics.final_kinetic_energy);
        println!("  max displace:   {:.4}m", metrics.max_displacement);
        all_metrics.push(metrics);
    }
    bus.shutdown();

    let csv = RunMetrics::to_csv(&all_metrics);
    match output_path {
        Some(path) => {
            std::fs::write(path, &csv)?;
            println!("Results written to {path}");
        }
        None => println!("{csv}"),
    }
    Ok(())
}

/// Run a scenario and export its animation or final mesh.
pub fn export(scenario_name: &str, output_path: &str, frames: u32) -> CommandResult {
    let kind = parse_kind(scenario_name)?;
    let scenario = Scenario {
        frames,
        ..Scenario::from_kind(kind)
    };
    let mut assembled = scenario.assemble();

    if output_path.ends_with(".obj") {
        // Simulate, then write the final pose as a mesh.
        for _ in 0..frames {
            assembled.solver.update(&mut assembled.world, scenario.dt);
        }
        weft_io::obj::export_obj(output_path, &assembled.cloth, &assembled.solver)?;
        println!("Final mesh written to {output_path}");
        return Ok(());
    }

    // Frame archive: local indices relative to the cloth's particle list.
    let cloth = assembled.cloth.clone();
    let local_index: std::collections::HashMap<usize, usize> = cloth
        .particle_ids()
        .iter()
        .enumerate()
        .map(|(local, &global)| (global, local))
        .collect();
    let face_indices: Vec<usize> = cloth
        .triangles()
        .iter()
        .flat_map(|t| [local_index[&t.a], local_index[&t.b], local_index[&t.c]])
        .collect();

    let cloth_positions = |solver: &weft_solver::Solver| -> Vec<Vec3> {
        cloth
            .particle_ids()
            .iter()
            .map(|&id| solver.particles()[id].position())
            .collect()
    };

    let mut archive = FrameArchive::open(
        output_path,
        &cloth_positions(&assembled.solver),
        &face_indices,
        scenario.dt,
    );
    for frame in 0..frames {
        assembled.solver.update(&mut assembled.world, scenario.dt);
        archive.write_frame(
            &cloth_positions(&assembled.solver),
            f64::from(frame + 1) * scenario.dt,
        );
    }
    archive.close()?;
    println!(
        "Animation with {} frames written to {output_path}",
        frames + 1
    );
    Ok(())
}

/// Validate a simulation config file.
pub fn validate(path: &str) -> CommandResult {
    let text = std::fs::read_to_string(path)?;
    let config = SimulationConfig::from_json(&text)?;
    validate_config(&config)?;
    println!("{path} is a valid simulation config.");
    Ok(())
}
