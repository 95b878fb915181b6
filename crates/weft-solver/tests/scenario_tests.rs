//! End-to-end simulation scenarios.
//!
//! Each test assembles a full solver + world, runs a fixed number of
//! frames, and checks a coarse physical outcome. Tolerances are loose on
//! purpose: these guard macroscopic behavior, not exact trajectories.

use std::sync::Arc;

use weft_dynamics::{AerodynamicForce, GravityForce, Particle};
use weft_material::ClothMaterial;
use weft_solver::{builder, Cloth, Solver, SolverSettings, World};
use weft_types::{Scalar, Vec3};

const DT: f64 = 1.0 / 60.0;

fn interactive_solver() -> Solver {
    Solver::with_settings(SolverSettings {
        substeps: 10,
        iterations: 5,
        collision_compliance: 1e-9,
    })
}

fn standard_material() -> Arc<ClothMaterial> {
    Arc::new(ClothMaterial {
        name: "test".into(),
        density: 0.1,
        structural_compliance: 1e-6,
        shear_compliance: 1e-6,
        bending_compliance: 1e-4,
    })
}

/// A horizontal `rows × cols` grid in the XZ plane at height `y`,
/// triangulated per quad, for the mesh-import path.
fn horizontal_grid(
    rows: usize,
    cols: usize,
    spacing: Scalar,
    y: Scalar,
) -> (Vec<Vec3>, Vec<usize>) {
    let mut positions = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            positions.push(Vec3::new(c as Scalar * spacing, y, r as Scalar * spacing));
        }
    }
    let mut indices = Vec::new();
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let a = r * cols + c;
            let b = r * cols + c + 1;
            let d = (r + 1) * cols + c;
            let e = (r + 1) * cols + c + 1;
            indices.extend_from_slice(&[a, b, e, a, e, d]);
        }
    }
    (positions, indices)
}

// ─── Drop onto a plane ────────────────────────────────────────

#[test]
fn grid_drop_settles_on_plane() {
    let mut solver = interactive_solver();
    let mut cloth = Cloth::new("drop", standard_material());
    builder::init_grid(10, 10, 0.1, &mut cloth, &mut solver);

    let mut world = World::new();
    world.set_thickness(0.02);
    world.add_force(Box::new(GravityForce::new(Vec3::new(0.0, -9.81, 0.0))));
    world.add_plane_collider(Vec3::ZERO, Vec3::Y, 0.3);

    for _ in 0..120 {
        solver.update(&mut world, DT);
    }

    for (i, p) in solver.particles().iter().enumerate() {
        let y = p.position().y;
        assert!(
            (-1e-3..=0.05).contains(&y),
            "particle {i} should rest in the contact layer, y = {y}"
        );
    }
}

// ─── Hanging sheet ────────────────────────────────────────────

#[test]
fn pinned_row_holds_while_sheet_hangs() {
    let mut solver = interactive_solver();
    let mut cloth = Cloth::new("hanging", standard_material());
    builder::init_grid(10, 10, 0.1, &mut cloth, &mut solver);

    // Hard pins along row 0 at the particles' build positions.
    let mut pin_targets = Vec::new();
    for c in 0..10 {
        let id = cloth.particle_id_at(0, c);
        let target = solver.particles()[id].position();
        solver.add_pin(id, target, 0.0);
        pin_targets.push((id, target));
    }

    let mut world = World::new();
    world.add_force(Box::new(GravityForce::new(Vec3::new(0.0, -9.81, 0.0))));

    for _ in 0..300 {
        solver.update(&mut world, DT);
    }

    for &(id, target) in &pin_targets {
        let drift = (solver.particles()[id].position() - target).length();
        assert!(drift < 1e-6, "pinned particle {id} drifted {drift}");
    }

    // The far row hangs well below the pinned row.
    for c in 0..10 {
        let id = cloth.particle_id_at(9, c);
        let y = solver.particles()[id].position().y;
        assert!(y <= -0.3, "row 9 should dangle below the pins, y = {y}");
    }
}

// ─── Wind deflection ──────────────────────────────────────────

#[test]
fn wind_deflects_hanging_sheet() {
    let mut solver = interactive_solver();
    let mut cloth = Cloth::new("flag", standard_material());
    builder::init_grid(20, 20, 0.05, &mut cloth, &mut solver);

    // Kinematic pins along the top row.
    for c in 0..20 {
        solver.set_particle_inverse_mass(cloth.particle_id_at(19, c), 0.0);
    }

    let mut world = World::new();
    world.set_wind(Vec3::new(5.0, 0.0, 0.0));
    world.set_air_density(0.1);
    world.add_force(Box::new(AerodynamicForce::new(
        cloth.aero_faces().to_vec(),
        world.wind(),
        world.air_density(),
    )));

    for _ in 0..120 {
        solver.update(&mut world, DT);
    }

    let mean_x: f64 = (0..20)
        .map(|c| solver.particles()[cloth.particle_id_at(0, c)].position().x)
        .sum::<f64>()
        / 20.0;
    assert!(mean_x > 0.05, "free edge should sit downwind, mean x = {mean_x}");
}

// ─── Self-collision between stacked sheets ────────────────────

#[test]
fn stacked_sheets_keep_contact_separation() {
    let thickness = 0.05;
    let mut solver = interactive_solver();

    let mut lower = Cloth::new("lower", standard_material());
    let (positions, indices) = horizontal_grid(10, 10, 0.1, 0.0);
    builder::build_from_mesh(&positions, &indices, &mut lower, &mut solver);

    let mut upper = Cloth::new("upper", standard_material());
    let (positions, indices) = horizontal_grid(10, 10, 0.1, 0.03);
    builder::build_from_mesh(&positions, &indices, &mut upper, &mut solver);

    let mut world = World::new();
    world.set_thickness(thickness);

    solver.update(&mut world, DT);

    let mut closest = f64::MAX;
    for &a in lower.particle_ids() {
        for &b in upper.particle_ids() {
            let dist =
                (solver.particles()[a].position() - solver.particles()[b].position()).length();
            closest = closest.min(dist);
        }
    }
    assert!(
        closest >= thickness - 1e-3,
        "sheets should separate to the contact thickness, closest {closest}"
    );
}

// ─── Friction dissipation ─────────────────────────────────────

#[test]
fn friction_drop_dissipates_kinetic_energy() {
    // A horizontal sheet dropped onto a rough plane: once it has landed,
    // windowed kinetic energy must not grow again.
    let mut solver = interactive_solver();
    let mut cloth = Cloth::new("drop", standard_material());
    let (positions, indices) = horizontal_grid(10, 10, 0.1, 0.3);
    builder::build_from_mesh(&positions, &indices, &mut cloth, &mut solver);

    let mut world = World::new();
    world.set_thickness(0.02);
    world.add_force(Box::new(GravityForce::new(Vec3::new(0.0, -9.81, 0.0))));
    world.add_plane_collider(Vec3::ZERO, Vec3::Y, 0.5);

    let kinetic = |solver: &Solver| -> f64 {
        solver
            .particles()
            .iter()
            .filter(|p| p.inverse_mass() > 0.0)
            .map(|p| 0.5 * p.mass() * p.velocity(DT).length_squared())
            .sum()
    };

    let window_avg = |solver: &mut Solver, world: &mut World, frames: u32| -> f64 {
        let mut total = 0.0;
        for _ in 0..frames {
            solver.update(world, DT);
            total += kinetic(solver);
        }
        total / f64::from(frames)
    };

    // Fall and impact.
    for _ in 0..30 {
        solver.update(&mut world, DT);
    }
    let early = window_avg(&mut solver, &mut world, 10);
    // Let friction act.
    for _ in 0..50 {
        solver.update(&mut world, DT);
    }
    let late = window_avg(&mut solver, &mut world, 10);

    assert!(
        late <= early + 1e-9,
        "windowed KE must not grow while settling: early {early}, late {late}"
    );
}

// ─── Sphere rest ──────────────────────────────────────────────

#[test]
fn particle_rests_on_sphere() {
    let mut solver = interactive_solver();
    solver.add_particle(Particle::new(Vec3::new(0.0, 2.0, 0.0)));

    let mut world = World::new();
    world.set_thickness(0.01);
    world.add_force(Box::new(GravityForce::new(Vec3::new(0.0, -9.81, 0.0))));
    world.add_sphere_collider(Vec3::ZERO, 1.0, 0.0);

    for _ in 0..120 {
        solver.update(&mut world, DT);
    }

    let dist = solver.particles()[0].position().length();
    assert!(
        (dist - 1.01).abs() < 1e-3,
        "particle should rest on the offset surface, |p| = {dist}"
    );
}

// ─── Imported mesh at rest ────────────────────────────────────

#[test]
fn imported_quad_stays_at_rest() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];

    let mut solver = interactive_solver();
    let mut cloth = Cloth::new("quad", standard_material());
    builder::build_from_mesh(&positions, &indices, &mut cloth, &mut solver);

    let initial: Vec<Vec3> = solver.particles().iter().map(|p| p.position()).collect();

    // No forces, no pins, no colliders: the rest state must be a fixed
    // point of the whole pipeline.
    let mut world = World::new();
    for _ in 0..60 {
        solver.update(&mut world, DT);
    }

    for (i, p) in solver.particles().iter().enumerate() {
        let displacement = (p.position() - initial[i]).length();
        assert!(
            displacement < 1e-4,
            "particle {i} moved {displacement} from an at-rest import"
        );
    }
}
