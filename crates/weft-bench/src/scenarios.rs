//! Canonical scenarios: procedural setup of solver, world, and cloth.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use weft_dynamics::{AerodynamicForce, GravityForce};
use weft_material::{ClothMaterial, MaterialLibrary};
use weft_solver::{builder, Cloth, Solver, SolverSettings, World};
use weft_types::{Scalar, Vec3};

/// Which canonical scenario to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// A sheet dropped onto a ground plane with friction.
    GridDrop,
    /// A sheet pinned along one row, draping under gravity.
    HangingSheet,
    /// A pinned sheet deflected by a gusting wind, no gravity.
    WindSheet,
    /// A free sheet falling onto a sphere.
    SphereDrape,
}

impl ScenarioKind {
    /// All scenario kinds, in canonical order.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::GridDrop,
            ScenarioKind::HangingSheet,
            ScenarioKind::WindSheet,
            ScenarioKind::SphereDrape,
        ]
    }

    /// Stable machine name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::GridDrop => "grid_drop",
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::WindSheet => "wind_sheet",
            ScenarioKind::SphereDrape => "sphere_drape",
        }
    }

    /// Parses a machine name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "grid_drop" => Some(ScenarioKind::GridDrop),
            "hanging_sheet" => Some(ScenarioKind::HangingSheet),
            "wind_sheet" => Some(ScenarioKind::WindSheet),
            "sphere_drape" => Some(ScenarioKind::SphereDrape),
            _ => None,
        }
    }
}

/// A fully specified scenario, ready to assemble.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Particle spacing (meters).
    pub spacing: Scalar,
    /// Frames to simulate.
    pub frames: u32,
    /// Frame timestep (seconds).
    pub dt: Scalar,
    /// Cloth material.
    pub material: Arc<ClothMaterial>,
    /// Solver settings.
    pub settings: SolverSettings,
}

/// Everything the runner needs: a built solver, the world, and the cloth.
pub struct Assembled {
    pub solver: Solver,
    pub world: World,
    pub cloth: Arc<Cloth>,
}

impl Scenario {
    /// Creates the scenario for a kind with its default parameters.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        let material = MaterialLibrary::with_defaults()
            .get("cotton")
            .unwrap_or_else(|| Arc::new(ClothMaterial::default()));
        let base = Self {
            kind,
            rows: 10,
            cols: 10,
            spacing: 0.1,
            frames: 120,
            dt: 1.0 / 60.0,
            material,
            settings: SolverSettings::interactive(),
        };
        match kind {
            ScenarioKind::GridDrop => base,
            ScenarioKind::HangingSheet => Self { frames: 300, ..base },
            ScenarioKind::WindSheet => Self {
                rows: 20,
                cols: 20,
                spacing: 0.05,
                ..base
            },
            ScenarioKind::SphereDrape => Self { frames: 180, ..base },
        }
    }

    /// Replaces the scenario material.
    pub fn with_material(mut self, material: Arc<ClothMaterial>) -> Self {
        self.material = material;
        self
    }

    /// Builds the solver, world, and cloth for this scenario.
    pub fn assemble(&self) -> Assembled {
        let mut solver = Solver::with_settings(self.settings.clone());
        let mut cloth = Cloth::new(self.kind.name(), self.material.clone());
        builder::init_grid(self.rows, self.cols, self.spacing, &mut cloth, &mut solver);

        let mut world = World::new();

        match self.kind {
            ScenarioKind::GridDrop => {
                world.set_thickness(0.02);
                world.add_force(Box::new(GravityForce::new(world.gravity())));
                world.add_plane_collider(Vec3::ZERO, Vec3::Y, 0.3);
            }
            ScenarioKind::HangingSheet => {
                for c in 0..self.cols {
                    let id = cloth.particle_id_at(0, c);
                    let target = solver.particles()[id].position();
                    solver.add_pin(id, target, 0.0);
                }
                world.add_force(Box::new(GravityForce::new(world.gravity())));
            }
            ScenarioKind::WindSheet => {
                for c in 0..self.cols {
                    solver.set_particle_inverse_mass(cloth.particle_id_at(self.rows - 1, c), 0.0);
                }
                world.set_wind(Vec3::new(5.0, 0.0, 0.0));
                world.add_force(Box::new(AerodynamicForce::new(
                    cloth.aero_faces().to_vec(),
                    world.wind(),
                    world.air_density(),
                )));
            }
            ScenarioKind::SphereDrape => {
                world.set_thickness(0.01);
                world.add_force(Box::new(GravityForce::new(world.gravity())));
                world.add_sphere_collider(Vec3::new(0.45, -0.5, 0.1), 0.3, 0.4);
            }
        }

        let cloth = Arc::new(cloth);
        world.add_cloth(cloth.clone());
        Assembled {
            solver,
            world,
            cloth,
        }
    }
}
