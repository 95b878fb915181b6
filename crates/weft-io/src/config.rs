//! JSON simulation configuration.
//!
//! Schema:
//!
//! ```json
//! {
//!   "simulation":   { "substeps": 10, "iterations": 5, "gravity": [0, -9.81, 0] },
//!   "material":     { "density": 0.1,
//!                     "compliance": { "structural": 1e-6, "shear": 1e-6, "bending": 1e-4 } },
//!   "aerodynamics": { "wind_velocity": [5, 0, 0], "air_density": 0.1 },
//!   "collisions":   { "thickness": 0.08 }
//! }
//! ```
//!
//! Sections and keys are all optional. A missing section leaves the target
//! untouched; a missing key inside a present section falls back to its
//! default. Parse failures are reported to the caller; they never abort the
//! host.

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_material::ClothMaterial;
use weft_solver::{Solver, World};
use weft_types::{Scalar, Vec3, WeftError, WeftResult};

/// Root of the configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aerodynamics: Option<AerodynamicsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collisions: Option<CollisionsSection>,
}

/// Solver loop parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub substeps: u32,
    pub iterations: u32,
    /// Gravity vector. Absent means "keep the caller's gravity".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<[Scalar; 3]>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            substeps: 10,
            iterations: 5,
            gravity: None,
        }
    }
}

/// Cloth material parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSection {
    pub density: Scalar,
    pub compliance: ComplianceSection,
}

impl Default for MaterialSection {
    fn default() -> Self {
        Self {
            density: 0.1,
            compliance: ComplianceSection::default(),
        }
    }
}

/// Per-constraint-family compliance values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceSection {
    pub structural: Scalar,
    pub shear: Scalar,
    pub bending: Scalar,
}

impl Default for ComplianceSection {
    fn default() -> Self {
        Self {
            structural: 1.0e-6,
            shear: 1.0e-6,
            bending: 1.0e-4,
        }
    }
}

/// Wind parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicsSection {
    pub wind_velocity: [Scalar; 3],
    pub air_density: Scalar,
}

impl Default for AerodynamicsSection {
    fn default() -> Self {
        Self {
            wind_velocity: [5.0, 0.0, 0.0],
            air_density: 0.1,
        }
    }
}

/// Contact parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionsSection {
    pub thickness: Scalar,
}

impl Default for CollisionsSection {
    fn default() -> Self {
        Self { thickness: 0.08 }
    }
}

impl SimulationConfig {
    /// Parses a configuration document from JSON text.
    pub fn from_json(text: &str) -> WeftResult<Self> {
        serde_json::from_str(text).map_err(|e| WeftError::Serialization(e.to_string()))
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> WeftResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WeftError::Serialization(e.to_string()))
    }

    /// Applies every present section onto the solver, world, and material.
    pub fn apply(&self, solver: &mut Solver, world: &mut World, material: &mut ClothMaterial) {
        if let Some(sim) = &self.simulation {
            solver.set_substeps(sim.substeps);
            solver.set_iterations(sim.iterations);
            if let Some([gx, gy, gz]) = sim.gravity {
                world.set_gravity(Vec3::new(gx, gy, gz));
            }
        }

        if let Some(mat) = &self.material {
            material.density = mat.density;
            material.structural_compliance = mat.compliance.structural;
            material.shear_compliance = mat.compliance.shear;
            material.bending_compliance = mat.compliance.bending;
        }

        if let Some(aero) = &self.aerodynamics {
            let [wx, wy, wz] = aero.wind_velocity;
            world.set_wind(Vec3::new(wx, wy, wz));
            world.set_air_density(aero.air_density);
        }

        if let Some(col) = &self.collisions {
            world.set_thickness(col.thickness);
        }
    }

    /// Builds a cloth material from the material section, falling back to
    /// defaults when the section is absent.
    pub fn material(&self) -> ClothMaterial {
        let section = self.material.clone().unwrap_or_default();
        ClothMaterial {
            name: "config".into(),
            density: section.density,
            structural_compliance: section.compliance.structural,
            shear_compliance: section.compliance.shear,
            bending_compliance: section.compliance.bending,
        }
    }

    /// Captures the current solver, world, and material state into a
    /// complete configuration document.
    pub fn capture(solver: &Solver, world: &World, material: &ClothMaterial) -> Self {
        let gravity = world.gravity();
        let wind = world.wind();
        Self {
            simulation: Some(SimulationSection {
                substeps: solver.substeps(),
                iterations: solver.iterations(),
                gravity: Some([gravity.x, gravity.y, gravity.z]),
            }),
            material: Some(MaterialSection {
                density: material.density,
                compliance: ComplianceSection {
                    structural: material.structural_compliance,
                    shear: material.shear_compliance,
                    bending: material.bending_compliance,
                },
            }),
            aerodynamics: Some(AerodynamicsSection {
                wind_velocity: [wind.x, wind.y, wind.z],
                air_density: world.air_density(),
            }),
            collisions: Some(CollisionsSection {
                thickness: world.thickness(),
            }),
        }
    }
}

/// Loads a configuration file and applies it.
pub fn load(
    path: impl AsRef<Path>,
    solver: &mut Solver,
    world: &mut World,
    material: &mut ClothMaterial,
) -> WeftResult<()> {
    let text = std::fs::read_to_string(path)?;
    let config = SimulationConfig::from_json(&text)?;
    config.apply(solver, world, material);
    Ok(())
}

/// Captures the current state and writes it as a configuration file.
pub fn save(
    path: impl AsRef<Path>,
    solver: &Solver,
    world: &World,
    material: &ClothMaterial,
) -> WeftResult<()> {
    let config = SimulationConfig::capture(solver, world, material);
    std::fs::write(path, config.to_json()?)?;
    Ok(())
}
