//! Configuration validation.
//!
//! Catches out-of-range values before a config is applied, with
//! field-level diagnostics.

use weft_types::{WeftError, WeftResult};

use crate::config::SimulationConfig;

/// Validates every present section of a configuration document.
pub fn validate_config(config: &SimulationConfig) -> WeftResult<()> {
    if let Some(sim) = &config.simulation {
        if sim.substeps == 0 {
            return Err(WeftError::InvalidConfig("substeps must be >= 1".into()));
        }
        if sim.iterations == 0 {
            return Err(WeftError::InvalidConfig("iterations must be >= 1".into()));
        }
        if let Some(gravity) = sim.gravity {
            if gravity.iter().any(|g| !g.is_finite()) {
                return Err(WeftError::InvalidConfig(
                    "gravity components must be finite".into(),
                ));
            }
        }
    }

    if let Some(mat) = &config.material {
        if mat.density <= 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "material density must be positive, got {}",
                mat.density
            )));
        }
        for (label, value) in [
            ("structural", mat.compliance.structural),
            ("shear", mat.compliance.shear),
            ("bending", mat.compliance.bending),
        ] {
            if value < 0.0 {
                return Err(WeftError::InvalidConfig(format!(
                    "{label} compliance must be non-negative, got {value}"
                )));
            }
        }
    }

    if let Some(aero) = &config.aerodynamics {
        if aero.air_density < 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "air density must be non-negative, got {}",
                aero.air_density
            )));
        }
        if aero.wind_velocity.iter().any(|w| !w.is_finite()) {
            return Err(WeftError::InvalidConfig(
                "wind components must be finite".into(),
            ));
        }
    }

    if let Some(col) = &config.collisions {
        if col.thickness < 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "contact thickness must be non-negative, got {}",
                col.thickness
            )));
        }
    }

    Ok(())
}
