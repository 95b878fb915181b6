//! Cloth material parameters.

use serde::{Deserialize, Serialize};
use weft_types::{Scalar, WeftError, WeftResult};

/// Physical parameters of a cloth material.
///
/// Density is areal (kg/m²) and is distributed to particles by triangle
/// area during the builder's mass pass. The compliance values feed the
/// XPBD constraints directly (units: inverse stiffness, m/N).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothMaterial {
    /// Human-readable name (e.g. "cotton").
    pub name: String,

    /// Areal density in kg/m².
    pub density: Scalar,

    /// Compliance of structural (warp/weft) distance constraints.
    pub structural_compliance: Scalar,

    /// Compliance of shear (diagonal) distance constraints.
    pub shear_compliance: Scalar,

    /// Compliance of dihedral bending constraints.
    pub bending_compliance: Scalar,
}

impl Default for ClothMaterial {
    fn default() -> Self {
        Self {
            name: "default".into(),
            density: 0.1,
            structural_compliance: 1.0e-6,
            shear_compliance: 1.0e-6,
            bending_compliance: 1.0e-4,
        }
    }
}

impl ClothMaterial {
    /// Checks that every parameter is in its valid range.
    pub fn validate(&self) -> WeftResult<()> {
        if self.density <= 0.0 {
            return Err(WeftError::InvalidMaterial(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        for (label, value) in [
            ("structural_compliance", self.structural_compliance),
            ("shear_compliance", self.shear_compliance),
            ("bending_compliance", self.bending_compliance),
        ] {
            if value < 0.0 {
                return Err(WeftError::InvalidMaterial(format!(
                    "{label} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
