//! Material library with named fabric presets.
//!
//! Presets are rough but plausible: stiff fabrics get low compliance,
//! flowing fabrics get high bending compliance and low density.

use std::collections::HashMap;
use std::sync::Arc;

use crate::material::ClothMaterial;

/// A named collection of cloth material presets.
///
/// Materials are stored behind `Arc` so several cloths can share one
/// material without copying.
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    materials: HashMap<String, Arc<ClothMaterial>>,
}

impl MaterialLibrary {
    /// Creates a library with the built-in fabric presets.
    pub fn with_defaults() -> Self {
        let mut lib = Self {
            materials: HashMap::new(),
        };
        lib.register(cotton());
        lib.register(silk());
        lib.register(denim());
        lib.register(canvas());
        lib.register(chiffon());
        lib
    }

    /// Creates an empty library.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material, overwriting any preset with the same name.
    pub fn register(&mut self, material: ClothMaterial) {
        self.materials
            .insert(material.name.clone(), Arc::new(material));
    }

    /// Looks up a material by name.
    pub fn get(&self, name: &str) -> Option<Arc<ClothMaterial>> {
        self.materials.get(name).cloned()
    }

    /// All registered material names.
    pub fn names(&self) -> Vec<&str> {
        self.materials.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True if no materials are registered.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Medium-weight woven cotton. Holds shape with defined folds.
fn cotton() -> ClothMaterial {
    ClothMaterial {
        name: "cotton".into(),
        density: 0.2,
        structural_compliance: 1.0e-6,
        shear_compliance: 2.0e-6,
        bending_compliance: 1.0e-4,
    }
}

/// Lightweight silk. Soft drape, many small folds.
fn silk() -> ClothMaterial {
    ClothMaterial {
        name: "silk".into(),
        density: 0.08,
        structural_compliance: 2.0e-6,
        shear_compliance: 5.0e-6,
        bending_compliance: 1.0e-3,
    }
}

/// Heavy denim. Resists stretch and bend, sharp creases.
fn denim() -> ClothMaterial {
    ClothMaterial {
        name: "denim".into(),
        density: 0.4,
        structural_compliance: 5.0e-7,
        shear_compliance: 1.0e-6,
        bending_compliance: 2.0e-5,
    }
}

/// Stiff canvas. Nearly inextensible.
fn canvas() -> ClothMaterial {
    ClothMaterial {
        name: "canvas".into(),
        density: 0.35,
        structural_compliance: 2.0e-7,
        shear_compliance: 5.0e-7,
        bending_compliance: 1.0e-5,
    }
}

/// Ultra-light chiffon. Minimal structure, maximum flow.
fn chiffon() -> ClothMaterial {
    ClothMaterial {
        name: "chiffon".into(),
        density: 0.05,
        structural_compliance: 5.0e-6,
        shear_compliance: 1.0e-5,
        bending_compliance: 5.0e-3,
    }
}
