//! Integration tests for weft-material.

use weft_material::{ClothMaterial, MaterialLibrary};

#[test]
fn default_material_is_valid() {
    let mat = ClothMaterial::default();
    assert!(mat.validate().is_ok());
    assert_eq!(mat.density, 0.1);
    assert_eq!(mat.structural_compliance, 1e-6);
    assert_eq!(mat.bending_compliance, 1e-4);
}

#[test]
fn negative_compliance_rejected() {
    let mat = ClothMaterial {
        bending_compliance: -1.0,
        ..Default::default()
    };
    assert!(mat.validate().is_err());
}

#[test]
fn zero_density_rejected() {
    let mat = ClothMaterial {
        density: 0.0,
        ..Default::default()
    };
    assert!(mat.validate().is_err());
}

#[test]
fn library_presets_present_and_valid() {
    let lib = MaterialLibrary::with_defaults();
    assert_eq!(lib.len(), 5);
    for name in ["cotton", "silk", "denim", "canvas", "chiffon"] {
        let mat = lib.get(name).unwrap_or_else(|| panic!("missing preset {name}"));
        assert!(mat.validate().is_ok(), "preset {name} should be valid");
    }
}

#[test]
fn library_lookup_shares_material() {
    let lib = MaterialLibrary::with_defaults();
    let a = lib.get("denim").unwrap();
    let b = lib.get("denim").unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn library_register_overwrites() {
    let mut lib = MaterialLibrary::empty();
    assert!(lib.is_empty());
    lib.register(ClothMaterial {
        name: "custom".into(),
        ..Default::default()
    });
    lib.register(ClothMaterial {
        name: "custom".into(),
        density: 0.5,
        ..Default::default()
    });
    assert_eq!(lib.len(), 1);
    assert_eq!(lib.get("custom").unwrap().density, 0.5);
}

#[test]
fn denim_stiffer_than_silk() {
    let lib = MaterialLibrary::with_defaults();
    let denim = lib.get("denim").unwrap();
    let silk = lib.get("silk").unwrap();
    assert!(denim.bending_compliance < silk.bending_compliance);
    assert!(denim.structural_compliance < silk.structural_compliance);
}

#[test]
fn material_serde_roundtrip() {
    let mat = ClothMaterial::default();
    let json = serde_json::to_string(&mat).unwrap();
    let back: ClothMaterial = serde_json::from_str(&json).unwrap();
    assert_eq!(back.density, mat.density);
    assert_eq!(back.shear_compliance, mat.shear_compliance);
}
