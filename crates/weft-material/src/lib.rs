//! # weft-material
//!
//! Cloth material parameters for the Weft engine.
//!
//! A [`ClothMaterial`] carries areal density plus the three compliance
//! values (structural, shear, bending) the constraint builder consumes.
//! Compliance is inverse stiffness: zero means a hard constraint, larger
//! values mean softer response.

pub mod library;
pub mod material;

pub use library::MaterialLibrary;
pub use material::ClothMaterial;
