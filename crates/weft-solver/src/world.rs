//! The world aggregate: cloths, forces, colliders, environment parameters.

use std::sync::Arc;

use weft_contact::{PlaneCollider, SphereCollider};
use weft_dynamics::{Collider, Force};
use weft_types::constants::DEFAULT_CONTACT_THICKNESS;
use weft_types::{Scalar, Vec3};

use crate::cloth::Cloth;

/// Environment and content of a simulation.
///
/// The world is passive: it owns the forces and colliders the solver
/// walks each substep (in insertion order — ordering is part of the
/// simulation semantics) and shared handles to the cloths built into the
/// solver.
pub struct World {
    cloths: Vec<Arc<Cloth>>,
    forces: Vec<Box<dyn Force>>,
    colliders: Vec<Box<dyn Collider>>,
    gravity: Vec3,
    wind: Vec3,
    air_density: Scalar,
    thickness: Scalar,
}

impl World {
    /// Creates an empty world with default environment parameters.
    pub fn new() -> Self {
        Self {
            cloths: Vec::new(),
            forces: Vec::new(),
            colliders: Vec::new(),
            gravity: Vec3::new(0.0, -9.81, 0.0),
            wind: Vec3::ZERO,
            air_density: 0.1,
            thickness: DEFAULT_CONTACT_THICKNESS,
        }
    }

    /// Registers a cloth handle.
    pub fn add_cloth(&mut self, cloth: Arc<Cloth>) {
        self.cloths.push(cloth);
    }

    /// Appends a force. Forces apply in insertion order.
    pub fn add_force(&mut self, force: Box<dyn Force>) {
        self.forces.push(force);
    }

    /// Appends a collider. Colliders resolve in insertion order.
    pub fn add_collider(&mut self, collider: Box<dyn Collider>) {
        self.colliders.push(collider);
    }

    /// Convenience: appends an infinite plane collider.
    pub fn add_plane_collider(&mut self, origin: Vec3, normal: Vec3, friction: Scalar) {
        self.colliders
            .push(Box::new(PlaneCollider::new(origin, normal, friction)));
    }

    /// Convenience: appends a sphere collider.
    pub fn add_sphere_collider(&mut self, center: Vec3, radius: Scalar, friction: Scalar) {
        self.colliders
            .push(Box::new(SphereCollider::new(center, radius, friction)));
    }

    /// Drops all cloths, forces, and colliders.
    pub fn clear(&mut self) {
        self.cloths.clear();
        self.forces.clear();
        self.colliders.clear();
    }

    /// Registered cloths.
    pub fn cloths(&self) -> &[Arc<Cloth>] {
        &self.cloths
    }

    /// Registered colliders.
    pub fn colliders(&self) -> &[Box<dyn Collider>] {
        &self.colliders
    }

    /// Registered forces.
    pub fn forces(&self) -> &[Box<dyn Force>] {
        &self.forces
    }

    /// Mutable access to forces (the aerodynamic gust clock lives inside).
    pub fn forces_mut(&mut self) -> &mut [Box<dyn Force>] {
        &mut self.forces
    }

    /// Gravity acceleration vector.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Sets the gravity acceleration vector.
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Base wind velocity.
    pub fn wind(&self) -> Vec3 {
        self.wind
    }

    /// Sets the base wind velocity.
    pub fn set_wind(&mut self, wind: Vec3) {
        self.wind = wind;
    }

    /// Air density used by aerodynamic forces.
    pub fn air_density(&self) -> Scalar {
        self.air_density
    }

    /// Sets the air density.
    pub fn set_air_density(&mut self, air_density: Scalar) {
        self.air_density = air_density;
    }

    /// Contact thickness: collider skin and self-collision separation.
    pub fn thickness(&self) -> Scalar {
        self.thickness
    }

    /// Sets the contact thickness.
    pub fn set_thickness(&mut self, thickness: Scalar) {
        self.thickness = thickness;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
