//! Aerodynamic face-pressure force with a gusting wind.

use rayon::prelude::*;
use weft_types::constants::EPS_LENGTH;
use weft_types::{Scalar, Vec3};

use crate::particle::Particle;

use super::Force;

/// A triangle participating in aerodynamic evaluation.
///
/// Usually coincides with a topological triangle of the cloth.
#[derive(Debug, Clone, Copy)]
pub struct AeroFace {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl AeroFace {
    /// Creates an aero face over three particle ids.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

/// Wind pressure applied per face and distributed to its three vertices.
///
/// Keeps an internal clock `τ` advanced by every `apply` call; the
/// effective wind is the base wind scaled by the gust factor
/// `1 + (sin(5τ)·0.5 + 0.5)`.
///
/// Per face with mean velocity `v`, relative flow `v_rel = v - wind`, area
/// vector `n`, the pressure coefficient is `(v_rel·n̂)/‖v_rel‖` and the
/// face force is `-½·ρ·‖v_rel‖²·A·k_p·n̂`, split evenly over the three
/// vertices.
///
/// The per-vertex share is accumulated through `Particle::add_force`
/// without dividing by mass — the integrator consumes the accumulator
/// directly, matching the convention of the rest of the force family.
///
/// Face forces are evaluated in parallel into a staging buffer, then
/// accumulated serially in face order: faces share vertices, and the
/// serial pass keeps the per-particle sums order-stable and the
/// simulation bitwise reproducible.
pub struct AerodynamicForce {
    faces: Vec<AeroFace>,
    face_forces: Vec<Vec3>,
    wind: Vec3,
    air_density: Scalar,
    time: Scalar,
}

/// Relative velocities slower than this produce no measurable pressure.
const EPS_FLOW: Scalar = 1.0e-4;

impl AerodynamicForce {
    /// Creates the force over a face set with a base wind velocity and
    /// air density.
    pub fn new(faces: Vec<AeroFace>, wind: Vec3, air_density: Scalar) -> Self {
        let face_forces = vec![Vec3::ZERO; faces.len()];
        Self {
            faces,
            face_forces,
            wind,
            air_density,
            time: 0.0,
        }
    }

    /// The face set.
    pub fn faces(&self) -> &[AeroFace] {
        &self.faces
    }

    /// Elapsed gust-clock time.
    pub fn time(&self) -> Scalar {
        self.time
    }
}

impl Force for AerodynamicForce {
    fn apply(&mut self, particles: &mut [Particle], dt: Scalar) {
        if dt < EPS_LENGTH {
            return;
        }

        self.time += dt;
        let gust = (self.time * 5.0).sin() * 0.5 + 0.5;
        let wind = self.wind * (1.0 + gust);
        let air_density = self.air_density;

        let faces = &self.faces;
        let shared: &[Particle] = particles;
        self.face_forces
            .par_iter_mut()
            .zip(faces.par_iter())
            .for_each(|(out, face)| {
                *out = face_force(shared, face, wind, air_density, dt);
            });

        for (face, force) in self.faces.iter().zip(&self.face_forces) {
            if *force == Vec3::ZERO {
                continue;
            }
            let share = *force / 3.0;
            particles[face.a].add_force(share);
            particles[face.b].add_force(share);
            particles[face.c].add_force(share);
        }
    }
}

/// Pressure force on a single face; zero for still or degenerate faces.
fn face_force(
    particles: &[Particle],
    face: &AeroFace,
    wind: Vec3,
    air_density: Scalar,
    dt: Scalar,
) -> Vec3 {
    let p_a = &particles[face.a];
    let p_b = &particles[face.b];
    let p_c = &particles[face.c];

    let v_face = (p_a.velocity(dt) + p_b.velocity(dt) + p_c.velocity(dt)) / 3.0;
    let v_rel = v_face - wind;
    let v_mag = v_rel.length();
    if v_mag < EPS_FLOW {
        return Vec3::ZERO;
    }

    let edge1 = p_b.position() - p_a.position();
    let edge2 = p_c.position() - p_a.position();
    let n = edge1.cross(edge2);
    let area = 0.5 * n.length();
    if area < EPS_LENGTH {
        return Vec3::ZERO;
    }

    let normal = n / n.length();
    let pressure = v_rel.dot(normal) / v_mag;

    normal * (-0.5 * air_density * v_mag * v_mag * area * pressure)
}
