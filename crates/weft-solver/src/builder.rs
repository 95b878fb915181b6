//! Cloth topology builder.
//!
//! Synthesizes particles and constraints into a [`Solver`] from either a
//! regular grid or an imported triangle soup, recording the resulting
//! topology on a [`Cloth`].
//!
//! Builders expect a cleared solver region: re-invoking a builder against
//! particles that already carry mass double-counts the mass pass.

use std::collections::BTreeSet;

use weft_dynamics::{dihedral_angle, Particle};
use weft_mesh::{triangle_area, Edge, Topology, Triangle};
use weft_types::{Scalar, Vec3};

use crate::cloth::Cloth;
use crate::solver::Solver;

/// Builds a regular `rows × cols` grid of particles in the XY plane with
/// structural, shear, and bending constraints.
///
/// Per grid cell `(r, c)`:
/// - structural distance constraints to `(r, c+1)` and `(r+1, c)`
/// - two shear diagonals across the quad
/// - one bending constraint hinged on the `(r, c)`–`(r+1, c+1)` diagonal
///   with rest angle 0
/// - two triangles splitting the quad along that diagonal
///
/// Ends with the mass/aero pass. Empty grids produce an empty cloth.
pub fn init_grid(
    rows: usize,
    cols: usize,
    spacing: Scalar,
    cloth: &mut Cloth,
    solver: &mut Solver,
) {
    cloth.clear();
    cloth.set_grid_dimensions(rows, cols);

    let material = cloth.material().clone();
    let structural = material.structural_compliance;
    let shear = material.shear_compliance;
    let bending = material.bending_compliance;

    let mut grid_ids = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let pos = Vec3::new(c as Scalar * spacing, r as Scalar * spacing, 0.0);
            let id = solver.add_particle(Particle::new(pos));
            grid_ids.push(id);
            cloth.add_particle_id(id);
        }
    }

    let id_at = |r: usize, c: usize| grid_ids[r * cols + c];

    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                let (id_a, id_b) = (id_at(r, c), id_at(r, c + 1));
                solver.add_distance_constraint(id_a, id_b, structural);
                cloth.add_visual_edge(id_a, id_b);
            }

            if r + 1 < rows {
                let (id_a, id_b) = (id_at(r, c), id_at(r + 1, c));
                solver.add_distance_constraint(id_a, id_b, structural);
                cloth.add_visual_edge(id_a, id_b);
            }

            if r + 1 < rows && c + 1 < cols {
                let id_a = id_at(r, c);
                let id_b = id_at(r, c + 1);
                let id_c = id_at(r + 1, c);
                let id_d = id_at(r + 1, c + 1);

                solver.add_distance_constraint(id_a, id_d, shear);
                solver.add_distance_constraint(id_b, id_c, shear);
                cloth.add_visual_edge(id_a, id_d);
                cloth.add_visual_edge(id_b, id_c);

                solver.add_bending_constraint(id_a, id_d, id_b, id_c, 0.0, bending);

                cloth.add_triangle(Triangle::new(id_a, id_b, id_d));
                cloth.add_triangle(Triangle::new(id_a, id_d, id_c));
            }
        }
    }

    compute_physical_attributes(cloth, solver);
}

/// Builds a cloth from an imported triangle soup.
///
/// Every unique edge becomes a structural distance constraint and a visual
/// edge. Every edge shared by exactly two triangles gets a bending
/// constraint whose rest angle is measured from the import geometry with
/// the same signed-dihedral convention the bending solve uses; boundary
/// edges get none. Ends with the mass/aero pass.
pub fn build_from_mesh(
    positions: &[Vec3],
    indices: &[usize],
    cloth: &mut Cloth,
    solver: &mut Solver,
) {
    cloth.clear();

    let material = cloth.material().clone();
    let structural = material.structural_compliance;
    let bending = material.bending_compliance;

    let mut local_to_global = Vec::with_capacity(positions.len());
    for &position in positions {
        let id = solver.add_particle(Particle::new(position));
        cloth.add_particle_id(id);
        local_to_global.push(id);
    }

    let mut seen_edges: BTreeSet<Edge> = BTreeSet::new();
    for tri in indices.chunks_exact(3) {
        let triangle = Triangle::new(
            local_to_global[tri[0]],
            local_to_global[tri[1]],
            local_to_global[tri[2]],
        );
        cloth.add_triangle(triangle);

        for edge in triangle.edges() {
            if seen_edges.insert(edge) {
                solver.add_distance_constraint(edge.v0(), edge.v1(), structural);
                cloth.add_visual_edge(edge.v0(), edge.v1());
            }
        }
    }

    let topology = Topology::build(cloth.triangles());
    for interior in &topology.interior_edges {
        let rest_angle = dihedral_angle(
            solver.particles()[interior.v0].position(),
            solver.particles()[interior.v1].position(),
            solver.particles()[interior.wing_a].position(),
            solver.particles()[interior.wing_b].position(),
        )
        .unwrap_or(0.0);

        solver.add_bending_constraint(
            interior.v0,
            interior.v1,
            interior.wing_a,
            interior.wing_b,
            rest_angle,
            bending,
        );
    }

    compute_physical_attributes(cloth, solver);
}

/// The mass/aero pass: distributes each triangle's area mass to its three
/// vertices and registers the triangle as an aerodynamic face.
fn compute_physical_attributes(cloth: &mut Cloth, solver: &mut Solver) {
    let density = cloth.material().density;

    let faces: Vec<Triangle> = cloth.triangles().to_vec();
    for triangle in faces {
        let area = triangle_area(
            solver.particles()[triangle.a].position(),
            solver.particles()[triangle.b].position(),
            solver.particles()[triangle.c].position(),
        );
        let mass_per_vertex = area * density / 3.0;

        solver.add_mass_to_particle(triangle.a, mass_per_vertex);
        solver.add_mass_to_particle(triangle.b, mass_per_vertex);
        solver.add_mass_to_particle(triangle.c, mass_per_vertex);

        cloth.add_aero_face(triangle.a, triangle.b, triangle.c);
    }
}
