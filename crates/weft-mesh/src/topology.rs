//! Mesh topology queries.
//!
//! Builds edge adjacency from a triangle soup, classifying edges as
//! interior (two incident triangles — these receive bending constraints)
//! or boundary (one incident triangle — these do not).

use std::collections::BTreeMap;

use crate::triangle::{Edge, Triangle};

/// Precomputed topology for a triangle soup.
///
/// Built once per cloth import. Iteration orders are deterministic: edges
/// are visited in canonical `(min, max)` order.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Every unique edge, in canonical order.
    pub edges: Vec<Edge>,

    /// For each edge (parallel to `edges`), the indices of its incident
    /// triangles. Boundary edges have exactly one entry.
    pub edge_triangles: Vec<Vec<usize>>,

    /// Interior edges (exactly two incident triangles) with their wing
    /// vertices, in canonical edge order.
    pub interior_edges: Vec<InteriorEdge>,
}

/// An interior edge with the wing vertices of its two incident triangles.
///
/// The dihedral angle across `(v0, v1)` between the wings defines the
/// bending behavior of the hinge.
#[derive(Debug, Clone, Copy)]
pub struct InteriorEdge {
    /// First endpoint of the shared edge.
    pub v0: usize,
    /// Second endpoint of the shared edge.
    pub v1: usize,
    /// Wing vertex of the first incident triangle.
    pub wing_a: usize,
    /// Wing vertex of the second incident triangle.
    pub wing_b: usize,
}

impl Topology {
    /// Build topology from a triangle list.
    pub fn build(triangles: &[Triangle]) -> Self {
        let mut edge_map: BTreeMap<Edge, Vec<usize>> = BTreeMap::new();

        for (t, tri) in triangles.iter().enumerate() {
            for edge in tri.edges() {
                edge_map.entry(edge).or_default().push(t);
            }
        }

        let mut edges = Vec::with_capacity(edge_map.len());
        let mut edge_triangles = Vec::with_capacity(edge_map.len());
        let mut interior_edges = Vec::new();

        for (edge, tris) in &edge_map {
            edges.push(*edge);
            edge_triangles.push(tris.clone());

            if tris.len() == 2 {
                let wing_a = triangles[tris[0]].opposite_vertex(edge.v0(), edge.v1());
                let wing_b = triangles[tris[1]].opposite_vertex(edge.v0(), edge.v1());
                interior_edges.push(InteriorEdge {
                    v0: edge.v0(),
                    v1: edge.v1(),
                    wing_a,
                    wing_b,
                });
            }
        }

        Self {
            edges,
            edge_triangles,
            interior_edges,
        }
    }

    /// Number of boundary edges (one incident triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles.iter().filter(|t| t.len() == 1).count()
    }

    /// True if the soup has no boundary edges.
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}
