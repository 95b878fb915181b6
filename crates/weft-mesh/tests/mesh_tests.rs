//! Integration tests for weft-mesh.

use weft_mesh::{triangle_area, Edge, Topology, Triangle};
use weft_types::Vec3;

// ─── Edge Tests ───────────────────────────────────────────────

#[test]
fn edge_canonical_order() {
    let a = Edge::new(7, 3);
    let b = Edge::new(3, 7);
    assert_eq!(a, b);
    assert_eq!(a.v0(), 3);
    assert_eq!(a.v1(), 7);
}

#[test]
fn triangle_opposite_vertex() {
    let tri = Triangle::new(0, 1, 2);
    assert_eq!(tri.opposite_vertex(0, 1), 2);
    assert_eq!(tri.opposite_vertex(1, 2), 0);
    assert_eq!(tri.opposite_vertex(2, 0), 1);
}

#[test]
fn triangle_area_unit_right() {
    let area = triangle_area(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!((area - 0.5).abs() < 1e-12, "area = {area}");
}

#[test]
fn triangle_area_degenerate_is_zero() {
    let area = triangle_area(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    );
    assert_eq!(area, 0.0);
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn topology_single_quad() {
    // Two triangles sharing the diagonal (0, 2).
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
    let topo = Topology::build(&tris);

    assert_eq!(topo.edges.len(), 5, "quad has 4 boundary + 1 interior edge");
    assert_eq!(topo.interior_edges.len(), 1);
    assert_eq!(topo.boundary_edge_count(), 4);
    assert!(!topo.is_closed());

    let interior = &topo.interior_edges[0];
    assert_eq!((interior.v0, interior.v1), (0, 2));
    // Wings are the vertices off the shared diagonal, one per triangle.
    let mut wings = [interior.wing_a, interior.wing_b];
    wings.sort();
    assert_eq!(wings, [1, 3]);
}

#[test]
fn topology_tetrahedron_is_closed() {
    let tris = vec![
        Triangle::new(0, 1, 2),
        Triangle::new(0, 1, 3),
        Triangle::new(0, 2, 3),
        Triangle::new(1, 2, 3),
    ];
    let topo = Topology::build(&tris);
    assert_eq!(topo.edges.len(), 6);
    assert_eq!(topo.interior_edges.len(), 6);
    assert!(topo.is_closed());
}

#[test]
fn topology_interior_edges_in_canonical_order() {
    // A strip of three triangles: interior edges (1,2) and (2,3).
    let tris = vec![
        Triangle::new(0, 1, 2),
        Triangle::new(1, 3, 2),
        Triangle::new(2, 3, 4),
    ];
    let topo = Topology::build(&tris);
    assert_eq!(topo.interior_edges.len(), 2);
    let pairs: Vec<(usize, usize)> = topo
        .interior_edges
        .iter()
        .map(|e| (e.v0, e.v1))
        .collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3)]);
}
