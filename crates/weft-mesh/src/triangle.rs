//! Triangle and canonical edge records.

use serde::{Deserialize, Serialize};
use weft_types::{Scalar, Vec3};

/// A triangle referencing three solver-owned particle ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    /// Creates a triangle from three particle ids.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex of this triangle that lies on neither end of the
    /// edge `(v0, v1)` — the "wing" vertex opposite that edge.
    pub fn opposite_vertex(&self, v0: usize, v1: usize) -> usize {
        if self.a != v0 && self.a != v1 {
            self.a
        } else if self.b != v0 && self.b != v1 {
            self.b
        } else {
            self.c
        }
    }

    /// The three edges of this triangle, canonicalized.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }
}

/// An unordered edge, stored canonically as `(min, max)`.
///
/// The ordering makes `Edge` usable as a `BTreeMap` key, which keeps every
/// edge-driven pass (bending synthesis, visual-edge emission) deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    v0: usize,
    v1: usize,
}

impl Edge {
    /// Creates a canonical edge from two particle ids in either order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// The smaller endpoint.
    pub fn v0(&self) -> usize {
        self.v0
    }

    /// The larger endpoint.
    pub fn v1(&self) -> usize {
        self.v1
    }
}

/// Area of the triangle spanned by three points.
pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> Scalar {
    0.5 * (p1 - p0).cross(p2 - p0).length()
}
