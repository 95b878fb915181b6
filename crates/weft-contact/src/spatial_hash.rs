//! Uniform-grid spatial hash for broad-phase neighbor queries.
//!
//! Open hashing over a prime-sized table: each integer grid cell maps to a
//! bucket, buckets are laid out contiguously with a prefix-sum `cell_start`
//! array, and a radius query visits the 27 cells around the query point.
//! Distinct cells can alias to one bucket; the caller-side distance test
//! filters the strays.

use weft_dynamics::Particle;
use weft_types::{Scalar, Vec3};

/// Uniform-grid open hash over particle positions.
///
/// The solver rebuilds the hash once per frame with the cell size set to
/// the contact thickness, then queries it from the self-collision pass.
/// Queries write into a caller-provided buffer so the hot path never
/// allocates.
pub struct SpatialHash {
    table_size: usize,
    cell_size: Scalar,
    /// Bucket boundaries: bucket `h` occupies
    /// `particle_indices[cell_start[h]..cell_start[h + 1]]`.
    /// `cell_start[table_size]` holds the total count.
    cell_start: Vec<usize>,
    particle_indices: Vec<usize>,
    particle_hashes: Vec<usize>,
}

impl SpatialHash {
    /// Creates a hash with a prime `table_size` and initial cell size.
    pub fn new(table_size: usize, cell_size: Scalar) -> Self {
        Self {
            table_size,
            cell_size: cell_size.max(f64::MIN_POSITIVE),
            cell_start: vec![0; table_size + 1],
            particle_indices: Vec::new(),
            particle_hashes: Vec::new(),
        }
    }

    /// Sets the grid cell size. Takes effect at the next [`SpatialHash::build`].
    pub fn set_cell_size(&mut self, cell_size: Scalar) {
        if cell_size > 0.0 {
            self.cell_size = cell_size;
        }
    }

    /// The current cell size.
    pub fn cell_size(&self) -> Scalar {
        self.cell_size
    }

    /// Rebuilds the hash from current particle positions.
    ///
    /// Counting sort: bucket counts, prefix sums, then placement. Required
    /// whenever positions have changed materially since the last build.
    pub fn build(&mut self, particles: &[Particle]) {
        let n = particles.len();
        self.particle_hashes.clear();
        self.particle_hashes.reserve(n);
        self.particle_indices.resize(n, 0);

        self.cell_start.clear();
        self.cell_start.resize(self.table_size + 1, 0);

        for particle in particles {
            let (gx, gy, gz) = self.grid_coords(particle.position());
            let h = self.hash_coords(gx, gy, gz);
            self.particle_hashes.push(h);
            self.cell_start[h] += 1;
        }

        // Prefix sums: cell_start[h] ends up one past bucket h's end.
        let mut running = 0usize;
        for entry in self.cell_start.iter_mut() {
            running += *entry;
            *entry = running;
        }
        debug_assert_eq!(self.cell_start[self.table_size], n);

        // Placement walks each bucket cursor backwards to its start.
        for i in 0..n {
            let h = self.particle_hashes[i];
            self.cell_start[h] -= 1;
            self.particle_indices[self.cell_start[h]] = i;
        }
    }

    /// Collects into `out` the indices of all particles within `radius` of
    /// `pos`, scanning the 27 cells around the query point.
    ///
    /// The query does not filter the querying particle itself; callers doing
    /// pairwise work deduplicate with an index ordering test.
    pub fn query(
        &self,
        particles: &[Particle],
        pos: Vec3,
        radius: Scalar,
        out: &mut Vec<usize>,
    ) {
        out.clear();
        let (cx, cy, cz) = self.grid_coords(pos);
        let radius_sq = radius * radius;

        for dx in -1..=1i64 {
            for dy in -1..=1i64 {
                for dz in -1..=1i64 {
                    let h = self.hash_coords(cx + dx, cy + dy, cz + dz);
                    let start = self.cell_start[h];
                    let end = self.cell_start[h + 1];
                    for &j in &self.particle_indices[start..end] {
                        if particles[j].position().distance_squared(pos) < radius_sq {
                            out.push(j);
                        }
                    }
                }
            }
        }
    }

    fn grid_coords(&self, pos: Vec3) -> (i64, i64, i64) {
        (
            (pos.x / self.cell_size).floor() as i64,
            (pos.y / self.cell_size).floor() as i64,
            (pos.z / self.cell_size).floor() as i64,
        )
    }

    fn hash_coords(&self, x: i64, y: i64, z: i64) -> usize {
        let h = (x as u32).wrapping_mul(73_856_093)
            ^ (y as u32).wrapping_mul(19_349_663)
            ^ (z as u32).wrapping_mul(83_492_791);
        h as usize % self.table_size
    }
}
