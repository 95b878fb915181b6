//! Wavefront-style OBJ export.
//!
//! Writes one cloth as `v x y z` lines followed by `f a b c` lines with
//! 1-based indices relative to the cloth's particle-id list (not the
//! solver's global ids).

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use weft_solver::{Cloth, Solver};
use weft_types::WeftResult;

/// Writes the cloth's current geometry to `writer` in OBJ format.
pub fn write_obj<W: Write>(writer: &mut W, cloth: &Cloth, solver: &Solver) -> WeftResult<()> {
    let particles = solver.particles();

    let mut global_to_local: HashMap<usize, usize> = HashMap::new();
    for (local, &global) in cloth.particle_ids().iter().enumerate() {
        global_to_local.insert(global, local + 1); // OBJ indices are 1-based
        let pos = particles[global].position();
        writeln!(writer, "v {} {} {}", pos.x, pos.y, pos.z)?;
    }

    for tri in cloth.triangles() {
        let a = global_to_local[&tri.a];
        let b = global_to_local[&tri.b];
        let c = global_to_local[&tri.c];
        writeln!(writer, "f {a} {b} {c}")?;
    }

    Ok(())
}

/// Writes the cloth's current geometry to a file in OBJ format.
pub fn export_obj(path: impl AsRef<Path>, cloth: &Cloth, solver: &Solver) -> WeftResult<()> {
    let mut buffer = Vec::new();
    write_obj(&mut buffer, cloth, solver)?;
    std::fs::write(path, buffer)?;
    Ok(())
}
