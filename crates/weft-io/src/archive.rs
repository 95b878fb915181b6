//! Frame-animation archive export.
//!
//! Captures static topology once (face indices, constant face counts of 3)
//! plus per-frame positions at a fixed sample period, then writes the
//! whole animation as one JSON document on [`FrameArchive::close`]. The
//! layout mirrors poly-mesh frame archives used by DCC pipelines:
//! positions array, face indices, face counts, uniform time sampling.

use serde::Serialize;
use weft_types::{Scalar, Vec3, WeftError, WeftResult};

/// One captured frame: sample time plus interleaved positions.
#[derive(Debug, Clone, Serialize)]
struct FrameSample {
    time: Scalar,
    /// Interleaved `[x0, y0, z0, x1, y1, z1, ...]`.
    positions: Vec<Scalar>,
}

#[derive(Debug, Serialize)]
struct ArchiveDocument<'a> {
    vertex_count: usize,
    face_indices: &'a [usize],
    face_counts: Vec<u32>,
    sample_period: Scalar,
    frames: &'a [FrameSample],
}

/// Collects simulation frames and writes them as a single animation file.
///
/// Lifecycle: [`FrameArchive::open`] with the initial geometry, then
/// [`FrameArchive::write_frame`] once per sample, then
/// [`FrameArchive::close`] to flush the document to disk.
pub struct FrameArchive {
    path: String,
    vertex_count: usize,
    face_indices: Vec<usize>,
    sample_period: Scalar,
    frames: Vec<FrameSample>,
}

impl FrameArchive {
    /// Opens an archive for the given topology, capturing the initial
    /// positions as the frame at time zero.
    pub fn open(
        path: impl Into<String>,
        positions: &[Vec3],
        face_indices: &[usize],
        sample_period: Scalar,
    ) -> Self {
        let mut archive = Self {
            path: path.into(),
            vertex_count: positions.len(),
            face_indices: face_indices.to_vec(),
            sample_period,
            frames: Vec::new(),
        };
        archive.write_frame(positions, 0.0);
        archive
    }

    /// Captures one frame of positions at the given sample time.
    pub fn write_frame(&mut self, positions: &[Vec3], time: Scalar) {
        let mut interleaved = Vec::with_capacity(positions.len() * 3);
        for p in positions {
            interleaved.push(p.x);
            interleaved.push(p.y);
            interleaved.push(p.z);
        }
        self.frames.push(FrameSample {
            time,
            positions: interleaved,
        });
    }

    /// Number of captured frames, including the initial one.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Serializes the captured animation and writes it to the archive path.
    pub fn close(&mut self) -> WeftResult<()> {
        let document = ArchiveDocument {
            vertex_count: self.vertex_count,
            face_indices: &self.face_indices,
            face_counts: vec![3; self.face_indices.len() / 3],
            sample_period: self.sample_period,
            frames: &self.frames,
        };
        let json = serde_json::to_string(&document)
            .map_err(|e| WeftError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        self.frames.clear();
        Ok(())
    }
}
