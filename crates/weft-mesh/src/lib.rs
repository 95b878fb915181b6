//! # weft-mesh
//!
//! Passive triangle-soup vocabulary and topology queries for the Weft
//! cloth engine.
//!
//! The types here carry no physics: a [`Triangle`] is three particle ids,
//! an [`Edge`] is a canonical unordered pair, and [`Topology`] answers the
//! adjacency questions the cloth builder needs (which edges are interior,
//! what their wing vertices are).

pub mod topology;
pub mod triangle;

pub use topology::{InteriorEdge, Topology};
pub use triangle::{triangle_area, Edge, Triangle};
