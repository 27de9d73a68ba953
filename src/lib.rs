//! Quadrangulated hex-map generation library
//!
//! Builds a quad-dominant planar mesh over a hexagonal lattice and relaxes
//! it toward equal face areas. The exported neighbor graph feeds the
//! pathfinding, settlement simulation, and rendering tools.

pub mod adjacency;
pub mod export;
pub mod lattice;
pub mod merge;
pub mod mesh;
pub mod params;
pub mod pipeline;
pub mod relax;
pub mod stats;
pub mod subdivide;
pub mod triangulate;
