//! Vertex-to-face adjacency index
//!
//! Precomputes, for every vertex, the list of faces it belongs to. Built
//! once after merge + subdivision freeze the topology; the relaxation loop
//! only reads it. Rebuilding per relaxation pass would turn the loop into
//! repeated linear scans over the face list.

use crate::mesh::{FaceId, Mesh};
use crate::params::GenerationError;

/// Rebuild every vertex's incident-face list from the current face list.
///
/// References to vertices outside the arena are skipped here so that
/// `verify` can report them as a `BrokenTopology` error.
pub fn index_adjacency(mesh: &mut Mesh) {
    for vertex in &mut mesh.vertices {
        vertex.adjacent_faces.clear();
    }
    let vertex_count = mesh.vertices.len();
    for (i, face) in mesh.faces.iter().enumerate() {
        let fid = FaceId(i as u32);
        for &v in &face.vertices {
            if v.index() < vertex_count {
                mesh.vertices[v.index()].adjacent_faces.push(fid);
            }
        }
    }
}

/// Check the mesh's internal consistency.
///
/// A face referencing a vertex outside the arena, or any asymmetry between
/// face vertex lists and vertex adjacency lists, aborts generation.
pub fn verify(mesh: &Mesh) -> Result<(), GenerationError> {
    for (i, face) in mesh.faces.iter().enumerate() {
        let fid = FaceId(i as u32);
        for &v in &face.vertices {
            let vertex = mesh.vertices.get(v.index()).ok_or_else(|| {
                GenerationError::BrokenTopology(format!(
                    "face {} references missing vertex {}",
                    fid, v
                ))
            })?;
            if !vertex.adjacent_faces.contains(&fid) {
                return Err(GenerationError::BrokenTopology(format!(
                    "vertex {} missing adjacency for face {}",
                    v, fid
                )));
            }
        }
    }

    for (i, vertex) in mesh.vertices.iter().enumerate() {
        for &fid in &vertex.adjacent_faces {
            let face = mesh.faces.get(fid.index()).ok_or_else(|| {
                GenerationError::BrokenTopology(format!(
                    "vertex v{} references missing face {}",
                    i, fid
                ))
            })?;
            if !face.vertices.iter().any(|v| v.index() == i) {
                return Err(GenerationError::BrokenTopology(format!(
                    "face {} does not contain vertex v{}",
                    fid, i
                )));
            }
        }
    }

    Ok(())
}
