//! Area-weighted vertex relaxation
//!
//! Iteratively pulls each interior vertex toward the area-weighted average
//! of its adjacent faces' centroids. Weighting by face area pushes the mesh
//! toward equal face areas rather than pure centroidal smoothing. Vertices
//! are visited in a freshly shuffled order every iteration and updated in
//! place, so later vertices see neighbors already moved this pass (a
//! Gauss-Seidel sweep; the reshuffle keeps that from biasing one
//! direction). Runs for a fixed iteration count with no convergence check.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::mesh::Mesh;

/// Run `iterations` relaxation passes at the given strength.
///
/// Boundary vertices never move. Face areas are refreshed from current
/// positions at the top of every pass; they go stale as soon as any vertex
/// moves, and the weights must reflect the previous pass's final geometry.
pub fn relax(mesh: &mut Mesh, iterations: usize, strength: f64, rng: &mut ChaCha8Rng) {
    let mut visit_order: Vec<usize> = (0..mesh.vertices.len()).collect();

    for _ in 0..iterations {
        mesh.refresh_face_areas();
        visit_order.shuffle(rng);
        for &vi in &visit_order {
            relax_vertex(mesh, vi, strength);
        }
    }
}

/// Move one vertex `strength` of the way toward the area-weighted centroid
/// of its adjacent faces.
///
/// Vertices with no adjacent faces or zero total face area are left in
/// place; degenerate faces simply contribute no weight.
fn relax_vertex(mesh: &mut Mesh, vi: usize, strength: f64) {
    if mesh.vertices[vi].is_boundary() {
        return;
    }

    let mut weighted_x = 0.0;
    let mut weighted_y = 0.0;
    let mut total_weight = 0.0;
    for &fid in &mesh.vertices[vi].adjacent_faces {
        let face = &mesh.faces[fid.index()];
        let (cx, cy) = mesh.face_centroid(face);
        weighted_x += cx * face.area;
        weighted_y += cy * face.area;
        total_weight += face.area;
    }

    if total_weight <= 0.0 {
        return;
    }

    let target_x = weighted_x / total_weight;
    let target_y = weighted_y / total_weight;
    let vertex = &mut mesh.vertices[vi];
    vertex.x += (target_x - vertex.x) * strength;
    vertex.y += (target_y - vertex.y) * strength;
}
