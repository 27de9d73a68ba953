//! Centroid-and-midpoint subdivision
//!
//! Converts every post-merge face into quads, guaranteeing an all-quad
//! mesh regardless of how many triangles found a merge partner. Each face
//! gains a center vertex, each edge a midpoint vertex; a face with n
//! corners becomes n quads. Midpoints are keyed by the canonical
//! (min id, max id) vertex pair so the two faces flanking an edge resolve
//! to the identical midpoint instance, never two coincident vertices.

use std::collections::HashMap;

use crate::mesh::{Face, Mesh, Vertex, VertexId};

/// Subdivide every face into one quad per corner.
///
/// Runs unconditionally over the full face list. Inserted vertices
/// (midpoints and face centers) are all `Interior`: only the
/// outermost-ring lattice vertices carry the `Boundary` tag, so the hull
/// stays anchored at its lattice points while the quads between them keep
/// enough freedom to equalize their areas during relaxation.
pub fn subdivide(mesh: &mut Mesh) {
    let old_faces = std::mem::take(&mut mesh.faces);
    let mut midpoints: HashMap<(u32, u32), VertexId> = HashMap::new();

    for face in &old_faces {
        let n = face.vertices.len();

        let (cx, cy) = mesh.face_centroid(face);
        let center = mesh.add_vertex(Vertex::interior(cx, cy));

        // Midpoint of edge e, which joins corner e to corner e+1.
        let edge_mids: Vec<VertexId> = (0..n)
            .map(|e| {
                let a = face.vertices[e];
                let b = face.vertices[(e + 1) % n];
                edge_midpoint(mesh, &mut midpoints, a, b)
            })
            .collect();

        for corner in 0..n {
            let prev_mid = edge_mids[(corner + n - 1) % n];
            let next_mid = edge_mids[corner];
            mesh.add_face(Face::new(vec![
                prev_mid,
                face.vertices[corner],
                next_mid,
                center,
            ]));
        }
    }
}

/// Fetch or create the shared midpoint vertex of edge (a, b).
fn edge_midpoint(
    mesh: &mut Mesh,
    midpoints: &mut HashMap<(u32, u32), VertexId>,
    a: VertexId,
    b: VertexId,
) -> VertexId {
    let key = (a.0.min(b.0), a.0.max(b.0));
    if let Some(&mid) = midpoints.get(&key) {
        return mid;
    }

    let va = mesh.vertex(a);
    let vb = mesh.vertex(b);
    let mid = mesh.add_vertex(Vertex::interior(
        (va.x + vb.x) / 2.0,
        (va.y + vb.y) / 2.0,
    ));
    midpoints.insert(key, mid);
    mid
}
