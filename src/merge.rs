//! Randomized triangle-pair merging
//!
//! Pairs adjacent triangles that share an edge into quads. All unordered
//! face-index pairs are enumerated, shuffled with the run's seeded RNG to
//! remove directional bias, then accepted greedily in a single pass. This
//! is a greedy randomized matching, not a maximum matching: leftover
//! triangles are expected and resolved later by subdivision.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::mesh::{Face, Mesh, VertexId};

/// Counts reported by the merge stage.
#[derive(Clone, Copy, Debug)]
pub struct MergeStats {
    /// Quads produced (two triangles each)
    pub merged_quads: usize,
    /// Faces that found no merge partner
    pub leftover_faces: usize,
}

/// Merge randomly chosen adjacent triangle pairs into quads.
///
/// The output face list holds the merged quads first, then the unconsumed
/// faces in their original order.
pub fn merge_triangles(mesh: &mut Mesh, rng: &mut ChaCha8Rng) -> MergeStats {
    let face_count = mesh.faces.len();

    let mut pairs = Vec::with_capacity(face_count * (face_count.saturating_sub(1)) / 2);
    for i in 0..face_count {
        for j in (i + 1)..face_count {
            pairs.push((i, j));
        }
    }
    pairs.shuffle(rng);

    let mut consumed = vec![false; face_count];
    let mut merged = Vec::new();

    for (i, j) in pairs {
        if consumed[i] || consumed[j] {
            continue;
        }
        if let Some(quad) = merge_pair(&mesh.faces[i], &mesh.faces[j]) {
            merged.push(quad);
            consumed[i] = true;
            consumed[j] = true;
        }
    }

    let old_faces = std::mem::take(&mut mesh.faces);
    let merged_quads = merged.len();
    mesh.faces = merged;
    for (i, face) in old_faces.into_iter().enumerate() {
        if !consumed[i] {
            mesh.faces.push(face);
        }
    }
    let leftover_faces = mesh.faces.len() - merged_quads;

    MergeStats {
        merged_quads,
        leftover_faces,
    }
}

/// Merge two faces into one quad if they share exactly one edge.
///
/// The quad interleaves shared and unique vertices as
/// [shared0, unique_a, shared1, unique_b]; concatenating the two cycles
/// naively can produce a self-intersecting bowtie instead.
fn merge_pair(a: &Face, b: &Face) -> Option<Face> {
    let shared: Vec<VertexId> = a
        .vertices
        .iter()
        .filter(|v| b.vertices.contains(v))
        .copied()
        .collect();
    if shared.len() != 2 {
        return None;
    }

    let unique: Vec<VertexId> = a
        .vertices
        .iter()
        .chain(b.vertices.iter())
        .filter(|v| !shared.contains(v))
        .copied()
        .collect();

    Some(Face::new(vec![shared[0], unique[0], shared[1], unique[1]]))
}
