//! Ring-boundary triangulation
//!
//! Stitches the hex-ring lattice into triangles. An inner ring has one
//! fewer point per sector than the ring outside it, so each inner point
//! fans out to two outer points at sector boundaries while interior
//! points connect 1:1. Ring 0 is a six-wedge fan around the center.
//!
//! Each (ring, sector, offset) emits an inward triangle connecting to the
//! previous ring, plus a strip triangle toward the next ring when one
//! exists. A one-ring lattice therefore gets the fan only.

use crate::lattice::vertex_index;
use crate::mesh::{Face, Mesh, VertexId};

fn vid(ring: usize, sector: usize, offset: usize) -> VertexId {
    VertexId(vertex_index(ring, sector, offset) as u32)
}

/// Tile the lattice with triangular faces.
pub fn triangulate(mesh: &mut Mesh, ring_count: usize) {
    // Central fan: six wedges around the center vertex.
    let center = VertexId(0);
    for sector in 0..6 {
        let p1 = vid(1, sector, 0);
        let p2 = vid(1, (sector + 1) % 6, 0);
        mesh.add_face(Face::new(vec![center, p1, p2]));
        if ring_count > 1 {
            let p3 = vid(2, sector, 1);
            mesh.add_face(Face::new(vec![p1, p2, p3]));
        }
    }

    // Outer rings: stitch each ring to the one inside it.
    for ring in 2..=ring_count {
        for sector in 0..6 {
            for offset in 0..ring {
                let inner_sector = (sector + offset / (ring - 1)) % 6;
                let p0 = vid(ring - 1, inner_sector, offset % (ring - 1));
                let p1 = vid(ring, sector, offset);
                let p2 = vid(ring, inner_sector, (offset + 1) % ring);
                mesh.add_face(Face::new(vec![p0, p1, p2]));

                if ring < ring_count {
                    let p3 = vid(ring + 1, sector, (offset + 1) % (ring + 1));
                    mesh.add_face(Face::new(vec![p1, p2, p3]));
                }
            }
        }
    }
}
