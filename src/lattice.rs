//! Hexagonal lattice construction
//!
//! Lays out the initial point grid as concentric hex rings around a center
//! vertex. Ring `i` holds six sectors of `i` points each, so the full
//! lattice has `1 + 3·R·(R+1)` vertices. Construction is deterministic;
//! no randomness enters until the merge stage.

use std::f64::consts::PI;

use crate::mesh::{Mesh, Vertex};

/// Global index of the lattice point at (ring, sector, offset).
///
/// Ring 0 is the center (index 0). Rings are laid out consecutively,
/// each sector contributing `ring` points.
pub fn vertex_index(ring: usize, sector: usize, offset: usize) -> usize {
    if ring == 0 {
        return 0;
    }
    1 + 3 * ring * (ring - 1) + sector * ring + offset
}

/// Position of the lattice point at (ring, sector, offset).
///
/// The point sits at the sector-`j` corner of ring `i`, stepped `k` times
/// along the ring edge toward the next corner.
fn lattice_position(ring: usize, sector: usize, offset: usize, spacing: f64) -> (f64, f64) {
    let corner_angle = sector as f64 * PI / 3.0;
    let step_angle = corner_angle + 2.0 * PI / 3.0;
    let x = spacing * (ring as f64 * corner_angle.cos() + offset as f64 * step_angle.cos());
    let y = spacing * (ring as f64 * corner_angle.sin() + offset as f64 * step_angle.sin());
    (x, y)
}

/// Build the hex lattice: center vertex plus `ring_count` concentric rings.
///
/// Vertices on the outermost ring are tagged `Boundary` so the relaxer
/// never displaces the mesh perimeter.
pub fn build_lattice(ring_count: usize, spacing: f64) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(Vertex::interior(0.0, 0.0));

    for ring in 1..=ring_count {
        for sector in 0..6 {
            for offset in 0..ring {
                let (x, y) = lattice_position(ring, sector, offset, spacing);
                let vertex = if ring == ring_count {
                    Vertex::boundary(x, y)
                } else {
                    Vertex::interior(x, y)
                };
                mesh.add_vertex(vertex);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::VertexKind;

    #[test]
    fn test_vertex_count_formula() {
        for rings in 1..=8 {
            let mesh = build_lattice(rings, 1.0);
            assert_eq!(mesh.vertices.len(), 1 + 3 * rings * (rings + 1));
        }
    }

    #[test]
    fn test_vertex_index_matches_build_order() {
        // The index formula must agree with the push order of build_lattice.
        let rings = 5;
        let mut expected = 1;
        for ring in 1..=rings {
            for sector in 0..6 {
                for offset in 0..ring {
                    assert_eq!(vertex_index(ring, sector, offset), expected);
                    expected += 1;
                }
            }
        }
        assert_eq!(vertex_index(0, 0, 0), 0);
    }

    #[test]
    fn test_center_at_origin() {
        let mesh = build_lattice(3, 40.0);
        assert_eq!(mesh.vertices[0].x, 0.0);
        assert_eq!(mesh.vertices[0].y, 0.0);
    }

    #[test]
    fn test_ring_corners_at_expected_radius() {
        let spacing = 2.5;
        let mesh = build_lattice(4, spacing);
        for ring in 1..=4usize {
            for sector in 0..6 {
                let v = &mesh.vertices[vertex_index(ring, sector, 0)];
                let radius = (v.x * v.x + v.y * v.y).sqrt();
                let expected = spacing * ring as f64;
                assert!(
                    (radius - expected).abs() < 1e-9,
                    "ring {} sector {} corner at radius {}, expected {}",
                    ring,
                    sector,
                    radius,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_neighbor_spacing_along_ring() {
        let spacing = 1.0;
        let mesh = build_lattice(3, spacing);
        // Consecutive points within a sector sit one spacing apart.
        for sector in 0..6 {
            let a = &mesh.vertices[vertex_index(3, sector, 0)];
            let b = &mesh.vertices[vertex_index(3, sector, 1)];
            let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            assert!((dist - spacing).abs() < 1e-9);
        }
    }

    #[test]
    fn test_only_outer_ring_is_boundary() {
        let rings = 4;
        let mesh = build_lattice(rings, 1.0);
        let inner_count = 1 + 3 * (rings - 1) * rings;
        for (i, v) in mesh.vertices.iter().enumerate() {
            let expected = if i >= inner_count {
                VertexKind::Boundary
            } else {
                VertexKind::Interior
            };
            assert_eq!(v.kind, expected, "vertex {}", i);
        }
    }

    #[test]
    fn test_lattice_is_deterministic() {
        let a = build_lattice(6, 3.0);
        let b = build_lattice(6, 3.0);
        for (va, vb) in a.vertices.iter().zip(b.vertices.iter()) {
            assert_eq!(va.x.to_bits(), vb.x.to_bits());
            assert_eq!(va.y.to_bits(), vb.y.to_bits());
        }
    }
}
