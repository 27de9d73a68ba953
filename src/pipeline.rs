//! Full generation pipeline
//!
//! Runs the stages in fixed order (lattice, triangulate, merge, subdivide,
//! index, relax, export), threading one `Mesh` value and one seeded RNG
//! through the run. No stage re-enters an earlier one, and the parameter
//! tuple fully determines the output.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::adjacency;
use crate::export::{self, MapData};
use crate::lattice;
use crate::merge;
use crate::mesh::Mesh;
use crate::params::{GenerationError, GenerationParams};
use crate::relax;
use crate::subdivide;
use crate::triangulate;

/// Generate the final relaxed quad mesh.
pub fn generate_mesh(params: &GenerationParams) -> Result<Mesh, GenerationError> {
    params.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(params.random_seed);

    let mut mesh = lattice::build_lattice(params.ring_count, params.lattice_spacing);
    triangulate::triangulate(&mut mesh, params.ring_count);
    merge::merge_triangles(&mut mesh, &mut rng);
    subdivide::subdivide(&mut mesh);

    // Topology is frozen from here on; relaxation only moves positions.
    adjacency::index_adjacency(&mut mesh);
    adjacency::verify(&mesh)?;

    relax::relax(
        &mut mesh,
        params.relaxation_iterations,
        params.relaxation_strength,
        &mut rng,
    );

    // Leave exported areas in sync with final positions even when the
    // iteration count is zero.
    mesh.refresh_face_areas();

    Ok(mesh)
}

/// Generate a map and build its export payload.
pub fn generate_map(params: &GenerationParams) -> Result<MapData, GenerationError> {
    let mesh = generate_mesh(params)?;
    Ok(export::build_map_data(&mesh, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Vertex, VertexKind};
    use crate::stats;

    fn test_params(rings: usize, seed: u64, iterations: usize) -> GenerationParams {
        GenerationParams {
            ring_count: rings,
            lattice_spacing: 10.0,
            random_seed: seed,
            relaxation_iterations: iterations,
            relaxation_strength: 0.08,
        }
    }

    #[test]
    fn test_every_face_is_a_quad() {
        for rings in [1, 2, 5] {
            let mesh = generate_mesh(&test_params(rings, 3, 5)).unwrap();
            for face in &mesh.faces {
                assert_eq!(face.vertices.len(), 4, "rings = {}", rings);
            }
            // Subdivision emits one quad per post-merge face corner, so the
            // quad count always exceeds the original triangle count.
            assert!(mesh.faces.len() >= 6 * rings * rings);
        }
    }

    #[test]
    fn test_invalid_params_rejected_before_generation() {
        let mut params = test_params(0, 1, 1);
        assert!(generate_mesh(&params).is_err());
        params.ring_count = 2;
        params.lattice_spacing = -1.0;
        assert!(generate_mesh(&params).is_err());
    }

    #[test]
    fn test_adjacency_symmetry_after_generation() {
        let mesh = generate_mesh(&test_params(4, 99, 10)).unwrap();
        assert!(adjacency::verify(&mesh).is_ok());
    }

    #[test]
    fn test_boundary_vertices_never_displaced() {
        let seed = 21;
        let frozen = generate_mesh(&test_params(4, seed, 0)).unwrap();
        let relaxed = generate_mesh(&test_params(4, seed, 200)).unwrap();

        assert_eq!(frozen.vertices.len(), relaxed.vertices.len());
        let mut boundary_seen = 0;
        for (a, b) in frozen.vertices.iter().zip(relaxed.vertices.iter()) {
            assert_eq!(a.kind, b.kind);
            if a.kind == VertexKind::Boundary {
                boundary_seen += 1;
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
            }
        }
        // Exactly the outer-ring lattice vertices (6 per ring index).
        assert_eq!(boundary_seen, 6 * 4);
    }

    #[test]
    fn test_interior_vertices_do_move() {
        let seed = 21;
        let frozen = generate_mesh(&test_params(4, seed, 0)).unwrap();
        let relaxed = generate_mesh(&test_params(4, seed, 200)).unwrap();
        let moved = frozen
            .vertices
            .iter()
            .zip(relaxed.vertices.iter())
            .filter(|(a, b)| a.x != b.x || a.y != b.y)
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn test_output_is_bit_identical_per_seed() {
        let params = test_params(3, 1234, 25);
        let a = serde_json::to_string(&generate_map(&params).unwrap()).unwrap();
        let b = serde_json::to_string(&generate_map(&params).unwrap()).unwrap();
        assert_eq!(a, b);

        let other = test_params(3, 1235, 25);
        let c = serde_json::to_string(&generate_map(&other).unwrap()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_faces_remain_simple_polygons() {
        let mesh = generate_mesh(&test_params(4, 7, 100)).unwrap();
        for (i, face) in mesh.faces.iter().enumerate() {
            assert!(
                quad_is_simple(&mesh.vertices, face),
                "face {} self-intersects",
                i
            );
            assert!(mesh.face_polygon_area(face) > 0.0, "face {} collapsed", i);
        }
    }

    #[test]
    fn test_area_spread_does_not_grow_under_relaxation() {
        for seed in [1, 2, 3, 4] {
            let before_mesh = generate_mesh(&test_params(4, seed, 0)).unwrap();
            let after_mesh = generate_mesh(&test_params(4, seed, 60)).unwrap();
            let before = stats::area_stats(&before_mesh).mean_abs_dev;
            let after = stats::area_stats(&after_mesh).mean_abs_dev;
            assert!(
                after <= before * 1.05,
                "seed {}: deviation grew from {} to {}",
                seed,
                before,
                after
            );
        }
    }

    #[test]
    fn test_area_spread_stable_across_strengths() {
        // Gentle, default, and aggressive step sizes must all keep the
        // area deviation from growing.
        for strength in [0.01, 0.08, 0.5] {
            let mut params = test_params(4, 4, 0);
            params.relaxation_strength = strength;
            let before_mesh = generate_mesh(&params).unwrap();
            params.relaxation_iterations = 150;
            let after_mesh = generate_mesh(&params).unwrap();

            let before = stats::area_stats(&before_mesh).mean_abs_dev;
            let after = stats::area_stats(&after_mesh).mean_abs_dev;
            assert!(
                after <= before * 1.05,
                "strength {}: deviation grew from {} to {}",
                strength,
                before,
                after
            );
        }
    }

    #[test]
    fn test_long_run_shrinks_area_spread() {
        // A long run must converge, not drift: deviation drops and the
        // largest face does not balloon past its unrelaxed size.
        let before_mesh = generate_mesh(&test_params(6, 3, 0)).unwrap();
        let after_mesh = generate_mesh(&test_params(6, 3, 1000)).unwrap();

        let before = stats::area_stats(&before_mesh);
        let after = stats::area_stats(&after_mesh);
        assert!(
            after.mean_abs_dev < before.mean_abs_dev,
            "deviation went from {} to {}",
            before.mean_abs_dev,
            after.mean_abs_dev
        );
        assert!(
            after.max <= before.max * 1.05,
            "max area went from {} to {}",
            before.max,
            after.max
        );
    }

    #[test]
    fn test_zero_iterations_leaves_lattice_positions() {
        let params = test_params(2, 8, 0);
        let mesh = generate_mesh(&params).unwrap();
        // The center vertex is untouched without relaxation.
        assert_eq!(mesh.vertices[0].x, 0.0);
        assert_eq!(mesh.vertices[0].y, 0.0);
    }

    /// A quad is simple iff its two pairs of opposite edges do not cross.
    fn quad_is_simple(vertices: &[Vertex], face: &crate::mesh::Face) -> bool {
        let p: Vec<(f64, f64)> = face
            .vertices
            .iter()
            .map(|v| {
                let vertex = &vertices[v.index()];
                (vertex.x, vertex.y)
            })
            .collect();
        !segments_cross(p[0], p[1], p[2], p[3]) && !segments_cross(p[1], p[2], p[3], p[0])
    }

    fn segments_cross(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
        let orient = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };
        let d1 = orient(a, b, c);
        let d2 = orient(a, b, d);
        let d3 = orient(c, d, a);
        let d4 = orient(c, d, b);
        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }
}
