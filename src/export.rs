//! Map payload export
//!
//! Serializes the final mesh into the neighbor-graph payload consumed by
//! the pathfinding, simulation, and rendering collaborators. Field names
//! are a stable contract; downstream tools attach extra per-vertex data
//! (elevation, water, traffic) by vertex index after loading, so nothing
//! here assumes such fields exist.

use std::fs::File;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;
use crate::params::GenerationParams;

/// A 2D point in the payload.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A tile corner: position plus the stable vertex index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileCorner {
    pub x: f64,
    pub y: f64,
    pub index: usize,
}

/// One quad tile of the final mesh.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileExport {
    pub id: usize,
    pub vertices: Vec<TileCorner>,
    pub center: Point,
    pub area: f64,
    /// Ids of tiles sharing an edge (two or more vertices) with this one
    pub neighbors: Vec<usize>,
}

/// One mesh vertex with its graph connectivity.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexExport {
    pub x: f64,
    pub y: f64,
    pub index: usize,
    /// Edge-adjacent vertex indices (never diagonal partners within a quad)
    pub neighbors: Vec<usize>,
    pub adjacent_faces: Vec<usize>,
}

/// The full exported payload: parameters echoed back, tiles, and vertices.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub params: GenerationParams,
    pub tiles: Vec<TileExport>,
    pub vertices: Vec<VertexExport>,
}

/// Build the export payload from the final mesh.
pub fn build_map_data(mesh: &Mesh, params: &GenerationParams) -> MapData {
    let mut tiles: Vec<TileExport> = mesh
        .faces
        .iter()
        .enumerate()
        .map(|(id, face)| {
            let (cx, cy) = mesh.face_centroid(face);
            TileExport {
                id,
                vertices: face
                    .vertices
                    .iter()
                    .map(|&v| {
                        let vertex = mesh.vertex(v);
                        TileCorner {
                            x: vertex.x,
                            y: vertex.y,
                            index: v.index(),
                        }
                    })
                    .collect(),
                center: Point { x: cx, y: cy },
                area: face.area,
                neighbors: Vec::new(),
            }
        })
        .collect();

    // Tile neighbors: faces sharing at least one edge (two vertices).
    for i in 0..mesh.faces.len() {
        for j in (i + 1)..mesh.faces.len() {
            if mesh.faces[i].shared_vertex_count(&mesh.faces[j]) >= 2 {
                tiles[i].neighbors.push(j);
                tiles[j].neighbors.push(i);
            }
        }
    }

    let mut vertices: Vec<VertexExport> = mesh
        .vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| VertexExport {
            x: vertex.x,
            y: vertex.y,
            index,
            neighbors: Vec::new(),
            adjacent_faces: vertex.adjacent_faces.iter().map(|f| f.index()).collect(),
        })
        .collect();

    // Vertex neighbors from consecutive pairs within each face cycle only;
    // diagonally opposite corners of a quad are not connected.
    for face in &mesh.faces {
        let n = face.vertices.len();
        for i in 0..n {
            let here = face.vertices[i].index();
            let prev = face.vertices[(i + n - 1) % n].index();
            let next = face.vertices[(i + 1) % n].index();
            add_neighbor(&mut vertices[here].neighbors, prev);
            add_neighbor(&mut vertices[here].neighbors, next);
        }
    }

    MapData {
        params: params.clone(),
        tiles,
        vertices,
    }
}

fn add_neighbor(neighbors: &mut Vec<usize>, index: usize) {
    if !neighbors.contains(&index) {
        neighbors.push(index);
    }
}

/// Write the payload to a pretty-printed JSON file.
pub fn write_map_json(map: &MapData, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(map)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Default output filename encoding the seed and ring count.
pub fn default_output_name(params: &GenerationParams) -> String {
    format!(
        "quadmap_seed{}_ring{}.json",
        params.random_seed, params.ring_count
    )
}
