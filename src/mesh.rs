//! Mesh data model
//!
//! Vertices and faces live in stable-index arenas inside a `Mesh` value
//! that is passed explicitly through every pipeline stage. Faces reference
//! vertices by id; there is no per-vertex object graph and no module-level
//! state.

/// Stable index of a vertex in the mesh arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Stable index of a face in the mesh face list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceId(pub u32);

impl FaceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Whether a vertex may be moved by relaxation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    /// Free vertex, repositioned by the relaxer
    Interior,
    /// Lattice-perimeter vertex (or perimeter edge midpoint), pinned in place
    Boundary,
}

/// A mesh vertex: position, mobility tag, and incident faces.
///
/// The adjacency list is owned by the adjacency indexer: it is rebuilt after
/// topology changes and read-only during relaxation.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub kind: VertexKind,
    pub adjacent_faces: Vec<FaceId>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, kind: VertexKind) -> Self {
        Self {
            x,
            y,
            kind,
            adjacent_faces: Vec::new(),
        }
    }

    pub fn interior(x: f64, y: f64) -> Self {
        Self::new(x, y, VertexKind::Interior)
    }

    pub fn boundary(x: f64, y: f64) -> Self {
        Self::new(x, y, VertexKind::Boundary)
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == VertexKind::Boundary
    }
}

/// A face: an ordered cycle of vertex ids forming a simple polygon,
/// plus a cached area refreshed by the relaxer each iteration.
#[derive(Clone, Debug)]
pub struct Face {
    pub vertices: Vec<VertexId>,
    pub area: f64,
}

impl Face {
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self {
            vertices,
            area: 0.0,
        }
    }

    /// Number of vertex ids shared with another face.
    pub fn shared_vertex_count(&self, other: &Face) -> usize {
        self.vertices
            .iter()
            .filter(|v| other.vertices.contains(v))
            .count()
    }
}

/// Vertex arena + face list for one generation run.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its stable id.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(vertex);
        id
    }

    /// Append a face and return its stable id.
    pub fn add_face(&mut self, face: Face) -> FaceId {
        let id = FaceId(self.faces.len() as u32);
        self.faces.push(face);
        id
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Plain average of the face's corner positions (not the area centroid;
    /// the relaxation scheme is defined against the corner average).
    pub fn face_centroid(&self, face: &Face) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        for &v in &face.vertices {
            let vertex = &self.vertices[v.index()];
            x += vertex.x;
            y += vertex.y;
        }
        let n = face.vertices.len() as f64;
        (x / n, y / n)
    }

    /// Unsigned shoelace area of the face polygon.
    pub fn face_polygon_area(&self, face: &Face) -> f64 {
        polygon_area(&self.vertices, &face.vertices)
    }

    /// Recompute every face's cached area from current vertex positions.
    pub fn refresh_face_areas(&mut self) {
        let Mesh { vertices, faces } = self;
        for face in faces.iter_mut() {
            face.area = polygon_area(vertices, &face.vertices);
        }
    }
}

/// Unsigned shoelace area of a vertex cycle.
pub fn polygon_area(vertices: &[Vertex], cycle: &[VertexId]) -> f64 {
    let n = cycle.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..n {
        let a = &vertices[cycle[i].index()];
        let b = &vertices[cycle[(i + 1) % n].index()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area.abs() / 2.0
}
