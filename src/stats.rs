//! Face-area statistics
//!
//! Summary numbers the CLI prints after generation, matching what the
//! relaxation is trying to improve: spread of face areas around the mean.

use crate::mesh::Mesh;

/// Summary statistics over all face areas.
#[derive(Clone, Copy, Debug)]
pub struct AreaStats {
    pub face_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    /// Mean absolute deviation from the mean area
    pub mean_abs_dev: f64,
}

impl AreaStats {
    /// Standard deviation as a percentage of the mean area.
    pub fn variation_percent(&self) -> f64 {
        if self.mean > 0.0 {
            self.std_dev / self.mean * 100.0
        } else {
            0.0
        }
    }
}

/// Compute area statistics from the mesh's cached face areas.
pub fn area_stats(mesh: &Mesh) -> AreaStats {
    let face_count = mesh.faces.len();
    if face_count == 0 {
        return AreaStats {
            face_count: 0,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
            mean_abs_dev: 0.0,
        };
    }

    let mut sum = 0.0;
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for face in &mesh.faces {
        sum += face.area;
        min = min.min(face.area);
        max = max.max(face.area);
    }
    let mean = sum / face_count as f64;

    let mut sq_sum = 0.0;
    let mut abs_sum = 0.0;
    for face in &mesh.faces {
        let dev = face.area - mean;
        sq_sum += dev * dev;
        abs_sum += dev.abs();
    }

    AreaStats {
        face_count,
        mean,
        min,
        max,
        std_dev: (sq_sum / face_count as f64).sqrt(),
        mean_abs_dev: abs_sum / face_count as f64,
    }
}
