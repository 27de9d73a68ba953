//! Generation parameters and validation
//!
//! The parameter tuple (ring count, spacing, seed, iterations, strength)
//! fully determines the generated map, so it is echoed back verbatim in
//! the exported payload.

use serde::{Deserialize, Serialize};

/// Parameters for one full map generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Number of concentric hex rings around the center vertex
    pub ring_count: usize,
    /// Distance between adjacent lattice points
    pub lattice_spacing: f64,
    /// Seed for the pair-shuffle and relaxation-order shuffles
    pub random_seed: u64,
    /// Number of relaxation passes over the vertex set
    pub relaxation_iterations: usize,
    /// Fraction of the distance to the weighted centroid moved per pass, in (0, 1]
    pub relaxation_strength: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            ring_count: 10,
            lattice_spacing: 40.0,
            random_seed: 0,
            relaxation_iterations: 500,
            relaxation_strength: 0.08,
        }
    }
}

impl GenerationParams {
    /// Reject invalid configurations before any generation work starts.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.ring_count == 0 {
            return Err(GenerationError::InvalidParams(
                "ring count must be at least 1".to_string(),
            ));
        }
        if !(self.lattice_spacing > 0.0) {
            return Err(GenerationError::InvalidParams(format!(
                "lattice spacing must be positive, got {}",
                self.lattice_spacing
            )));
        }
        if !(self.relaxation_strength > 0.0 && self.relaxation_strength <= 1.0) {
            return Err(GenerationError::InvalidParams(format!(
                "relaxation strength must be in (0, 1], got {}",
                self.relaxation_strength
            )));
        }
        Ok(())
    }
}

/// Errors that can abort a generation run.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationError {
    /// Rejected configuration (bad ring count, spacing, or strength)
    InvalidParams(String),
    /// Internal consistency failure: a face referencing a missing vertex
    /// or an adjacency-index asymmetry. Not user-recoverable.
    BrokenTopology(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::InvalidParams(msg) => write!(f, "invalid parameters: {}", msg),
            GenerationError::BrokenTopology(msg) => write!(f, "broken mesh topology: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}
