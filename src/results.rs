//! Result types for beam analysis

use serde::{Deserialize, Serialize};

use crate::diagram::DiagramSet;
use crate::reactions::ReactionSet;

/// Sampled diagram curves for plotting, as `(x, value)` pairs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramSamples {
    /// Shear force samples
    pub shear: Vec<(f64, f64)>,
    /// Bending moment samples
    pub moment: Vec<(f64, f64)>,
    /// Slope samples
    pub slope: Vec<(f64, f64)>,
    /// Deflection samples
    pub deflection: Vec<(f64, f64)>,
}

impl DiagramSamples {
    /// Create empty sample sets with reserved capacity
    pub fn with_capacity(n: usize) -> Self {
        Self {
            shear: Vec::with_capacity(n),
            moment: Vec::with_capacity(n),
            slope: Vec::with_capacity(n),
            deflection: Vec::with_capacity(n),
        }
    }

    /// Extreme (largest magnitude) values of the sampled curves
    pub fn extremes(&self) -> Extremes {
        let (max_shear_position, max_shear) = peak(&self.shear);
        let (max_moment_position, max_moment) = peak(&self.moment);
        let (max_deflection_position, max_deflection) = peak(&self.deflection);
        Extremes {
            max_shear,
            max_shear_position,
            max_moment,
            max_moment_position,
            max_deflection,
            max_deflection_position,
        }
    }
}

/// Return the (position, signed value) of the largest-magnitude sample
fn peak(samples: &[(f64, f64)]) -> (f64, f64) {
    samples
        .iter()
        .copied()
        .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .unwrap_or((0.0, 0.0))
}

/// Largest-magnitude values of the sampled diagrams, with their positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    /// Peak shear force (signed)
    pub max_shear: f64,
    /// Position of the peak shear
    pub max_shear_position: f64,
    /// Peak bending moment (signed)
    pub max_moment: f64,
    /// Position of the peak moment
    pub max_moment_position: f64,
    /// Peak deflection (signed, negative is downward)
    pub max_deflection: f64,
    /// Position of the peak deflection
    pub max_deflection_position: f64,
}

/// Everything the plotting front end needs from one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResults {
    /// Resolved support reactions
    pub reactions: ReactionSet,
    /// Closed-form diagrams
    pub diagrams: DiagramSet,
    /// Sampled curves at the requested resolution
    pub samples: DiagramSamples,
    /// Peak values and their positions
    pub extremes: Extremes,
}
