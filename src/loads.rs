//! Applied loads on the beam
//!
//! ## Sign Convention
//! - Point and distributed forces: positive magnitude acts downward
//! - Point moments: positive magnitude acts counterclockwise
//! - Reactions and internal shear/moment follow the usual engineering
//!   convention (reactions positive upward, sagging moment positive)

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::singularity::SingularityTerm;

/// A single load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Load {
    /// Concentrated force (downward positive) at a position along the span
    PointForce { position: f64, magnitude: f64 },

    /// Line load between `start` and `end`, linearly varying from
    /// `start_magnitude` to `end_magnitude` (downward positive).
    /// Equal magnitudes give the usual uniform load.
    Distributed {
        start: f64,
        end: f64,
        start_magnitude: f64,
        end_magnitude: f64,
    },

    /// Concentrated moment (counterclockwise positive) at a position
    PointMoment { position: f64, magnitude: f64 },
}

impl Load {
    /// Create a point force (downward positive)
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::PointForce {
            position,
            magnitude,
        }
    }

    /// Create a uniform distributed load over `[start, end]`
    pub fn distributed(magnitude: f64, start: f64, end: f64) -> Self {
        Load::Distributed {
            start,
            end,
            start_magnitude: magnitude,
            end_magnitude: magnitude,
        }
    }

    /// Create a linearly varying distributed load over `[start, end]`
    pub fn linear(start_magnitude: f64, end_magnitude: f64, start: f64, end: f64) -> Self {
        Load::Distributed {
            start,
            end,
            start_magnitude,
            end_magnitude,
        }
    }

    /// Create a triangular load, zero at `start` and `magnitude` at `end`
    pub fn triangular(magnitude: f64, start: f64, end: f64) -> Self {
        Self::linear(0.0, magnitude, start, end)
    }

    /// Create a point moment (counterclockwise positive)
    pub fn moment(magnitude: f64, position: f64) -> Self {
        Load::PointMoment {
            position,
            magnitude,
        }
    }

    /// Total downward force carried by this load
    pub fn total_force(&self) -> f64 {
        match *self {
            Load::PointForce { magnitude, .. } => magnitude,
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => (start_magnitude + end_magnitude) / 2.0 * (end - start),
            Load::PointMoment { .. } => 0.0,
        }
    }

    /// Statical moment of this load about position `p`
    ///
    /// Downward forces to the right of `p` count positive, so equilibrium
    /// about `p` reads `Σ R_j (x_j - p) = Σ statical_moment(p)`. A
    /// counterclockwise point moment contributes its negated magnitude.
    pub fn statical_moment(&self, p: f64) -> f64 {
        match *self {
            Load::PointForce {
                position,
                magnitude,
            } => magnitude * (position - p),
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => {
                // ∫ w(x) (x - p) dx for the trapezoidal w(x)
                let len = end - start;
                let slope = end_magnitude - start_magnitude;
                let about_start = start_magnitude * len * len / 2.0 + slope * len * len / 3.0;
                about_start + (start - p) * self.total_force()
            }
            Load::PointMoment { magnitude, .. } => -magnitude,
        }
    }

    /// Check the load lies within `[0, length]` and is well formed
    pub fn validate(&self, length: f64) -> BeamResult<()> {
        let in_span = |position: f64| {
            if position < 0.0 || position > length {
                Err(BeamError::LoadOutOfSpan { position, length })
            } else {
                Ok(())
            }
        };
        match *self {
            Load::PointForce { position, .. } | Load::PointMoment { position, .. } => {
                in_span(position)
            }
            Load::Distributed { start, end, .. } => {
                in_span(start)?;
                in_span(end)?;
                if end <= start {
                    return Err(BeamError::InvalidGeometry(format!(
                        "distributed load must have start < end (got {start}..{end})"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Contribution of this load to the net upward load `q(x)` as Macaulay
    /// terms. Distributed loads stopping before the beam end get closing
    /// terms so the bracket sum vanishes past `end`.
    pub fn load_terms(&self, length: f64) -> Vec<SingularityTerm> {
        match *self {
            Load::PointForce {
                position,
                magnitude,
            } => vec![SingularityTerm::new(-magnitude, position, -1)],
            Load::PointMoment {
                position,
                magnitude,
            } => vec![SingularityTerm::new(-magnitude, position, -2)],
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => {
                let slope = (end_magnitude - start_magnitude) / (end - start);
                let mut terms = vec![SingularityTerm::new(-start_magnitude, start, 0)];
                if slope != 0.0 {
                    terms.push(SingularityTerm::new(-slope, start, 1));
                }
                if end < length {
                    terms.push(SingularityTerm::new(end_magnitude, end, 0));
                    if slope != 0.0 {
                        terms.push(SingularityTerm::new(slope, end, 1));
                    }
                }
                terms
            }
        }
    }
}
