//! Beam Solver - shear, moment, slope and deflection diagrams
//!
//! This library solves bending of prismatic beams under combinations of
//! point loads, distributed loads, and point moments, for simply-supported,
//! fixed, and cantilever boundary conditions. Loads are represented as
//! Macaulay (singularity) functions; the net loading function is integrated
//! symbolically for shear and moment, then divided by EI and integrated
//! twice more for slope and deflection, with the two integration constants
//! resolved from the support boundary conditions.
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! // 12 m simply-supported beam, EI = 2.4e7
//! let mut beam = Beam::new(12.0, 2.0e11, 1.2e-4).unwrap();
//!
//! // 10 kN point load at midspan, 2 kN/m over the full span
//! beam.add_load(Load::point(10_000.0, 6.0)).unwrap();
//! beam.add_load(Load::distributed(2_000.0, 0.0, 12.0)).unwrap();
//!
//! let results = beam.analyze(201).unwrap();
//!
//! // Reactions balance the applied loads
//! assert!((results.reactions.total_force() - 34_000.0).abs() < 1e-6);
//!
//! // Closed-form diagrams are available for point evaluation
//! let mid_moment = results.diagrams.moment_at(6.0).unwrap();
//! assert!(mid_moment > 0.0);
//! ```
//!
//! ## Sign Convention
//! - Applied forces positive downward, applied moments positive
//!   counterclockwise
//! - Reactions positive upward, bending moment sagging positive
//! - Deflection positive upward (downward loads deflect negative)

pub mod beam;
pub mod diagram;
pub mod error;
pub mod loads;
pub mod reactions;
pub mod results;
pub mod section;
pub mod singularity;
pub mod supports;
pub mod units;

// Re-export common types
pub mod prelude {
    pub use crate::beam::Beam;
    pub use crate::diagram::DiagramSet;
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::Load;
    pub use crate::reactions::{Reaction, ReactionSet};
    pub use crate::results::{BeamResults, DiagramSamples, Extremes};
    pub use crate::section::ISection;
    pub use crate::singularity::{SingularityExpr, SingularityTerm};
    pub use crate::supports::{BcKind, BoundaryCondition, SupportType};
    pub use crate::units::{ForceUnit, LengthUnit};
}
