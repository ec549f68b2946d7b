//! Support conditions

use serde::{Deserialize, Serialize};

/// Boundary condition of a beam
///
/// `Fixed` and `Cantilever` are built in at a single position (`x = 0`
/// unless moved); the cantilever is simply the fixed case with nothing past
/// the free tip. Simple supports sit at the beam ends by default but may be
/// moved inside the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportType {
    /// Pin and roller pair, two reaction forces
    SimplySupported,
    /// Built in at one position, reaction force plus fixing moment
    Fixed,
    /// Built in at one position with the rest of the span free
    Cantilever,
}

impl Default for SupportType {
    fn default() -> Self {
        Self::SimplySupported
    }
}

impl SupportType {
    /// Number of reaction components resolved by statics
    pub fn reaction_components(&self) -> usize {
        match self {
            SupportType::SimplySupported => 2,
            // Vertical force, fixing moment, and the built-in axial restraint
            SupportType::Fixed | SupportType::Cantilever => 3,
        }
    }

    /// True for the built-in variants
    pub fn is_fixed_end(&self) -> bool {
        matches!(self, SupportType::Fixed | SupportType::Cantilever)
    }

    /// The two boundary conditions that pin down the integration constants
    ///
    /// `left` and `right` are the support positions for the simply-supported
    /// pair; the fixed variants constrain deflection and slope at the
    /// built-in end, passed as `left`.
    pub fn boundary_conditions(&self, left: f64, right: f64) -> [BoundaryCondition; 2] {
        match self {
            SupportType::SimplySupported => [
                BoundaryCondition::deflection(left),
                BoundaryCondition::deflection(right),
            ],
            SupportType::Fixed | SupportType::Cantilever => [
                BoundaryCondition::deflection(left),
                BoundaryCondition::slope(left),
            ],
        }
    }
}

/// Which derivative of the elastic curve a boundary condition constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BcKind {
    /// Zero displacement
    Deflection,
    /// Zero rotation
    Slope,
}

/// A zero-valued boundary condition at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCondition {
    /// Position along the beam
    pub position: f64,
    /// Constrained quantity
    pub kind: BcKind,
}

impl BoundaryCondition {
    /// Zero deflection at `position`
    pub fn deflection(position: f64) -> Self {
        Self {
            position,
            kind: BcKind::Deflection,
        }
    }

    /// Zero slope at `position`
    pub fn slope(position: f64) -> Self {
        Self {
            position,
            kind: BcKind::Slope,
        }
    }
}
