//! Beam model container and reaction solver

use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::diagram::DiagramSet;
use crate::error::{BeamError, BeamResult};
use crate::loads::Load;
use crate::reactions::{Reaction, ReactionSet};
use crate::results::BeamResults;
use crate::supports::{BoundaryCondition, SupportType};

/// A prismatic beam with its supports and applied loads
///
/// ## Example
/// ```rust
/// use beam_solver::prelude::*;
///
/// // 10 m simply-supported beam, EI = 2e6
/// let mut beam = Beam::new(10.0, 2.0e6, 1.0).unwrap();
/// beam.add_load(Load::point(1000.0, 5.0)).unwrap();
/// beam.add_load(Load::distributed(50.0, 0.0, 10.0)).unwrap();
///
/// let results = beam.analyze(101).unwrap();
/// println!("left reaction: {}", results.reactions.reactions[0].force);
/// println!("peak moment: {}", results.extremes.max_moment);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Span length
    pub length: f64,
    /// Elastic modulus E
    pub elastic_modulus: f64,
    /// Second moment of area I
    pub second_moment: f64,
    /// Boundary condition
    support: SupportType,
    /// Simple-support positions (ignored for the fixed variants)
    support_left: f64,
    support_right: f64,
    /// Applied loads in insertion order
    loads: Vec<Load>,
}

impl Beam {
    /// Create a simply-supported beam with supports at both ends
    pub fn new(length: f64, elastic_modulus: f64, second_moment: f64) -> BeamResult<Self> {
        if length <= 0.0 {
            return Err(BeamError::InvalidGeometry(format!(
                "beam length must be positive (got {length})"
            )));
        }
        if elastic_modulus <= 0.0 || second_moment <= 0.0 {
            return Err(BeamError::InvalidInput(format!(
                "E and I must be positive (got E = {elastic_modulus}, I = {second_moment})"
            )));
        }
        Ok(Self {
            length,
            elastic_modulus,
            second_moment,
            support: SupportType::SimplySupported,
            support_left: 0.0,
            support_right: length,
            loads: Vec::new(),
        })
    }

    /// Change the boundary condition
    ///
    /// Switching to a fixed variant puts the built-in end at `x = 0`; move
    /// it with [`Beam::set_fixed_position`]. Switching back restores the
    /// simple supports to the beam ends.
    pub fn set_support(&mut self, support: SupportType) {
        self.support = support;
        if support.is_fixed_end() {
            self.support_left = 0.0;
            self.support_right = 0.0;
        } else if self.support_right <= self.support_left {
            self.support_left = 0.0;
            self.support_right = self.length;
        }
    }

    /// Place the simple supports anywhere inside the span
    pub fn set_support_positions(&mut self, left: f64, right: f64) -> BeamResult<()> {
        if self.support.is_fixed_end() {
            return Err(BeamError::InvalidInput(
                "support positions only apply to simply-supported beams".to_string(),
            ));
        }
        for position in [left, right] {
            if position < 0.0 || position > self.length {
                return Err(BeamError::SupportOutOfSpan {
                    position,
                    length: self.length,
                });
            }
        }
        self.support_left = left.min(right);
        self.support_right = left.max(right);
        Ok(())
    }

    /// Move the built-in end of a fixed or cantilever beam
    ///
    /// Spans on both sides of the support cantilever out freely.
    pub fn set_fixed_position(&mut self, position: f64) -> BeamResult<()> {
        if !self.support.is_fixed_end() {
            return Err(BeamError::InvalidInput(
                "a fixed position only applies to fixed or cantilever beams".to_string(),
            ));
        }
        if position < 0.0 || position > self.length {
            return Err(BeamError::SupportOutOfSpan {
                position,
                length: self.length,
            });
        }
        self.support_left = position;
        self.support_right = position;
        Ok(())
    }

    /// The current boundary condition
    pub fn support(&self) -> SupportType {
        self.support
    }

    /// Support positions as `(left, right)`; both equal the built-in end
    /// for the fixed variants
    pub fn support_positions(&self) -> (f64, f64) {
        (self.support_left, self.support_right)
    }

    /// Applied loads in insertion order
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.elastic_modulus * self.second_moment
    }

    /// Add a load, rejecting positions outside the span
    pub fn add_load(&mut self, load: Load) -> BeamResult<()> {
        load.validate(self.length)?;
        self.loads.push(load);
        Ok(())
    }

    /// The two boundary conditions implied by the support type
    pub fn boundary_conditions(&self) -> [BoundaryCondition; 2] {
        self.support
            .boundary_conditions(self.support_left, self.support_right)
    }

    /// Solve static equilibrium for the support reactions
    ///
    /// Simple supports give a 2×2 system in the two reaction forces; the
    /// fixed variants resolve a force and fixing moment directly. Coincident
    /// simple supports make the system singular and are reported as
    /// statically indeterminate.
    pub fn solve_reactions(&self) -> BeamResult<ReactionSet> {
        let total: f64 = self.loads.iter().map(Load::total_force).sum();

        let mut set = ReactionSet::new();
        if self.support.is_fixed_end() {
            // ΣF and ΣM about the wall
            let wall = self.support_left;
            let statical: f64 = self.loads.iter().map(|l| l.statical_moment(wall)).sum();
            set.push(Reaction::fixed(wall, total, statical));
            debug!("fixed-end reactions at {wall}: R = {total}, M = {statical}");
            return Ok(set);
        }

        let statical: f64 = self.loads.iter().map(|l| l.statical_moment(0.0)).sum();
        let (a, b) = (self.support_left, self.support_right);
        // Ra + Rb = ΣW,  Ra·a + Rb·b = Σ statical moment about 0
        let coeffs = Matrix2::new(1.0, 1.0, a, b);
        let rhs = Vector2::new(total, statical);
        let solution = coeffs.lu().solve(&rhs).ok_or_else(|| {
            BeamError::Indeterminate(format!(
                "simple supports at {a} and {b} cannot balance the load"
            ))
        })?;

        set.push(Reaction::force(a, solution[0]));
        set.push(Reaction::force(b, solution[1]));
        debug!(
            "simple-support reactions: Ra = {} at {a}, Rb = {} at {b}",
            solution[0], solution[1]
        );
        Ok(set)
    }

    /// Build the closed-form shear/moment/slope/deflection diagrams
    pub fn diagrams(&self) -> BeamResult<DiagramSet> {
        let reactions = self.solve_reactions()?;
        DiagramSet::build(self, &reactions)
    }

    /// Run the full pipeline: reactions, diagrams, sampled curves, extremes
    pub fn analyze(&self, resolution: usize) -> BeamResult<BeamResults> {
        let reactions = self.solve_reactions()?;
        let diagrams = DiagramSet::build(self, &reactions)?;
        let samples = diagrams.sample(resolution)?;
        let extremes = samples.extremes();
        Ok(BeamResults {
            reactions,
            diagrams,
            samples,
            extremes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_midspan_point_reactions() {
        // Single midspan P on a simply-supported beam: P/2 at each support
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.add_load(Load::point(1000.0, 5.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        assert!((reactions.at(0.0).unwrap().force - 500.0).abs() < TOL);
        assert!((reactions.at(10.0).unwrap().force - 500.0).abs() < TOL);
    }

    #[test]
    fn test_asymmetric_point_reactions() {
        // P at a: Ra = P(L-a)/L, Rb = Pa/L
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.add_load(Load::point(1000.0, 3.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        assert!((reactions.at(0.0).unwrap().force - 700.0).abs() < TOL);
        assert!((reactions.at(10.0).unwrap().force - 300.0).abs() < TOL);
    }

    #[test]
    fn test_reactions_balance_applied_loads() {
        let mut beam = Beam::new(12.0, 1.0e6, 1.0).unwrap();
        beam.add_load(Load::distributed(50.0, 0.0, 12.0)).unwrap();
        beam.add_load(Load::point(1000.0, 6.0)).unwrap();
        beam.add_load(Load::triangular(40.0, 2.0, 8.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();

        let applied: f64 = beam.loads().iter().map(Load::total_force).sum();
        assert!((reactions.total_force() - applied).abs() < TOL);
    }

    #[test]
    fn test_point_moment_reactions() {
        // A ccw moment m needs a clockwise reaction couple: Ra = m/L up,
        // Rb = m/L down.
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.add_load(Load::moment(500.0, 4.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        assert!((reactions.at(0.0).unwrap().force - 50.0).abs() < TOL);
        assert!((reactions.at(10.0).unwrap().force + 50.0).abs() < TOL);
    }

    #[test]
    fn test_cantilever_reactions() {
        let mut beam = Beam::new(6.0, 1.0e6, 1.0).unwrap();
        beam.set_support(SupportType::Cantilever);
        beam.add_load(Load::point(200.0, 6.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        let wall = reactions.at(0.0).unwrap();
        assert!((wall.force - 200.0).abs() < TOL);
        assert!((wall.moment - 1200.0).abs() < TOL);
    }

    #[test]
    fn test_interior_fixed_support_reactions() {
        // Built in at 2 m of a 6 m beam, load at the far tip:
        // fixing moment is taken about the wall, not the beam origin
        let mut beam = Beam::new(6.0, 1.0e6, 1.0).unwrap();
        beam.set_support(SupportType::Cantilever);
        beam.set_fixed_position(2.0).unwrap();
        beam.add_load(Load::point(200.0, 6.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        let wall = reactions.at(2.0).unwrap();
        assert!((wall.force - 200.0).abs() < TOL);
        assert!((wall.moment - 800.0).abs() < TOL);
    }

    #[test]
    fn test_fixed_position_validated() {
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        assert!(matches!(
            beam.set_fixed_position(2.0),
            Err(BeamError::InvalidInput(_))
        ));

        beam.set_support(SupportType::Fixed);
        assert!(matches!(
            beam.set_fixed_position(12.0),
            Err(BeamError::SupportOutOfSpan { .. })
        ));
        beam.set_fixed_position(2.0).unwrap();
        assert_eq!(beam.support_positions(), (2.0, 2.0));

        // Switching back restores end supports
        beam.set_support(SupportType::SimplySupported);
        assert_eq!(beam.support_positions(), (0.0, 10.0));
    }

    #[test]
    fn test_coincident_supports_are_indeterminate() {
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.set_support_positions(5.0, 5.0).unwrap();
        beam.add_load(Load::point(100.0, 2.0)).unwrap();
        assert!(matches!(
            beam.solve_reactions(),
            Err(BeamError::Indeterminate(_))
        ));
    }

    #[test]
    fn test_support_positions_validated() {
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        assert!(matches!(
            beam.set_support_positions(-1.0, 10.0),
            Err(BeamError::SupportOutOfSpan { .. })
        ));

        beam.set_support(SupportType::Fixed);
        assert!(matches!(
            beam.set_support_positions(0.0, 10.0),
            Err(BeamError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overhang_supports() {
        // Supports at 2 and 8, load at the very tip of the right overhang
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.set_support_positions(2.0, 8.0).unwrap();
        beam.add_load(Load::point(600.0, 10.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();

        // ΣM about the left support: Rb * 6 = 600 * 8
        assert!((reactions.at(8.0).unwrap().force - 800.0).abs() < TOL);
        assert!((reactions.at(2.0).unwrap().force + 200.0).abs() < TOL);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(matches!(
            Beam::new(0.0, 1.0e6, 1.0),
            Err(BeamError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Beam::new(10.0, -1.0, 1.0),
            Err(BeamError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_analyze_pipeline() {
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.add_load(Load::distributed(100.0, 0.0, 10.0)).unwrap();
        let results = beam.analyze(101).unwrap();

        assert!((results.reactions.total_force() - 1000.0).abs() < TOL);
        // Peak moment wL^2/8 at midspan
        assert!((results.extremes.max_moment - 1250.0).abs() < 1e-6);
        assert!((results.extremes.max_moment_position - 5.0).abs() < TOL);
        assert_eq!(results.samples.deflection.len(), 101);
    }
}
