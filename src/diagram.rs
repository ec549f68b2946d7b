//! Diagram generation by symbolic integration of the net loading function
//!
//! The net transverse load `q(x)` is assembled from the resolved reactions
//! and the applied loads as a sum of Macaulay terms, then integrated:
//!
//! ```text
//! V(x)      = ∫ q dx
//! M(x)      = ∫ V dx
//! EI θ(x)   = ∫ M dx + C1
//! EI y(x)   = ∫∫ M dx + C1 x + C2
//! ```
//!
//! The two constants are resolved from the support boundary conditions by a
//! 2×2 linear solve. Deflection is positive upward, so downward loading
//! produces negative deflection.

use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::error::{BeamError, BeamResult};
use crate::reactions::ReactionSet;
use crate::results::DiagramSamples;
use crate::singularity::{SingularityExpr, SingularityTerm};
use crate::supports::BcKind;

/// The four closed-form diagrams of a solved beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSet {
    /// Beam span the diagrams are valid over
    pub span: f64,
    /// Shear force V(x)
    pub shear: SingularityExpr,
    /// Bending moment M(x), sagging positive
    pub moment: SingularityExpr,
    /// Slope θ(x) of the elastic curve
    pub slope: SingularityExpr,
    /// Deflection y(x), positive upward
    pub deflection: SingularityExpr,
}

impl DiagramSet {
    /// Build the diagrams for a beam with already-resolved reactions
    pub fn build(beam: &Beam, reactions: &ReactionSet) -> BeamResult<DiagramSet> {
        let mut q = SingularityExpr::from_terms(reactions.load_terms());
        for load in beam.loads() {
            for term in load.load_terms(beam.length) {
                q.add_term(term);
            }
        }

        let shear = q.integrate();
        let moment = shear.integrate();

        // EI θ and EI y without their integration constants
        let ei_slope = moment.integrate();
        let ei_deflection = ei_slope.integrate();

        let (c1, c2) = solve_constants(beam, &ei_slope, &ei_deflection)?;
        debug!("integration constants: C1 = {c1}, C2 = {c2}");

        let ei = beam.flexural_rigidity();
        let mut slope = ei_slope;
        slope.add_term(SingularityTerm::new(c1, 0.0, 0));
        let mut deflection = ei_deflection;
        deflection.add_term(SingularityTerm::new(c1, 0.0, 1));
        deflection.add_term(SingularityTerm::new(c2, 0.0, 0));

        Ok(DiagramSet {
            span: beam.length,
            shear,
            moment,
            slope: slope.scaled(1.0 / ei),
            deflection: deflection.scaled(1.0 / ei),
        })
    }

    /// Shear force at `x`
    pub fn shear_at(&self, x: f64) -> BeamResult<f64> {
        self.check_domain(x)?;
        Ok(self.shear.eval(x))
    }

    /// Bending moment at `x`
    pub fn moment_at(&self, x: f64) -> BeamResult<f64> {
        self.check_domain(x)?;
        Ok(self.moment.eval(x))
    }

    /// Slope at `x`
    pub fn slope_at(&self, x: f64) -> BeamResult<f64> {
        self.check_domain(x)?;
        Ok(self.slope.eval(x))
    }

    /// Deflection at `x`
    pub fn deflection_at(&self, x: f64) -> BeamResult<f64> {
        self.check_domain(x)?;
        Ok(self.deflection.eval(x))
    }

    /// Sample all four diagrams at `resolution` evenly spaced stations
    /// over `[0, span]` for plotting
    pub fn sample(&self, resolution: usize) -> BeamResult<DiagramSamples> {
        if resolution < 2 {
            return Err(BeamError::InvalidInput(format!(
                "sampling resolution must be at least 2 (got {resolution})"
            )));
        }
        let mut samples = DiagramSamples::with_capacity(resolution);
        for i in 0..resolution {
            let x = self.span * i as f64 / (resolution - 1) as f64;
            samples.shear.push((x, self.shear.eval(x)));
            samples.moment.push((x, self.moment.eval(x)));
            samples.slope.push((x, self.slope.eval(x)));
            samples.deflection.push((x, self.deflection.eval(x)));
        }
        Ok(samples)
    }

    fn check_domain(&self, x: f64) -> BeamResult<()> {
        if x < 0.0 || x > self.span {
            return Err(BeamError::OutOfDomain {
                x,
                length: self.span,
            });
        }
        Ok(())
    }
}

/// Resolve C1 and C2 from the two boundary conditions of the support type
///
/// A slope condition at `p` reads `C1 = -EIθ(p)`; a deflection condition
/// reads `C1 p + C2 = -EIy(p)`. Assembled as a 2×2 system and solved with
/// nalgebra; a singular system means the conditions do not pin down the
/// elastic curve.
fn solve_constants(
    beam: &Beam,
    ei_slope: &SingularityExpr,
    ei_deflection: &SingularityExpr,
) -> BeamResult<(f64, f64)> {
    let bcs = beam.boundary_conditions();

    let mut a = Matrix2::zeros();
    let mut b = Vector2::zeros();
    for (row, bc) in bcs.iter().enumerate() {
        match bc.kind {
            BcKind::Slope => {
                a[(row, 0)] = 1.0;
                a[(row, 1)] = 0.0;
                b[row] = -ei_slope.eval(bc.position);
            }
            BcKind::Deflection => {
                a[(row, 0)] = bc.position;
                a[(row, 1)] = 1.0;
                b[row] = -ei_deflection.eval(bc.position);
            }
        }
    }

    match a.lu().solve(&b) {
        Some(c) => Ok((c[0], c[1])),
        None => Err(BeamError::BoundaryConditions(
            "boundary conditions are linearly dependent".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Load;
    use crate::supports::SupportType;

    const TOL: f64 = 1e-9;

    fn midspan_point_beam() -> (Beam, ReactionSet) {
        // 10 long, EI = 1e6, P = 1000 at midspan
        let mut beam = Beam::new(10.0, 1.0e6, 1.0).unwrap();
        beam.add_load(Load::point(1000.0, 5.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        (beam, reactions)
    }

    #[test]
    fn test_shear_and_moment_midspan_point() {
        let (beam, reactions) = midspan_point_beam();
        let d = DiagramSet::build(&beam, &reactions).unwrap();

        // V = +R1 left of the load, -R2 right of it
        assert!((d.shear_at(2.0).unwrap() - 500.0).abs() < TOL);
        assert!((d.shear_at(8.0).unwrap() + 500.0).abs() < TOL);

        // Max moment PL/4 at midspan, zero at the supports
        assert!((d.moment_at(5.0).unwrap() - 2500.0).abs() < TOL);
        assert!(d.moment_at(0.0).unwrap().abs() < TOL);
        assert!(d.moment_at(10.0).unwrap().abs() < TOL);
    }

    #[test]
    fn test_deflection_midspan_point() {
        let (beam, reactions) = midspan_point_beam();
        let d = DiagramSet::build(&beam, &reactions).unwrap();

        // Supports stay put
        assert!(d.deflection_at(0.0).unwrap().abs() < TOL);
        assert!(d.deflection_at(10.0).unwrap().abs() < TOL);

        // Midspan deflection -PL^3 / 48EI (downward)
        let expected = -1000.0 * 10.0_f64.powi(3) / (48.0 * 1.0e6);
        assert!((d.deflection_at(5.0).unwrap() - expected).abs() < TOL);

        // Symmetric problem: zero slope at midspan
        assert!(d.slope_at(5.0).unwrap().abs() < TOL);
    }

    #[test]
    fn test_moment_is_integral_of_shear() {
        let (beam, reactions) = midspan_point_beam();
        let d = DiagramSet::build(&beam, &reactions).unwrap();

        // Integrating the returned shear expression reproduces the moment
        // expression (both vanish at x = 0, so no constant is lost).
        let integrated = d.shear.integrate();
        for i in 0..=20 {
            let x = d.span * i as f64 / 20.0;
            assert!((integrated.eval(x) - d.moment.eval(x)).abs() < TOL);
        }
    }

    #[test]
    fn test_cantilever_boundary_conditions_exact() {
        // Fixed at x = 0, P = 400 at the tip of an 8 long beam
        let mut beam = Beam::new(8.0, 2.0e6, 1.0).unwrap();
        beam.set_support(SupportType::Cantilever);
        beam.add_load(Load::point(400.0, 8.0)).unwrap();
        let reactions = beam.solve_reactions().unwrap();
        let d = DiagramSet::build(&beam, &reactions).unwrap();

        assert_eq!(d.deflection_at(0.0).unwrap(), 0.0);
        assert_eq!(d.slope_at(0.0).unwrap(), 0.0);

        // Fixing moment -PL at the wall, zero at the tip
        assert!((d.moment_at(0.0).unwrap() + 400.0 * 8.0).abs() < TOL);
        assert!(d.moment_at(8.0).unwrap().abs() < TOL);

        // Tip deflection -PL^3 / 3EI, tip slope -PL^2 / 2EI
        let ei = 2.0e6;
        let tip = -400.0 * 8.0_f64.powi(3) / (3.0 * ei);
        let rot = -400.0 * 8.0_f64.powi(2) / (2.0 * ei);
        assert!((d.deflection_at(8.0).unwrap() - tip).abs() < TOL);
        assert!((d.slope_at(8.0).unwrap() - rot).abs() < TOL);
    }

    #[test]
    fn test_sampling_resolution() {
        let (beam, reactions) = midspan_point_beam();
        let d = DiagramSet::build(&beam, &reactions).unwrap();

        let samples = d.sample(11).unwrap();
        assert_eq!(samples.shear.len(), 11);
        assert_eq!(samples.shear[0].0, 0.0);
        assert_eq!(samples.shear[10].0, 10.0);

        assert!(matches!(
            d.sample(1),
            Err(BeamError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_domain_bounds() {
        let (beam, reactions) = midspan_point_beam();
        let d = DiagramSet::build(&beam, &reactions).unwrap();
        assert!(matches!(
            d.shear_at(-0.1),
            Err(BeamError::OutOfDomain { .. })
        ));
        assert!(matches!(
            d.deflection_at(10.1),
            Err(BeamError::OutOfDomain { .. })
        ));
    }
}
