//! Unit conversion for front-end input
//!
//! The solver itself is unit-agnostic; these helpers convert user input into
//! whatever consistent unit pair the caller works in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Meter,
    Foot,
    Inch,
}

impl LengthUnit {
    /// Meters per unit
    pub fn to_meters(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Meter => 1.0,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        };
        write!(f, "{s}")
    }
}

/// Force units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    Kilonewton,
    Pound,
    Kip,
}

impl ForceUnit {
    /// Newtons per unit
    pub fn to_newtons(&self) -> f64 {
        match self {
            ForceUnit::Newton => 1.0,
            ForceUnit::Kilonewton => 1000.0,
            ForceUnit::Pound => 4.448,
            ForceUnit::Kip => 4448.2216,
        }
    }
}

impl fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kilonewton => "kN",
            ForceUnit::Pound => "lb",
            ForceUnit::Kip => "kip",
        };
        write!(f, "{s}")
    }
}

/// Convert a length between units
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.to_meters() / to.to_meters()
}

/// Convert a force between units
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    value * from.to_newtons() / to.to_newtons()
}

/// Convert a moment (force × length) between unit pairs
pub fn convert_moment(
    value: f64,
    from: (ForceUnit, LengthUnit),
    to: (ForceUnit, LengthUnit),
) -> f64 {
    value * (from.0.to_newtons() / to.0.to_newtons()) * (from.1.to_meters() / to.1.to_meters())
}

/// Convert a line load (force / length) between unit pairs
pub fn convert_line_load(
    value: f64,
    from: (ForceUnit, LengthUnit),
    to: (ForceUnit, LengthUnit),
) -> f64 {
    value * (from.0.to_newtons() / to.0.to_newtons()) / (from.1.to_meters() / to.1.to_meters())
}

/// Convert a second moment of area (length⁴) between units
pub fn convert_inertia(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let ratio = from.to_meters() / to.to_meters();
    value * ratio.powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        assert!((convert_length(1.0, LengthUnit::Foot, LengthUnit::Meter) - 0.3048).abs() < 1e-12);
        assert!(
            (convert_length(12.0, LengthUnit::Inch, LengthUnit::Foot) - 1.0).abs() < 1e-12
        );
    }

    #[test]
    fn test_force_conversion() {
        assert!(
            (convert_force(1.0, ForceUnit::Kip, ForceUnit::Pound) - 1000.05).abs() < 0.1
        );
    }

    #[test]
    fn test_line_load_conversion() {
        // 1 kN/m in N/mm
        let value = convert_line_load(
            1.0,
            (ForceUnit::Kilonewton, LengthUnit::Meter),
            (ForceUnit::Newton, LengthUnit::Millimeter),
        );
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inertia_conversion() {
        // 1 m^4 = 1e12 mm^4
        let value = convert_inertia(1.0, LengthUnit::Meter, LengthUnit::Millimeter);
        assert!((value - 1.0e12).abs() < 1.0);
    }
}
