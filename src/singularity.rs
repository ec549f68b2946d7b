//! Macaulay (singularity function) expressions
//!
//! A singularity term `c * <x - a>^n` is zero for `x < a` and equals
//! `c * (x - a)^n` otherwise. Orders `-2` (point moment) and `-1` (point
//! force) only exist for symbolic integration; they evaluate to zero
//! numerically. Order `0` is a step, order `1` a ramp, and so on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single Macaulay bracket term `coefficient * <x - offset>^order`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingularityTerm {
    /// Multiplier in front of the bracket
    pub coefficient: f64,
    /// Bracket offset `a` in `<x - a>^n`
    pub offset: f64,
    /// Bracket exponent `n`, at least -2
    pub order: i32,
}

impl SingularityTerm {
    /// Create a new term
    pub fn new(coefficient: f64, offset: f64, order: i32) -> Self {
        debug_assert!(order >= -2, "Macaulay order below -2 is not supported");
        Self {
            coefficient,
            offset,
            order,
        }
    }

    /// Evaluate the term at `x`
    ///
    /// Negative orders represent concentrated effects and evaluate to zero.
    /// The bracket is active for `x >= offset` (Heaviside convention at the
    /// offset itself).
    pub fn eval(&self, x: f64) -> f64 {
        if self.order < 0 || x < self.offset {
            return 0.0;
        }
        self.coefficient * (x - self.offset).powi(self.order)
    }

    /// Integrate the term once
    ///
    /// `<x-a>^n` integrates to `<x-a>^(n+1)` for `n < 0` and to
    /// `<x-a>^(n+1) / (n+1)` for `n >= 0`.
    pub fn integrated(&self) -> Self {
        let coefficient = if self.order < 0 {
            self.coefficient
        } else {
            self.coefficient / (self.order + 1) as f64
        };
        Self {
            coefficient,
            offset: self.offset,
            order: self.order + 1,
        }
    }
}

impl fmt::Display for SingularityTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<x - {}>^{}",
            self.coefficient, self.offset, self.order
        )
    }
}

/// A sum of singularity terms forming one piecewise expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingularityExpr {
    /// Terms of the expression
    pub terms: Vec<SingularityTerm>,
}

impl SingularityExpr {
    /// Create an empty expression (identically zero)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an expression from a list of terms, merging like terms
    pub fn from_terms(terms: impl IntoIterator<Item = SingularityTerm>) -> Self {
        let mut expr = Self::new();
        for term in terms {
            expr.add_term(term);
        }
        expr
    }

    /// Add a term, merging it with an existing term of equal offset and order
    pub fn add_term(&mut self, term: SingularityTerm) {
        if term.coefficient == 0.0 {
            return;
        }
        if let Some(existing) = self
            .terms
            .iter_mut()
            .find(|t| t.order == term.order && t.offset == term.offset)
        {
            existing.coefficient += term.coefficient;
        } else {
            self.terms.push(term);
        }
    }

    /// Add every term of another expression
    pub fn add_expr(&mut self, other: &SingularityExpr) {
        for term in &other.terms {
            self.add_term(*term);
        }
    }

    /// Evaluate the expression at `x`
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.eval(x)).sum()
    }

    /// Integrate the expression once, term by term
    pub fn integrate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|t| t.integrated()).collect(),
        }
    }

    /// Return the expression scaled by a constant factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| SingularityTerm::new(t.coefficient * factor, t.offset, t.order))
                .collect(),
        }
    }

    /// True if the expression has no terms
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for SingularityExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
