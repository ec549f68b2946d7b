//! Resolved support reactions

use serde::{Deserialize, Serialize};

use crate::singularity::SingularityTerm;

/// Reaction components at one support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Support position along the beam
    pub position: f64,
    /// Reaction force, positive upward
    pub force: f64,
    /// Fixing moment, positive counterclockwise (zero at simple supports)
    pub moment: f64,
}

impl Reaction {
    /// A pin or roller reaction (force only)
    pub fn force(position: f64, force: f64) -> Self {
        Self {
            position,
            force,
            moment: 0.0,
        }
    }

    /// A fixed-end reaction (force and fixing moment)
    pub fn fixed(position: f64, force: f64, moment: f64) -> Self {
        Self {
            position,
            force,
            moment,
        }
    }
}

/// The full set of resolved reactions, keyed by support position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionSet {
    /// Reactions ordered by support position
    pub reactions: Vec<Reaction>,
}

impl ReactionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reaction
    pub fn push(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }

    /// Look up the reaction at a support position
    pub fn at(&self, position: f64) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.position == position)
    }

    /// Sum of reaction forces (upward positive)
    pub fn total_force(&self) -> f64 {
        self.reactions.iter().map(|r| r.force).sum()
    }

    /// Contribution of the reactions to the net upward load `q(x)`
    ///
    /// An upward force becomes `+R <x - p>^-1`; a counterclockwise fixing
    /// moment enters with the same sign flip as an applied moment.
    pub fn load_terms(&self) -> Vec<SingularityTerm> {
        let mut terms = Vec::new();
        for r in &self.reactions {
            if r.force != 0.0 {
                terms.push(SingularityTerm::new(r.force, r.position, -1));
            }
            if r.moment != 0.0 {
                terms.push(SingularityTerm::new(-r.moment, r.position, -2));
            }
        }
        terms
    }
}
