//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam analysis operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Load position {position} is outside the span [0, {length}]")]
    LoadOutOfSpan { position: f64, length: f64 },

    #[error("Support position {position} is outside the span [0, {length}]")]
    SupportOutOfSpan { position: f64, length: f64 },

    #[error("Support configuration is statically indeterminate: {0}")]
    Indeterminate(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Evaluation point {x} is outside the span [0, {length}]")]
    OutOfDomain { x: f64, length: f64 },

    #[error("Boundary conditions could not be resolved: {0}")]
    BoundaryConditions(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam analysis operations
pub type BeamResult<T> = Result<T, BeamError>;
