pub mod angle;
pub mod config;
pub mod cross;
pub mod projection;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Cannot normalize the zero vector")]
    ZeroVector,
    #[error("Cannot compute an angle with the zero vector")]
    UndefinedAngle,
    #[error("No unique parallel component exists for this vector")]
    NoUniqueParallelComponent,
    #[error("No unique orthogonal component exists for this vector")]
    NoUniqueOrthogonalComponent,
    #[error("Cross product only works in 2 or 3 dimensions")]
    UnsupportedDimension(usize),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use angle::AngleUnit;
pub use config::Tolerances;
pub use utils::generate_random_vectors;
pub use vector::{IntoCoordinate, Vector};
