//! Decomposition of a vector into components parallel and orthogonal to a
//! basis vector.

use crate::{vector::Vector, Result, VectorError};
use tracing::trace;

impl Vector {
    /// Projection of `self` onto the direction of `basis`.
    ///
    /// Fails with `NoUniqueParallelComponent` when `basis` is the zero vector.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector> {
        self.check_dimension(basis)?;
        let unit = basis.normalized().map_err(|err| match err {
            VectorError::ZeroVector => {
                trace!("parallel component requested for the zero basis");
                VectorError::NoUniqueParallelComponent
            }
            other => other,
        })?;
        let weight = self.dot(&unit)?;
        Ok(unit.scaled(weight))
    }

    /// What remains of `self` after removing its component parallel to
    /// `basis`.
    ///
    /// Fails with `NoUniqueOrthogonalComponent` when `basis` is the zero
    /// vector.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.component_parallel_to(basis).map_err(|err| match err {
            VectorError::NoUniqueParallelComponent => {
                trace!("orthogonal component requested for the zero basis");
                VectorError::NoUniqueOrthogonalComponent
            }
            other => other,
        })?;
        self.minus(&projection)
    }

    /// `b * (self · b) / |b|²`, the same vector as `component_parallel_to`.
    ///
    /// Unlike `component_parallel_to` a zero basis is not re-signalled: the
    /// caller sees the plain `ZeroVector` error.
    pub fn project_onto(&self, b: &Vector) -> Result<Vector> {
        let a_dot_b = self.dot(b)?;
        if b.is_zero() {
            return Err(VectorError::ZeroVector);
        }
        let magnitude = b.magnitude();
        Ok(b.scaled(a_dot_b / (magnitude * magnitude)))
    }

    /// Signed length of the component of `self` along `basis`.
    pub fn scalar_projection(&self, basis: &Vector) -> Result<f64> {
        self.check_dimension(basis)?;
        let unit = basis.normalized().map_err(|err| match err {
            VectorError::ZeroVector => VectorError::NoUniqueParallelComponent,
            other => other,
        })?;
        self.dot(&unit)
    }
}
