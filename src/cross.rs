use crate::{vector::Vector, Result, VectorError};
use ndarray::array;
use tracing::debug;

impl Vector {
    /// Embeds a 2D vector in R³ by appending a zero `z` coordinate. 3D
    /// vectors are returned unchanged; other dimensions have no embedding.
    pub fn embedded_in_r3(&self) -> Result<Vector> {
        match self.dimension() {
            3 => Ok(self.clone()),
            2 => Ok(Vector::from_data(array![self[0], self[1], 0.0])),
            dimension => {
                debug!(dimension, "no embedding in R3");
                Err(VectorError::UnsupportedDimension(dimension))
            }
        }
    }

    /// Cross product of two vectors of the same dimension. 2D operands are
    /// embedded in R³ first, so the result is always 3-dimensional.
    pub fn cross_product(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        let a = self.embedded_in_r3()?;
        let b = other.embedded_in_r3()?;
        let (x1, y1, z1) = (a[0], a[1], a[2]);
        let (x2, y2, z2) = (b[0], b[1], b[2]);
        Ok(Vector::from_data(array![
            y1 * z2 - y2 * z1,
            -(x1 * z2 - x2 * z1),
            x1 * y2 - x2 * y1
        ]))
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross_product(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }
}
