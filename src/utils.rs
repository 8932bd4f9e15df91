use crate::{vector::Vector, Result};
use ndarray::Array1;
use rand::Rng;

/// Coordinates are drawn uniformly from this half-open range.
pub const RANDOM_COORDINATE_RANGE: std::ops::Range<f64> = -10.0..10.0;

pub fn random_vector_with_rng<R: Rng>(dimension: usize, rng: &mut R) -> Result<Vector> {
    Vector::from_array(Array1::from_vec(
        (0..dimension)
            .map(|_| rng.gen_range(RANDOM_COORDINATE_RANGE))
            .collect(),
    ))
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| random_vector_with_rng(dim, &mut rng))
        .collect()
}
