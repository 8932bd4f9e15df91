use crate::config::Tolerances;
use crate::{Result, VectorError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul, Neg};
use tracing::debug;

/// Conversion of a numeric-like value into a single coordinate.
///
/// Implemented for the primitive numeric types and for numeric strings, so
/// `Vector::new(["1.5", "-2"])` and `Vector::new([1.5, -2.0])` build the
/// same vector. Values that are not finite numbers are rejected. Integer
/// impls stop at 32 bits, the widest that converts to `f64` exactly.
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Result<f64>;
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(%value, "rejected non-finite coordinate");
        Err(VectorError::TypeMismatch(format!(
            "{value} is not a finite number"
        )))
    }
}

fn parse_coordinate(text: &str) -> Result<f64> {
    let value = text.trim().parse::<f64>().map_err(|e| {
        debug!(input = text, "rejected non-numeric coordinate");
        VectorError::TypeMismatch(format!("'{text}' is not numeric: {e}"))
    })?;
    finite(value)
}

macro_rules! impl_into_coordinate {
    ($($t:ty),*) => {
        $(
            impl IntoCoordinate for $t {
                fn into_coordinate(self) -> Result<f64> {
                    finite(self as f64)
                }
            }

            impl IntoCoordinate for &$t {
                fn into_coordinate(self) -> Result<f64> {
                    finite(*self as f64)
                }
            }
        )*
    };
}

impl_into_coordinate!(f64, f32, i8, i16, i32, u8, u16, u32);

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> Result<f64> {
        parse_coordinate(self)
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Result<f64> {
        parse_coordinate(&self)
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Result<f64> {
        parse_coordinate(self)
    }
}

/// An immutable, non-empty tuple of finite coordinates.
///
/// Every operation returns a new `Vector`; the coordinates of an existing
/// value never change. Serializes as a plain sequence of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let data = coordinates
            .into_iter()
            .map(IntoCoordinate::into_coordinate)
            .collect::<Result<Vec<f64>>>()?;
        Self::from_array(Array1::from_vec(data))
    }

    pub fn from_array(data: Array1<f64>) -> Result<Self> {
        if data.is_empty() {
            debug!("rejected empty coordinate sequence");
            return Err(VectorError::InvalidArgument(
                "The coordinates must be nonempty".to_string(),
            ));
        }
        for value in data.iter() {
            finite(*value)?;
        }
        Ok(Self::from_data(data))
    }

    pub fn zeros(dimension: usize) -> Result<Self> {
        Self::from_array(Array1::zeros(dimension))
    }

    /// Wraps the result of an operation on already validated vectors.
    /// Storage is always standard layout so `coordinates` can borrow it as
    /// a slice.
    pub(crate) fn from_data(data: Array1<f64>) -> Self {
        if data.is_standard_layout() {
            Self { data }
        } else {
            Self {
                data: data.as_standard_layout().into_owned(),
            }
        }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn coordinates(&self) -> &[f64] {
        self.data
            .as_slice()
            .expect("vector storage is kept in standard layout")
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub(crate) fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            debug!(
                expected = self.dimension(),
                found = other.dimension(),
                "dimension mismatch"
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_data(&self.data + &other.data))
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_data(&self.data - &other.data))
    }

    /// Multiplies every coordinate by `scalar`, which may be a number or a
    /// numeric string.
    pub fn times_scalar<C: IntoCoordinate>(&self, scalar: C) -> Result<Vector> {
        let scalar = scalar.into_coordinate()?;
        Ok(self.scaled(scalar))
    }

    pub(crate) fn scaled(&self, scalar: f64) -> Vector {
        Self::from_data(&self.data * scalar)
    }

    fn largest_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |largest, x| largest.max(x.abs()))
    }

    /// Euclidean norm. Coordinates are scaled by the largest absolute
    /// coordinate before squaring, so the sum cannot overflow while the norm
    /// itself is representable.
    pub fn magnitude(&self) -> f64 {
        let largest = self.largest_abs();
        if largest == 0.0 {
            return 0.0;
        }
        let scaled = &self.data / largest;
        largest * scaled.dot(&scaled).sqrt()
    }

    pub fn normalized(&self) -> Result<Vector> {
        self.normalized_with(&Tolerances::default())
    }

    /// Unit vector in the direction of `self`, failing with `ZeroVector` when
    /// the magnitude is below `tolerances.zero`.
    pub fn normalized_with(&self, tolerances: &Tolerances) -> Result<Vector> {
        if self.is_zero_with(tolerances) {
            debug!(dimension = self.dimension(), "cannot normalize zero vector");
            return Err(VectorError::ZeroVector);
        }
        // Dividing by the largest coordinate first keeps this finite even
        // when the magnitude itself overflows.
        let scaled = &self.data / self.largest_abs();
        let length = scaled.dot(&scaled).sqrt();
        Ok(Self::from_data(scaled / length))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_with(&Tolerances::default())
    }

    pub fn is_zero_with(&self, tolerances: &Tolerances) -> bool {
        self.is_zero_within(tolerances.zero)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.data.dot(&other.data))
    }

    /// Element-wise comparison within an absolute tolerance. Vectors of
    /// different dimension are never approximately equal.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Rounds every coordinate half away from zero to `places` decimals.
    /// Coordinates that already carry fewer digits than `places` (the shifted
    /// value leaves the `f64` range) are kept as they are.
    pub fn rounded(&self, places: u32) -> Vector {
        let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
        Self::from_data(self.data.mapv(|x| {
            let shifted = x * factor;
            if shifted.is_finite() {
                shifted.round() / factor
            } else {
                x
            }
        }))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_data(-&self.data)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scaled(scalar)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates))
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.data.to_vec()
    }
}
