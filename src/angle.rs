use crate::{config::Tolerances, vector::Vector, Result, VectorError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

fn undefined_angle(err: VectorError) -> VectorError {
    match err {
        VectorError::ZeroVector => {
            trace!("angle requested with the zero vector");
            VectorError::UndefinedAngle
        }
        other => other,
    }
}

impl Vector {
    /// Angle between `self` and `other`, in `[0, π]` radians or `[0, 180]`
    /// degrees. Fails with `UndefinedAngle` if either vector is zero.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        self.angle_with_tolerances(other, unit, &Tolerances::default())
    }

    fn angle_with_tolerances(
        &self,
        other: &Vector,
        unit: AngleUnit,
        tolerances: &Tolerances,
    ) -> Result<f64> {
        self.check_dimension(other)?;
        let u1 = self.normalized_with(tolerances).map_err(undefined_angle)?;
        let u2 = other.normalized_with(tolerances).map_err(undefined_angle)?;
        // Rounding can leave the dot product of two unit vectors just
        // outside the domain of acos.
        let cosine = u1.dot(&u2)?.clamp(-1.0, 1.0);
        Ok(unit.from_radians(cosine.acos()))
    }

    /// The zero vector is parallel to every vector.
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_to_with(other, &Tolerances::default())
    }

    pub fn is_parallel_to_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        self.is_parallel_to_with(
            other,
            &Tolerances {
                parallel: tolerance,
                ..Tolerances::default()
            },
        )
    }

    /// Uses `tolerances.zero` to detect the zero vector and
    /// `tolerances.parallel` as the allowed distance from 0 or π.
    pub fn is_parallel_to_with(&self, other: &Vector, tolerances: &Tolerances) -> Result<bool> {
        self.check_dimension(other)?;
        if self.is_zero_with(tolerances) || other.is_zero_with(tolerances) {
            return Ok(true);
        }
        let angle = self.angle_with_tolerances(other, AngleUnit::Radians, tolerances)?;
        Ok(angle.abs() < tolerances.parallel || (angle - PI).abs() < tolerances.parallel)
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_with(other, &Tolerances::default())
    }

    pub fn is_orthogonal_to_with(&self, other: &Vector, tolerances: &Tolerances) -> Result<bool> {
        self.is_orthogonal_to_within(other, tolerances.orthogonal)
    }

    pub fn is_orthogonal_to_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coordinates: &[f64]) -> Vector {
        Vector::new(coordinates).unwrap()
    }

    #[test]
    fn test_angle_in_radians_and_degrees() {
        let x = v(&[1.0, 0.0]);
        let y = v(&[0.0, 2.0]);
        let radians = x.angle_with(&y, AngleUnit::Radians).unwrap();
        assert!((radians - PI / 2.0).abs() < 1e-12);

        let degrees = x.angle_with(&y, AngleUnit::Degrees).unwrap();
        assert!((degrees - 90.0).abs() < 1e-9);
        assert_eq!(AngleUnit::default(), AngleUnit::Radians);
    }

    #[test]
    fn test_angles_from_lessons() {
        let radians = v(&[3.183, -7.627])
            .angle_with(&v(&[-2.668, 5.319]), AngleUnit::Radians)
            .unwrap();
        assert!((radians - 3.072).abs() < 1e-3);

        let degrees = v(&[7.35, 0.221, 5.188])
            .angle_with(&v(&[2.751, 8.259, 3.985]), AngleUnit::Degrees)
            .unwrap();
        assert!((degrees - 60.276).abs() < 1e-3);
    }

    #[test]
    fn test_angle_with_zero_vector_is_undefined() {
        let zero = Vector::zeros(2).unwrap();
        let w = v(&[1.0, 1.0]);
        assert_eq!(
            w.angle_with(&zero, AngleUnit::Radians),
            Err(VectorError::UndefinedAngle)
        );
        assert_eq!(
            zero.angle_with(&w, AngleUnit::Degrees),
            Err(VectorError::UndefinedAngle)
        );
    }

    #[test]
    fn test_angle_dimension_mismatch_is_not_rewrapped() {
        let zero = Vector::zeros(2).unwrap();
        let w = v(&[1.0, 1.0, 1.0]);
        assert!(matches!(
            zero.angle_with(&w, AngleUnit::Radians),
            Err(VectorError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_parallel_and_antiparallel() {
        let w = v(&[1.0, 2.0, 3.0]);
        assert!(w.is_parallel_to(&v(&[2.0, 4.0, 6.0])).unwrap());
        assert!(w.is_parallel_to(&v(&[-0.5, -1.0, -1.5])).unwrap());
        assert!(!w.is_parallel_to(&v(&[1.0, 0.0, 0.0])).unwrap());
        assert!(w.is_parallel_to(&Vector::zeros(3).unwrap()).unwrap());
    }

    #[test]
    fn test_parallel_tolerance_is_configurable() {
        let a = v(&[1.0, 0.0]);
        let b = v(&[1.0, 1e-4]);
        assert!(!a.is_parallel_to(&b).unwrap());
        assert!(a.is_parallel_to_within(&b, 1e-3).unwrap());
    }

    #[test]
    fn test_huge_vector_is_parallel_to_itself() {
        let huge = v(&[1e200, 1e200]);
        assert!(huge.angle_with(&huge, AngleUnit::Radians).unwrap() < 1e-6);
        assert!(huge.is_parallel_to(&huge).unwrap());
        assert!(huge.is_parallel_to(&v(&[-1.0, -1.0])).unwrap());
    }

    #[test]
    fn test_tolerances_drive_parallel_and_orthogonal_checks() {
        let loose = Tolerances::from_json(r#"{"parallel": 1e-3, "orthogonal": 1e-2}"#).unwrap();
        let a = v(&[1.0, 0.0]);

        let nearly_parallel = v(&[1.0, 1e-4]);
        assert!(!a.is_parallel_to(&nearly_parallel).unwrap());
        assert!(a.is_parallel_to_with(&nearly_parallel, &loose).unwrap());

        let nearly_orthogonal = v(&[1e-3, 1.0]);
        assert!(!a.is_orthogonal_to(&nearly_orthogonal).unwrap());
        assert!(a.is_orthogonal_to_with(&nearly_orthogonal, &loose).unwrap());

        let tiny = v(&[1e-12, 0.0]);
        assert!(tiny.is_parallel_to(&v(&[0.0, 1.0])).unwrap());
        let strict = Tolerances::from_json(r#"{"zero": 1e-13}"#).unwrap();
        assert!(!tiny.is_parallel_to_with(&v(&[0.0, 1.0]), &strict).unwrap());
        assert!(tiny.is_parallel_to_with(&v(&[3.0, 0.0]), &strict).unwrap());
    }

    #[test]
    fn test_orthogonal() {
        let a = v(&[1.0, 1.0]);
        assert!(a.is_orthogonal_to(&v(&[-1.0, 1.0])).unwrap());
        assert!(!a.is_orthogonal_to(&v(&[1.0, 0.0])).unwrap());
        assert!(a.is_orthogonal_to_within(&v(&[1e-3, 0.0]), 1e-2).unwrap());
    }
}
