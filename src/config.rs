use crate::{Result, VectorError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-10;
pub const DEFAULT_ORTHOGONAL_TOLERANCE: f64 = 1e-10;
/// Radians. `acos` loses about half the available digits near 0 and π, so
/// this is looser than the other tolerances.
pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 1e-6;

/// Thresholds deciding when a floating-point quantity counts as zero,
/// orthogonal or parallel.
///
/// Missing fields in a configuration document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Magnitude below which a vector is the zero vector.
    pub zero: f64,
    /// Absolute dot product below which two vectors are orthogonal.
    pub orthogonal: f64,
    /// Distance in radians from 0 or π within which two vectors are parallel.
    pub parallel: f64,
}

impl Tolerances {
    pub fn from_json(json: &str) -> Result<Self> {
        let tolerances: Tolerances = serde_json::from_str(json)
            .map_err(|e| VectorError::SerializationError(e.to_string()))?;
        tolerances.validate()?;
        Ok(tolerances)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("zero", self.zero),
            ("orthogonal", self.orthogonal),
            ("parallel", self.parallel),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VectorError::InvalidArgument(format!(
                    "{name} tolerance must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            zero: DEFAULT_ZERO_TOLERANCE,
            orthogonal: DEFAULT_ORTHOGONAL_TOLERANCE,
            parallel: DEFAULT_PARALLEL_TOLERANCE,
        }
    }
}
