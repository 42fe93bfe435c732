use nalgebra::RealField;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Rounding;

/// What to do when elimination meets a column with no usable pivot.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SingularityPolicy {
    /// Fail the whole solve with [`crate::Error::SingularMatrix`] as soon as the largest
    /// candidate pivot in a column is exactly zero.
    #[default]
    AbortOnZeroPivot,
    /// Skip zero pivot columns and return one particular solution of a consistent
    /// rank-deficient system, with every free unknown set to zero. A dependent row whose
    /// right-hand side disagrees yields [`crate::Error::Inconsistent`].
    ParticularSolution,
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(
        default,
        bound(
            serialize = "T: Serialize",
            deserialize = "T: Deserialize<'de> + RealField + Copy"
        )
    )
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig<T> {
    /// Diagonal entries below this magnitude are treated as zero during back substitution.
    pub pivot_tolerance: T,
    pub rounding: Rounding,
    pub singularity: SingularityPolicy,
}

impl<T> Default for SolverConfig<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        SolverConfig {
            pivot_tolerance: nalgebra::convert::<f64, T>(1e-10),
            rounding: Rounding::default(),
            singularity: SingularityPolicy::default(),
        }
    }
}

impl<T> SolverConfig<T>
where
    T: RealField + Copy,
{
    pub fn with_pivot_tolerance(self, pivot_tolerance: T) -> Self {
        SolverConfig {
            pivot_tolerance,
            ..self
        }
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        SolverConfig { rounding, ..self }
    }

    pub fn with_singularity(self, singularity: SingularityPolicy) -> Self {
        SolverConfig {
            singularity,
            ..self
        }
    }
}
