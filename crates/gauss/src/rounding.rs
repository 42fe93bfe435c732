use nalgebra::{DVector, RealField};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Presentation rounding applied to a finished solution vector.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Round every component to the given number of decimal digits, halves away from zero.
    ///
    /// Components too large to scale, and digit counts whose scale overflows the scalar type,
    /// are left unrounded.
    Decimals(u32),
    /// Return the solution exactly as computed.
    Exact,
}

impl Default for Rounding {
    fn default() -> Self {
        Rounding::Decimals(12)
    }
}

impl Rounding {
    pub fn apply<T>(&self, x: &mut DVector<T>)
    where
        T: RealField + Copy,
    {
        if let Rounding::Decimals(digits) = *self {
            let scale: T = num_traits::pow(nalgebra::convert::<f64, T>(10.0), digits as usize);
            if !scale.is_finite() {
                return;
            }
            x.apply(|xi| {
                let scaled = *xi * scale;
                if scaled.is_finite() {
                    *xi = scaled.round() / scale;
                }
            });
        }
    }
}
