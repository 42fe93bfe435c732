//! Dense linear system solver: Gaussian elimination with partial pivoting followed by back
//! substitution.
//!
//! Each solve works on its own copy of the augmented system `[A | b]`, so the caller's data is
//! never touched and any number of solves may run concurrently without coordination.
//!
//! ```
//! let x = gauss::solve(2, &[2.0, 1.0, 1.0, 3.0], &[3.0, 5.0]).unwrap();
//! assert_eq!(x.as_slice(), &[0.8, 1.4]);
//! ```

mod config;
mod gauss;
mod rounding;
mod system;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{SingularityPolicy, SolverConfig};
pub use gauss::Gauss;
pub use rounding::Rounding;
pub use system::LinearSystem;
pub use traits::LinearSolver;

use nalgebra::DVector;
use thiserror::Error;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input dimensions: size {size}, matrix length {matrix_len}, constants length {constants_len}")]
    DimensionMismatch {
        size: usize,
        matrix_len: usize,
        constants_len: usize,
    },

    /// No unique solution exists. `col` is the elimination column (numbered from zero) whose
    /// pivot was zero, or the row whose diagonal fell below the pivot tolerance.
    #[error("matrix is singular (col {col})")]
    SingularMatrix { col: usize },

    /// A row reduced to zero coefficients but kept a nonzero right-hand side.
    #[error("system is inconsistent, no solution exists (row {row})")]
    Inconsistent { row: usize },
}

/// Field-less tag of an [`Error`], for callers that only care about the class of failure.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DimensionMismatch,
    SingularMatrix,
    Inconsistent,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Error::SingularMatrix { .. } => ErrorKind::SingularMatrix,
            Error::Inconsistent { .. } => ErrorKind::Inconsistent,
        }
    }
}

/// Result of a single solve: the solution vector, or the reason there is none.
pub type SolveOutcome<T> = Result<DVector<T>, Error>;

/// Solves `A·x = b` for a row-major `size`×`size` matrix using the default [`SolverConfig`].
pub fn solve(size: usize, matrix: &[f64], constants: &[f64]) -> SolveOutcome<f64> {
    Gauss::default().solve(size, matrix, constants)
}
