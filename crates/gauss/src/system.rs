use nalgebra::{DMatrix, DVector, RealField};

use crate::Error;

/// Private working copy of the augmented system `[A | b]`.
///
/// Row swaps and row combinations are always applied to `matrix` and `constants` together.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem<T>
where
    T: RealField + Copy,
{
    pub(crate) matrix: DMatrix<T>,
    pub(crate) constants: DVector<T>,
}

impl<T> LinearSystem<T>
where
    T: RealField + Copy,
{
    /// Validates the request shape and copies the inputs into a fresh working system.
    ///
    /// Succeeds iff `size >= 1`, `matrix.len() == size * size` and `constants.len() == size`.
    /// `matrix` is read in row-major order.
    pub fn new(size: usize, matrix: &[T], constants: &[T]) -> Result<Self, Error> {
        let mismatch = || Error::DimensionMismatch {
            size,
            matrix_len: matrix.len(),
            constants_len: constants.len(),
        };

        let expected = size.checked_mul(size).ok_or_else(mismatch)?;
        if size == 0 || matrix.len() != expected || constants.len() != size {
            return Err(mismatch());
        }

        Ok(LinearSystem {
            matrix: DMatrix::from_row_slice(size, size, matrix),
            constants: DVector::from_column_slice(constants),
        })
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.constants.len()
    }

    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    pub fn constants(&self) -> &DVector<T> {
        &self.constants
    }

    /// Exchanges rows `a` and `b` of the augmented system.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.matrix.swap_rows(a, b);
            self.constants.swap_rows(a, b);
        }
    }
}
