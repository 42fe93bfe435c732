use nalgebra::RealField;

use crate::SolveOutcome;

pub trait LinearSolver<T>
where
    T: RealField + Copy,
{
    /// Solves the dense linear system `A·x = b`.
    ///
    /// ## Arguments
    /// * `size` the number of unknowns, must be at least 1.
    /// * `matrix` the `size`×`size` coefficient matrix A in row-major order
    ///     (`matrix[row * size + col]`).
    /// * `constants` the right-hand side b, one entry per row of A.
    ///
    /// ## Notes
    /// Implementations must not mutate or retain the caller's slices and must not depend on any
    /// shared mutable state, so that a single solver may be used from many threads at once.
    fn solve(&self, size: usize, matrix: &[T], constants: &[T]) -> SolveOutcome<T>;
}
