//! Gaussian elimination with partial (row) pivoting, followed by back substitution.

use nalgebra::{DVector, RealField};

use crate::{Error, LinearSolver, LinearSystem, SingularityPolicy, SolveOutcome, SolverConfig};

/// Direct dense solver. Holds only its configuration; every solve owns its own working copy of
/// the system.
#[derive(Clone, Debug, PartialEq)]
pub struct Gauss<T> {
    config: SolverConfig<T>,
}

impl<T> Default for Gauss<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Gauss::new(SolverConfig::default())
    }
}

impl<T> Gauss<T>
where
    T: RealField + Copy,
{
    pub fn new(config: SolverConfig<T>) -> Self {
        Gauss { config }
    }

    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solves an already validated system, consuming it as scratch space.
    pub fn solve_system(&self, mut system: LinearSystem<T>) -> SolveOutcome<T> {
        let pivots = eliminate(&mut system, self.config.singularity)?;
        let mut x = back_substitute(&system, &pivots, &self.config)?;
        self.config.rounding.apply(&mut x);
        Ok(x)
    }
}

impl<T> LinearSolver<T> for Gauss<T>
where
    T: RealField + Copy,
{
    fn solve(&self, size: usize, matrix: &[T], constants: &[T]) -> SolveOutcome<T> {
        tracing::trace!("Gauss::solve(size={})", size);
        let system = LinearSystem::new(size, matrix, constants)?;
        self.solve_system(system)
    }
}

/// Reduces the augmented system `[A | b]` to row echelon form and returns the pivot column of
/// each pivot row, in row order.
///
/// Column `i` is pivoted on the row among `r..n` with the largest magnitude entry (the lowest
/// row index wins a tie), where `r` is the next unused pivot row. With
/// [`SingularityPolicy::AbortOnZeroPivot`] a zero pivot returns `SingularMatrix { col: i }`, so
/// on success `r == i` throughout and the result is upper triangular. With
/// [`SingularityPolicy::ParticularSolution`] a column without a pivot is skipped and `r` stays
/// where it is.
///
/// On success every entry below a pivot is exactly zero.
fn eliminate<T>(system: &mut LinearSystem<T>, policy: SingularityPolicy) -> Result<Vec<usize>, Error>
where
    T: RealField + Copy,
{
    let n = system.size();
    let mut pivots = Vec::with_capacity(n);

    // i-th elimination step number, r = pivot row of this step
    for i in 0..n {
        let r = pivots.len();
        if r == n {
            break;
        }

        // find max_row = pivot row number
        let mut max_row = r;
        let mut max_el = system.matrix[(r, i)].abs();
        for k in (r + 1)..n {
            let el = system.matrix[(k, i)].abs();
            if el > max_el {
                max_el = el;
                max_row = k;
            }
        }

        if max_el == T::zero() {
            match policy {
                SingularityPolicy::AbortOnZeroPivot => {
                    return Err(Error::SingularMatrix { col: i });
                }
                SingularityPolicy::ParticularSolution => {
                    tracing::trace!("    col {} has no pivot, skipped", i);
                    continue;
                }
            }
        }

        tracing::trace!("    col {} pivot row {}", i, max_row);
        system.swap_rows(r, max_row);

        // row_k = row_k + c * row_r, c = -a(k,i)/a(r,i), k=r+1, ..., n-1
        let pivot = system.matrix[(r, i)];
        for k in (r + 1)..n {
            let a_ki = system.matrix[(k, i)];
            if a_ki == T::zero() {
                continue;
            }
            let c = -a_ki / pivot;

            // set exactly, instead of trusting a_ki + c * a_ri to cancel
            system.matrix[(k, i)] = T::zero();
            for j in (i + 1)..n {
                let a_rj = system.matrix[(r, j)];
                system.matrix[(k, j)] += c * a_rj;
            }
            let b_r = system.constants[r];
            system.constants[k] += c * b_r;
        }

        pivots.push(i);
    }

    Ok(pivots)
}

/// Computes the unknowns of a row echelon system, last pivot row to first.
///
/// `pivots[r]` is the pivot column of row `r`; unknowns without a pivot row are free and stay
/// zero. Rows past the last pivot row have no coefficients left, a nonzero constant there means
/// `Inconsistent`.
///
/// A pivot smaller than `config.pivot_tolerance` in magnitude either fails the solve with
/// `SingularMatrix`, or, under [`SingularityPolicy::ParticularSolution`], is treated like a
/// missing pivot: its unknown is left at zero when the row's residual vanishes, and the row is
/// `Inconsistent` otherwise.
fn back_substitute<T>(
    system: &LinearSystem<T>,
    pivots: &[usize],
    config: &SolverConfig<T>,
) -> SolveOutcome<T>
where
    T: RealField + Copy,
{
    let n = system.size();
    let mut x = DVector::<T>::zeros(n);

    for row in pivots.len()..n {
        if system.constants[row].abs() > config.pivot_tolerance {
            return Err(Error::Inconsistent { row });
        }
    }

    for (row, &col) in pivots.iter().enumerate().rev() {
        let mut sum = system.constants[row];
        for j in (col + 1)..n {
            sum -= system.matrix[(row, j)] * x[j];
        }

        let diag = system.matrix[(row, col)];
        if diag.abs() < config.pivot_tolerance {
            match config.singularity {
                SingularityPolicy::AbortOnZeroPivot => {
                    return Err(Error::SingularMatrix { col });
                }
                SingularityPolicy::ParticularSolution if sum.abs() <= config.pivot_tolerance => {
                    continue;
                }
                SingularityPolicy::ParticularSolution => {
                    return Err(Error::Inconsistent { row });
                }
            }
        }

        x[col] = sum / diag;
    }

    Ok(x)
}
