//! Doolittle LU decomposition with reusable factors.
//!
//! [`decompose`] runs the same unpivoted elimination as [`crate::linear::gauss`]
//! but records each elimination factor below the diagonal instead of
//! discarding it, giving combined L/U storage: multipliers of the unit
//! lower-triangular `L` below the diagonal, `U` on and above it. The factors
//! then solve `A x = b` for any number of right-hand sides without repeating
//! the O(n³) elimination.

use nalgebra::{DMatrix, DVector};

use super::{Error, back_substitute, square_dim};

/// Combined L/U storage produced by [`decompose`].
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    lu: DMatrix<f64>,
    check_pivots: bool,
}

/// Factors `A` into `L U`, refusing zero pivots.
///
/// The input is copied, never mutated.
///
/// # Errors
///
/// Returns an error if `a` is not square or if elimination meets a zero
/// pivot.
pub fn decompose(a: &DMatrix<f64>) -> Result<LuFactors, Error> {
    decompose_inner(a, true)
}

/// Factors `A` into `L U` with the classical unguarded elimination.
///
/// A zero pivot is not detected here or in the substitution phase; the
/// division produces infinities or NaNs that propagate into the factors.
///
/// # Errors
///
/// Returns an error if `a` is not square.
pub fn decompose_unchecked(a: &DMatrix<f64>) -> Result<LuFactors, Error> {
    decompose_inner(a, false)
}

fn decompose_inner(a: &DMatrix<f64>, check_pivots: bool) -> Result<LuFactors, Error> {
    let n = square_dim(a)?;
    let mut lu = a.clone_owned();

    for k in 0..n.saturating_sub(1) {
        let pivot = lu[(k, k)];
        if check_pivots && pivot == 0.0 {
            return Err(Error::ZeroPivot { row: k });
        }

        for i in (k + 1)..n {
            let factor = lu[(i, k)] / pivot;
            lu[(i, k)] = factor;
            for j in (k + 1)..n {
                let above = lu[(k, j)];
                lu[(i, j)] -= factor * above;
            }
        }
    }

    Ok(LuFactors { lu, check_pivots })
}

impl LuFactors {
    /// Dimension of the factored system.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// The combined L/U storage: multipliers below the diagonal, `U` on and
    /// above it; the unit diagonal of `L` is implicit.
    #[must_use]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.lu
    }

    /// Solves `A x = b` using the stored factors.
    ///
    /// Forward substitution applies the stored multipliers to `b`, producing
    /// the intermediate vector `L d = b`; back substitution then solves
    /// `U x = d`. The zero-pivot policy chosen at decomposition time carries
    /// over to the diagonal divisions here.
    ///
    /// # Errors
    ///
    /// Returns an error if `b` has the wrong length, or — for factors from
    /// [`decompose`] — if a diagonal entry of `U` is zero.
    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>, Error> {
        let n = self.dim();
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                len: b.len(),
            });
        }

        let mut d = b.clone_owned();
        for i in 1..n {
            for j in 0..i {
                let known = d[j];
                d[i] -= self.lu[(i, j)] * known;
            }
        }

        back_substitute(&self.lu, d, self.check_pivots)
    }
}
