//! Naive Gauss elimination.
//!
//! Forward elimination reduces the system to upper-triangular form, applying
//! each row's elimination factor to the right-hand side as it goes; back
//! substitution then solves bottom-up. No pivoting or scaling, so accuracy
//! degrades on systems that are not diagonally dominant.

use nalgebra::{DMatrix, DVector};

use super::{Error, back_substitute, square_dim};

/// Solves `A x = b`, refusing zero pivots.
///
/// The inputs are copied; `a` and `b` are never mutated and the solution is
/// freshly allocated.
///
/// # Errors
///
/// Returns an error if `a` is not square, if `b` has the wrong length, or
/// if elimination meets a zero pivot.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, Error> {
    solve_inner(a, b, true)
}

/// Solves `A x = b` with the classical unguarded elimination.
///
/// A zero pivot is not detected; the division produces infinities or NaNs
/// that propagate into the returned vector, matching the naive algorithm.
///
/// # Errors
///
/// Returns an error if `a` is not square or if `b` has the wrong length.
pub fn solve_unchecked(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, Error> {
    solve_inner(a, b, false)
}

fn solve_inner(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    check_pivots: bool,
) -> Result<DVector<f64>, Error> {
    let n = square_dim(a)?;
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            len: b.len(),
        });
    }

    let mut a = a.clone_owned();
    let mut b = b.clone_owned();

    for k in 0..n.saturating_sub(1) {
        let pivot = a[(k, k)];
        if check_pivots && pivot == 0.0 {
            return Err(Error::ZeroPivot { row: k });
        }

        for i in (k + 1)..n {
            let factor = a[(i, k)] / pivot;
            for j in (k + 1)..n {
                let above = a[(k, j)];
                a[(i, j)] -= factor * above;
            }
            let rhs_k = b[k];
            b[i] -= factor * rhs_k;
        }
    }

    back_substitute(&a, b, check_pivots)
}
