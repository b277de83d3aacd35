//! Dense linear system solvers for `A x = b`.
//!
//! Two classical, deliberately naive routines on [`nalgebra`] dense types:
//!
//! - [`gauss`] — forward elimination plus back substitution in one shot
//! - [`lu`] — Doolittle decomposition producing reusable [`LuFactors`], so
//!   one factorization serves any number of right-hand sides
//!
//! Neither routine pivots, scales, or handles sparsity. The checked entry
//! points refuse a zero pivot with [`Error::ZeroPivot`]; the `_unchecked`
//! variants keep the classical behavior and let the division poison the
//! result with infinities or NaNs. Inputs are borrowed and copied
//! internally, so caller-owned matrices and vectors are never mutated.

mod error;

pub mod gauss;
pub mod lu;

pub use error::Error;
pub use lu::LuFactors;

use nalgebra::{DMatrix, DVector};

/// Returns the dimension of a square matrix, or the spec'd failure for a
/// rectangular one.
pub(crate) fn square_dim(a: &DMatrix<f64>) -> Result<usize, Error> {
    if a.is_square() {
        Ok(a.nrows())
    } else {
        Err(Error::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        })
    }
}

/// Solves the upper-triangular system `U x = rhs` bottom-up, in place.
///
/// Entries of `u` below the diagonal are ignored, which lets the combined
/// L/U storage from [`lu`] be passed directly.
pub(crate) fn back_substitute(
    u: &DMatrix<f64>,
    mut rhs: DVector<f64>,
    check_pivots: bool,
) -> Result<DVector<f64>, Error> {
    let n = rhs.len();

    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let known = rhs[j];
            rhs[i] -= u[(i, j)] * known;
        }

        let pivot = u[(i, i)];
        if check_pivots && pivot == 0.0 {
            return Err(Error::ZeroPivot { row: i });
        }
        rhs[i] /= pivot;
    }

    Ok(rhs)
}
