//! Newton-Raphson: open root finder using tangent-line extrapolation.
//!
//! Each iteration steps `x ← x − f(x)/f'(x)`, with `f'` approximated by the
//! [`crate::derivative`] module rather than supplied analytically. Quadratic
//! convergence near simple roots; like all open methods it can diverge from
//! a poor guess.

use crate::derivative::{DEFAULT_STEP, Scheme, derivative_with};

use super::{Error, Solution, Status, rel_err_pct};

/// Stopping criteria and derivative settings for Newton-Raphson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration cap; the only bound on runtime.
    pub max_iters: usize,
    /// Stopping threshold on the approximate relative error, in percent.
    pub tol_pct: f64,
    /// Finite-difference scheme for the slope.
    pub scheme: Scheme,
    /// Finite-difference step size.
    pub step: f64,
    /// When true, a zero slope or non-finite iterate is reported as an
    /// error. When false, the classical unguarded behavior is preserved and
    /// infinities or NaNs propagate into the returned solution.
    pub guard_degeneracy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol_pct: 1e-8,
            scheme: Scheme::Central,
            step: DEFAULT_STEP,
            guard_degeneracy: true,
        }
    }
}

impl Config {
    /// Validates the stopping threshold and step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol_pct` is negative or non-finite, or if
    /// `step` is not a positive finite value.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol_pct.is_finite() || self.tol_pct < 0.0 {
            return Err("tol_pct must be finite and non-negative");
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("step must be finite and positive");
        }
        Ok(())
    }
}

/// Finds a root of `f` by Newton-Raphson iteration from `x0`.
///
/// # Errors
///
/// Returns an error if the config is invalid, or — with
/// [`Config::guard_degeneracy`] set — if the numeric slope is zero or an
/// iterate becomes non-finite.
pub fn solve<F>(f: F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut x = x0;
    let mut e_a = 100.0;

    for iter in 1..=config.max_iters {
        let slope = derivative_with(&f, x, config.scheme, config.step);

        if config.guard_degeneracy && slope == 0.0 {
            return Err(Error::ZeroSlope { x });
        }

        let x_new = x - f(x) / slope;

        if config.guard_degeneracy && !x_new.is_finite() {
            return Err(Error::NonFiniteEvaluation { x, value: x_new });
        }

        e_a = rel_err_pct(x_new, x, e_a);
        x = x_new;

        if e_a < config.tol_pct {
            return Ok(Solution {
                status: Status::Converged,
                x,
                rel_err_pct: e_a,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        rel_err_pct: e_a,
        iters: config.max_iters,
    })
}
