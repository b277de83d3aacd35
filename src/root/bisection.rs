//! Bisection: bracketing root finder using interval halving.
//!
//! Each iteration evaluates `f` at the bracket midpoint and keeps the half
//! whose endpoint values still straddle the root. Convergence is guaranteed
//! for continuous functions with a valid bracket, at one bit of the root per
//! iteration.

use super::{Config, Error, Solution, Status, rel_err_pct, validate_bracket};

/// Finds a root of `f` by bisecting `bracket`.
///
/// `x0` seeds the previous-estimate slot for the first relative-error
/// computation; it does not influence which root is found.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if the endpoint
/// values do not straddle zero, or if `f` produces a non-finite value.
pub fn solve<F>(f: F, bracket: [f64; 2], x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut lower, mut upper) = validate_bracket(bracket)?;

    let mut f_lower = eval(&f, lower)?;
    if f_lower == 0.0 {
        return Ok(exact(lower, 0));
    }

    let f_upper = eval(&f, upper)?;
    if f_upper == 0.0 {
        return Ok(exact(upper, 0));
    }

    if f_lower.signum() == f_upper.signum() {
        return Err(Error::NoBracket {
            lower,
            upper,
            f_lower,
            f_upper,
        });
    }

    let mut x_r = x0;
    let mut e_a = 100.0;

    for iter in 1..=config.max_iters {
        let x_new = 0.5 * (lower + upper);
        let f_r = eval(&f, x_new)?;

        e_a = rel_err_pct(x_new, x_r, e_a);
        x_r = x_new;

        if f_r == 0.0 {
            return Ok(exact(x_r, iter));
        }

        if f_lower * f_r < 0.0 {
            upper = x_r;
        } else {
            lower = x_r;
            f_lower = f_r;
        }

        if e_a < config.tol_pct {
            return Ok(Solution {
                status: Status::Converged,
                x: x_r,
                rel_err_pct: e_a,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: x_r,
        rel_err_pct: e_a,
        iters: config.max_iters,
    })
}

fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteEvaluation { x, value })
    }
}

fn exact(x: f64, iters: usize) -> Solution {
    Solution {
        status: Status::Converged,
        x,
        rel_err_pct: 0.0,
        iters,
    }
}
