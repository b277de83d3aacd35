//! False position: bracketing root finder using linear interpolation.
//!
//! The next estimate is the x-intercept of the secant through the bracket
//! endpoints, which usually converges faster than the midpoint when `f` is
//! close to linear. Plain false position stalls on strongly curved functions
//! because one bound stops moving; this implementation applies the Illinois
//! modification, halving the stored function value on a bound that has
//! survived two consecutive iterations unchanged.

use super::{Config, Error, Solution, Status, rel_err_pct, validate_bracket};

/// Consecutive stagnant iterations before a bound's value is halved.
const STAGNATION_LIMIT: u32 = 2;

/// Finds a root of `f` by false position over `bracket`.
///
/// `x0` seeds the previous-estimate slot for the first relative-error
/// computation.
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

    let mut f_upper = eval(&f, upper)?;
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
    let mut stagnant_lower = 0u32;
    let mut stagnant_upper = 0u32;

    for iter in 1..=config.max_iters {
        let x_new = upper - f_upper * (lower - upper) / (f_lower - f_upper);
        let f_r = eval(&f, x_new)?;

        e_a = rel_err_pct(x_new, x_r, e_a);
        x_r = x_new;

        let test = f_lower * f_r;
        if test < 0.0 {
            // Root is in the lower half; the lower bound goes stagnant.
            upper = x_r;
            f_upper = f_r;
            stagnant_upper = 0;
            stagnant_lower += 1;
            if stagnant_lower >= STAGNATION_LIMIT {
                f_lower /= 2.0;
            }
        } else if test > 0.0 {
            lower = x_r;
            f_lower = f_r;
            stagnant_lower = 0;
            stagnant_upper += 1;
            if stagnant_upper >= STAGNATION_LIMIT {
                f_upper /= 2.0;
            }
        } else {
            return Ok(exact(x_r, iter));
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn converges_on_quadratic_root_within_half_percent() {
        let config = Config {
            max_iters: 100,
            tol_pct: 0.5,
        };

        let solution = solve(|x| x * x - 1.0, [0.0, 2.0], 0.0, &config).expect("should solve");

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-2);
    }

    #[test]
    fn outpaces_bisection_on_near_linear_functions() {
        let f = |x: f64| x.exp() - 5.0;
        let config = Config {
            max_iters: 100,
            tol_pct: 1e-10,
        };

        let secant = solve(f, [1.0, 2.0], 1.0, &config).expect("should solve");
        let halving =
            super::super::bisection::solve(f, [1.0, 2.0], 1.0, &config).expect("should solve");

        assert!(secant.converged());
        assert_relative_eq!(secant.x, 5.0_f64.ln(), epsilon = 1e-9);
        assert!(secant.iters < halving.iters);
    }

    #[test]
    fn illinois_halving_unsticks_one_sided_convergence() {
        // x^10 - 1 on [0, 1.3] is the classic stall case for plain false
        // position: the lower bound barely moves. The modified method must
        // still reach the root within a moderate iteration budget.
        let config = Config {
            max_iters: 40,
            tol_pct: 1e-6,
        };

        let solution =
            solve(|x: f64| x.powi(10) - 1.0, [0.0, 1.3], 0.0, &config).expect("should solve");

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn errors_when_endpoints_do_not_straddle_zero() {
        let result = solve(|x| x * x + 1.0, [0.0, 2.0], 0.0, &Config::default());

        assert!(matches!(result, Err(Error::NoBracket { .. })));
    }

    #[test]
    fn endpoint_root_converges_without_iterating() {
        let solution =
            solve(|x| x + 1.0, [-1.0, 4.0], 0.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, -1.0);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn iteration_cap_reports_max_iters() {
        let config = Config {
            max_iters: 2,
            tol_pct: 0.0,
        };

        let solution =
            solve(|x: f64| x.powi(10) - 1.0, [0.0, 1.3], 0.0, &config).expect("should solve");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 2);
    }
}
