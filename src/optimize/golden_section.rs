//! Golden-section search for a single-variable extremum.
//!
//! The search keeps two interior points placed a golden-ratio fraction into
//! the interval. Each iteration discards the sub-interval that cannot contain
//! the optimum; the surviving interior point already has its objective value,
//! so only the freshly placed point is evaluated. One objective evaluation
//! per iteration after setup is the method's defining property.
//!
//! The objective must be unimodal on the bracket; with multiple extrema the
//! search converges to one of them with no warning.

use thiserror::Error;

use super::Goal;

/// The golden ratio fraction: R = (√5 − 1) / 2.
const R: f64 = 0.618_033_988_749_894_9;

/// Stopping criteria for the golden-section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration cap, counting the two-point setup as the first iteration.
    pub max_iters: usize,
    /// Stopping threshold on the interval-based relative error, in percent.
    pub tol_pct: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol_pct: 1e-8,
        }
    }
}

impl Config {
    /// Validates the stopping threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol_pct` is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol_pct.is_finite() || self.tol_pct < 0.0 {
            return Err("tol_pct must be finite and non-negative");
        }
        Ok(())
    }
}

/// Errors that can occur during golden-section search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket has zero width: lower and upper are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite objective {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },
}

/// Indicates whether the search converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interval-based relative error dropped below the threshold.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a golden-section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,
    /// Best interior point found.
    pub x: f64,
    /// Objective value at `x`.
    pub objective: f64,
    /// Interval-based relative error at the final point, in percent.
    pub rel_err_pct: f64,
    /// Iteration count when the search finished.
    pub iters: usize,
}

impl Solution {
    /// Whether the search met the error threshold.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Searches `bracket` for an extremum of `f` under `goal`.
///
/// The reported error is `(1 − R) · |width / x_opt| · 100`, the bound on how
/// far the best interior point can sit from the true optimum; it is carried
/// unchanged when `x_opt` is exactly zero.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if `f` produces
/// a non-finite value.
pub fn solve<F>(f: F, bracket: [f64; 2], goal: Goal, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut lower, mut upper) = validate_bracket(bracket)?;

    let mut d = R * (upper - lower);
    let mut x1 = lower + d;
    let mut x2 = upper - d;
    let mut f1 = eval(&f, x1)?;
    let mut f2 = eval(&f, x2)?;

    let (mut x_opt, mut f_opt) = if goal.better(f1, f2) {
        (x1, f1)
    } else {
        (x2, f2)
    };
    let mut e_a = 100.0;

    for iter in 2..=config.max_iters {
        d = R * d;

        if goal.better(f1, f2) {
            // Optimum is right of x2: drop [lower, x2], reuse x1 as new x2.
            lower = x2;
            x2 = x1;
            f2 = f1;
            x1 = lower + d;
            f1 = eval(&f, x1)?;
        } else {
            upper = x1;
            x1 = x2;
            f1 = f2;
            x2 = upper - d;
            f2 = eval(&f, x2)?;
        }

        if goal.better(f1, f2) {
            x_opt = x1;
            f_opt = f1;
        } else {
            x_opt = x2;
            f_opt = f2;
        }

        if x_opt != 0.0 {
            e_a = (1.0 - R) * ((upper - lower) / x_opt).abs() * 100.0;
        }

        if e_a <= config.tol_pct {
            return Ok(Solution {
                status: Status::Converged,
                x: x_opt,
                objective: f_opt,
                rel_err_pct: e_a,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: x_opt,
        objective: f_opt,
        rel_err_pct: e_a,
        iters: config.max_iters.max(1),
    })
}

/// Searches `bracket` for a maximum of `f`.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if `f` produces
/// a non-finite value.
pub fn maximize<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, Goal::Maximize, config)
}

/// Searches `bracket` for a minimum of `f`.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if `f` produces
/// a non-finite value.
pub fn minimize<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, Goal::Minimize, config)
}

fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [a, b] = bracket;

    if !a.is_finite() {
        return Err(Error::NonFiniteBracket { value: a });
    }

    if !b.is_finite() {
        return Err(Error::NonFiniteBracket { value: b });
    }

    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(Error::ZeroWidthBracket { value: a });
    }

    if a < b { Ok((a, b)) } else { Ok((b, a)) }
}

fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteEvaluation { x, value })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use super::*;

    /// 2 sin(x) − x²/10, unimodal maximum near x ≈ 1.4276 on [0, 4].
    fn humped(x: f64) -> f64 {
        2.0 * x.sin() - x * x / 10.0
    }

    #[test]
    fn eight_iterations_match_reference_value() {
        let config = Config {
            max_iters: 8,
            tol_pct: 0.01,
        };

        let solution = maximize(humped, [0.0, 4.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 8);
        assert_relative_eq!(solution.x, 1.442_719_099_991_587_8, epsilon = 1e-12);
    }

    #[test]
    fn tight_tolerance_reaches_the_true_maximum() {
        let config = Config {
            max_iters: 200,
            tol_pct: 1e-6,
        };

        let solution = maximize(humped, [0.0, 4.0], &config).expect("should solve");

        assert!(solution.converged());
        // Stationary point of 2 sin(x) - x^2/10: 2 cos(x) = x/5.
        assert_relative_eq!(solution.x, 1.427_551_778_764_594, epsilon = 1e-6);
        assert_relative_eq!(solution.objective, humped(solution.x));
    }

    #[test]
    fn minimize_finds_parabola_vertex() {
        let solution = minimize(
            |x: f64| (x - 2.0) * (x - 2.0) + 1.0,
            [0.0, 5.0],
            &Config::default(),
        )
        .expect("should solve");

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(solution.objective, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn default_goal_is_maximize() {
        let config = Config {
            max_iters: 200,
            tol_pct: 1e-6,
        };

        let explicit = maximize(humped, [0.0, 4.0], &config).expect("should solve");
        let via_default =
            solve(humped, [0.0, 4.0], Goal::default(), &config).expect("should solve");

        assert_eq!(explicit, via_default);
    }

    #[test]
    fn evaluates_the_objective_once_per_iteration_after_setup() {
        let calls = Cell::new(0usize);
        let config = Config {
            max_iters: 12,
            tol_pct: 0.0,
        };

        let solution = maximize(
            |x: f64| {
                calls.set(calls.get() + 1);
                humped(x)
            },
            [0.0, 4.0],
            &config,
        )
        .expect("should solve");

        // Two setup evaluations, then exactly one per iteration.
        assert_eq!(solution.iters, 12);
        assert_eq!(calls.get(), 2 + (solution.iters - 1));
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let solution = maximize(humped, [4.0, 0.0], &Config::default()).expect("should solve");

        assert_relative_eq!(solution.x, 1.427_551_778_764_594, epsilon = 1e-6);
    }

    #[test]
    fn errors_on_degenerate_bracket() {
        let result = maximize(humped, [1.0, 1.0], &Config::default());
        assert!(matches!(result, Err(Error::ZeroWidthBracket { .. })));

        let result = maximize(humped, [0.0, f64::NAN], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
    }

    #[test]
    fn errors_on_non_finite_objective() {
        let result = maximize(|_| f64::NAN, [0.0, 2.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteEvaluation { .. })));
    }
}
