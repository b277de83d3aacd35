//! Fixed-point iteration: open root finder for `x = g(x)`.
//!
//! The caller rearranges `f(x) = 0` into an equivalent `x = g(x)` and the
//! solver iterates `x ← g(x)` from a single guess. The iteration diverges
//! when `|g'(x)| >= 1` near the root; divergence is not detected here, so
//! callers must check [`Solution::status`] and judge the final error rather
//! than trust the returned estimate blindly.

use super::{Config, Error, Solution, Status, rel_err_pct};

/// Iterates `x = g(x)` from `x0`.
///
/// # Errors
///
/// Returns an error if the config is invalid. Divergent iterations are not
/// an error; they surface as [`Status::MaxIters`] with a large
/// `rel_err_pct`.
pub fn solve<G>(g: G, x0: f64, config: &Config) -> Result<Solution, Error>
where
    G: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut x = x0;
    let mut e_a = 100.0;

    for iter in 1..=config.max_iters {
        let x_new = g(x);
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ten_iterations_of_exp_decay_match_reference_value() {
        let config = Config {
            max_iters: 10,
            tol_pct: 0.5,
        };

        let solution = solve(|x: f64| (-x).exp(), 0.0, &config).expect("should solve");

        // The error is still above 0.5% after ten steps, so the cap ends the
        // run at the tenth iterate.
        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 10);
        assert_relative_eq!(solution.x, 0.564_879_347_391_049_5, epsilon = 1e-12);
    }

    #[test]
    fn converges_given_enough_iterations() {
        let config = Config {
            max_iters: 100,
            tol_pct: 1e-10,
        };

        let solution = solve(|x: f64| (-x).exp(), 0.0, &config).expect("should solve");

        assert!(solution.converged());
        // Root of x = e^{-x}.
        assert_relative_eq!(solution.x, 0.567_143_290_409_783_8, epsilon = 1e-10);
    }

    #[test]
    fn fixed_point_of_identity_terminates_immediately() {
        let solution = solve(|x| x, 3.0, &Config::default()).expect("should solve");

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 3.0);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn divergence_runs_to_the_cap() {
        // g(x) = 2x has |g'| = 2 everywhere; the iteration runs away.
        let config = Config {
            max_iters: 20,
            tol_pct: 1e-6,
        };

        let solution = solve(|x| 2.0 * x, 1.0, &config).expect("should solve");

        assert_eq!(solution.status, Status::MaxIters);
        assert!(solution.rel_err_pct >= 50.0);
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            tol_pct: f64::INFINITY,
            ..Config::default()
        };
        let result = solve(|x| x, 0.0, &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
