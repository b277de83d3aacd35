//! Root finders for `f(x) = 0`.
//!
//! Two families:
//!
//! - **Bracketing methods** ([`bisection`], [`false_position`]) require two
//!   guesses whose function values straddle the root. They always narrow in
//!   on a root when given a valid bracket.
//! - **Open methods** ([`fixed_point`], [`newton_raphson`]) require only one
//!   guess and usually converge faster, but may diverge.
//!
//! All four stop when the approximate relative error
//! `|(x_new - x_old) / x_new| * 100` drops below [`Config::tol_pct`] or when
//! [`Config::max_iters`] is exhausted; [`Solution::status`] reports which.

mod bracket;
mod config;
mod error;
mod solution;

pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod newton_raphson;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

pub(crate) use bracket::validate_bracket;

/// Approximate relative error in percent, `|(current - previous)/current| * 100`.
///
/// When `current` is exactly zero the quotient is undefined; the previous
/// error value is carried instead so the stopping test stays meaningful.
pub(crate) fn rel_err_pct(current: f64, previous: f64, carried: f64) -> f64 {
    if current == 0.0 {
        carried
    } else {
        ((current - previous) / current).abs() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn relative_error_is_percent_of_current_value() {
        assert_relative_eq!(rel_err_pct(2.0, 1.0, 100.0), 50.0);
        assert_relative_eq!(rel_err_pct(-2.0, -1.0, 100.0), 50.0);
    }

    #[test]
    fn zero_current_value_carries_previous_error() {
        assert_relative_eq!(rel_err_pct(0.0, 1.0, 12.5), 12.5);
    }
}
