use thiserror::Error;

/// Errors that can occur while root finding.
///
/// The bracket and config variants reject invalid input before any iteration
/// runs. `NonFiniteEvaluation` and `ZeroSlope` report numerical degeneracy
/// encountered mid-solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket has zero width: lower and upper are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no root in bracket: f({lower}) = {f_lower}, f({upper}) = {f_upper}")]
    NoBracket {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },

    #[error("derivative is zero at x = {x}; Newton step is undefined")]
    ZeroSlope { x: f64 },
}
