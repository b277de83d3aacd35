//! Finite-difference approximation of a first derivative.
//!
//! Used by [`crate::root::newton_raphson`] when no analytic derivative is
//! available, and callable on its own.

/// Default step size for the finite-difference formulas.
pub const DEFAULT_STEP: f64 = 0.01;

/// Which finite-difference formula to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `(f(x + h) - f(x - h)) / 2h`; second-order accurate.
    #[default]
    Central,
    /// `(f(x + h) - f(x)) / h`; usable when `f` is undefined below `x`.
    Forward,
    /// `(f(x) - f(x - h)) / h`; usable when `f` is undefined above `x`.
    Backward,
}

/// Approximates `f'(x)` with the central scheme at [`DEFAULT_STEP`].
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    derivative_with(f, x, Scheme::Central, DEFAULT_STEP)
}

/// Approximates `f'(x)` with the given scheme and step size.
pub fn derivative_with<F>(f: F, x: f64, scheme: Scheme, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    match scheme {
        Scheme::Central => (f(x + h) - f(x - h)) / (2.0 * h),
        Scheme::Forward => (f(x + h) - f(x)) / h,
        Scheme::Backward => (f(x) - f(x - h)) / h,
    }
}
