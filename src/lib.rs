//! Classical numerical methods for single-variable problems and small dense
//! linear systems.
//!
//! Each solver is an independent routine:
//!
//! - [`root`] — root finders for `f(x) = 0`: the bracketing methods
//!   [`root::bisection`] and [`root::false_position`], and the open methods
//!   [`root::fixed_point`] and [`root::newton_raphson`]
//! - [`optimize`] — [`optimize::golden_section`] search for a single-variable
//!   extremum on a bounded interval
//! - [`linear`] — dense solvers for `A x = b`: [`linear::gauss`] elimination
//!   and [`linear::lu`] decomposition with reusable factors
//! - [`derivative`] — finite-difference first-derivative approximation,
//!   used by Newton-Raphson and available on its own
//!
//! Functions are supplied as plain `Fn(f64) -> f64` closures. Iterative
//! solvers stop on a caller-supplied percent relative-error threshold or an
//! iteration cap, and every solution reports which one ended the run via
//! [`root::Status`] rather than a bare number.
//!
//! The linear solvers are deliberately naive: no pivoting, no scaling, no
//! sparse storage. Checked entry points detect zero pivots; `_unchecked`
//! variants preserve the classical unguarded behavior.

pub mod derivative;
pub mod linear;
pub mod optimize;
pub mod root;
