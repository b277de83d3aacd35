//! Single-variable unconstrained optimization.
//!
//! [`golden_section`] narrows a bounded interval toward an extremum of a
//! unimodal objective; [`Goal`] selects whether a maximum or a minimum is
//! sought.

mod goal;

pub mod golden_section;

pub use goal::Goal;
