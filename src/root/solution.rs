/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The approximate relative error dropped below the configured threshold.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a root-finding run.
///
/// Both termination paths return the last estimate; `status` distinguishes
/// them so the caller never has to guess whether the iteration cap truncated
/// the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Approximate relative error at the final estimate, in percent.
    pub rel_err_pct: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Whether the run met the error threshold.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
