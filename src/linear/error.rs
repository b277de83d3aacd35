use thiserror::Error;

/// Errors that can occur while solving a dense linear system.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("matrix is not square: {rows} rows by {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("right-hand side has length {len}, expected {expected}")]
    DimensionMismatch { expected: usize, len: usize },

    #[error("zero pivot at row {row}; unpivoted elimination cannot continue")]
    ZeroPivot { row: usize },
}
