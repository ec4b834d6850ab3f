use crate::*;

/// Failure kinds reported by matrix construction, access and algebra.
///
/// Every variant is a recoverable precondition violation discoverable
/// before or during the call. Operations never return partial results and
/// internal failures are propagated to the caller, not logged and
/// swallowed.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixError {
  #[error("matrix size {rows}x{columns} is invalid, both dimensions must be nonzero")]
  InvalidSize { rows: usize, columns: usize },
  #[error("row index {index} out of range, the matrix has {rows} rows")]
  RowOutOfRange { index: usize, rows: usize },
  #[error("column index {index} out of range, the matrix has {columns} columns")]
  ColumnOutOfRange { index: usize, columns: usize },
  #[error("replacement of length {provided} does not match the expected length {expected}")]
  LengthMismatch { expected: usize, provided: usize },
  #[error("size mismatch, left matrix is {left} but right matrix is {right}")]
  SizeMismatch { left: MatrixSize, right: MatrixSize },
  #[error("cannot multiply {left} by {right}, left columns must equal right rows")]
  IncompatibleDimensions { left: MatrixSize, right: MatrixSize },
  #[error("operation requires a square matrix, got {size}")]
  NotSquare { size: MatrixSize },
  #[error("matrix is singular, the inverse does not exist")]
  SingularMatrix,
  #[error("element at row {row}, column {column} was never assigned")]
  UnsetElement { row: usize, column: usize },
}
