use std::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Row and column extent of a matrix. Both dimensions are strictly
/// positive, a zero extent in either axis is rejected at construction, and
/// the pair never changes afterwards.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatrixSize {
  rows: usize,
  columns: usize,
}

impl MatrixSize {
  pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
    if rows == 0 || columns == 0 {
      return Err(MatrixError::InvalidSize { rows, columns });
    }
    Ok(Self { rows, columns })
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn columns(&self) -> usize {
    self.columns
  }

  pub fn is_square(&self) -> bool {
    self.rows == self.columns
  }

  pub fn cell_count(&self) -> usize {
    self.rows * self.columns
  }

  /// The size with both axes swapped.
  pub fn transposed(&self) -> Self {
    Self {
      rows: self.columns,
      columns: self.rows,
    }
  }
}

impl fmt::Display for MatrixSize {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}x{}", self.rows, self.columns)
  }
}
