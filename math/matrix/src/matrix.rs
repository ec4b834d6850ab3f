use serde::{Deserialize, Serialize};

use crate::*;

/// Dense, row-major matrix of optional real elements.
///
/// A freshly created matrix has every cell unset. Cells are assigned
/// through the element, row and column setters; the algebra then reads
/// cells through [`Matrix::value`], which turns an unset cell into an
/// explicit [`MatrixError::UnsetElement`] failure.
///
/// The grid shape never changes after construction. Structural operations
/// like [`Matrix::remove_row`] return a new, smaller matrix instead of
/// resizing in place, and every algebraic operation allocates a fresh
/// result without touching its inputs.
///
/// Derived `PartialEq` is the exact element-wise comparison; see
/// [`Matrix::approx_eq`] for the tolerance-based one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
  cells: Vec<Option<T>>,
  size: MatrixSize,
}

impl<T: Scalar> Matrix<T> {
  /// Creates a matrix with every cell unset. Rejects zero dimensions.
  pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
    Ok(Self::with_size(MatrixSize::new(rows, columns)?))
  }

  /// Creates an all-unset matrix of an already validated size.
  pub fn with_size(size: MatrixSize) -> Self {
    Self {
      cells: vec![None; size.cell_count()],
      size,
    }
  }

  /// Creates a fully populated matrix from row vectors.
  ///
  /// The outer vector holds the rows top to bottom, the same way matrices
  /// are written on paper. Fails with `LengthMismatch` on ragged input.
  pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
    let row_count = rows.len();
    let column_count = rows.first().map(Vec::len).unwrap_or(0);
    let mut matrix = Self::new(row_count, column_count)?;
    for (index, row) in rows.iter().enumerate() {
      matrix.set_row(index, row)?;
    }
    Ok(matrix)
  }

  pub fn size(&self) -> MatrixSize {
    self.size
  }

  pub fn rows(&self) -> usize {
    self.size.rows()
  }

  pub fn columns(&self) -> usize {
    self.size.columns()
  }

  /// Reads one cell. `None` means the cell was never assigned.
  pub fn get(&self, row: usize, column: usize) -> Result<Option<T>, MatrixError> {
    self.check_row(row)?;
    self.check_column(column)?;
    Ok(self.cell(row, column))
  }

  /// Reads one cell, requiring it to hold a value.
  pub fn value(&self, row: usize, column: usize) -> Result<T, MatrixError> {
    self
      .get(row, column)?
      .ok_or(MatrixError::UnsetElement { row, column })
  }

  /// Overwrites one cell.
  pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
    self.check_row(row)?;
    self.check_column(column)?;
    self.put_cell(row, column, Some(value));
    Ok(())
  }

  /// Returns an owned copy of the row, detached from internal storage.
  pub fn row(&self, index: usize) -> Result<Vec<Option<T>>, MatrixError> {
    self.check_row(index)?;
    let start = index * self.columns();
    Ok(self.cells[start..start + self.columns()].to_vec())
  }

  /// Replaces a whole row. The slice length must equal the column count.
  pub fn set_row(&mut self, index: usize, values: &[T]) -> Result<(), MatrixError> {
    self.check_row(index)?;
    if values.len() != self.columns() {
      return Err(MatrixError::LengthMismatch {
        expected: self.columns(),
        provided: values.len(),
      });
    }
    for (column, value) in values.iter().enumerate() {
      self.put_cell(index, column, Some(*value));
    }
    Ok(())
  }

  /// Returns an owned copy of the column, length = row count.
  pub fn column(&self, index: usize) -> Result<Vec<Option<T>>, MatrixError> {
    self.check_column(index)?;
    Ok((0..self.rows()).map(|row| self.cell(row, index)).collect())
  }

  /// Replaces a whole column. The slice length must equal the row count.
  pub fn set_column(&mut self, index: usize, values: &[T]) -> Result<(), MatrixError> {
    self.check_column(index)?;
    if values.len() != self.rows() {
      return Err(MatrixError::LengthMismatch {
        expected: self.rows(),
        provided: values.len(),
      });
    }
    for (row, value) in values.iter().enumerate() {
      self.put_cell(row, index, Some(*value));
    }
    Ok(())
  }

  pub(crate) fn check_row(&self, index: usize) -> Result<(), MatrixError> {
    if index >= self.rows() {
      return Err(MatrixError::RowOutOfRange {
        index,
        rows: self.rows(),
      });
    }
    Ok(())
  }

  pub(crate) fn check_column(&self, index: usize) -> Result<(), MatrixError> {
    if index >= self.columns() {
      return Err(MatrixError::ColumnOutOfRange {
        index,
        columns: self.columns(),
      });
    }
    Ok(())
  }

  // raw cell access for loops whose shapes are validated by construction
  pub(crate) fn cell(&self, row: usize, column: usize) -> Option<T> {
    self.cells[row * self.size.columns() + column]
  }

  pub(crate) fn put_cell(&mut self, row: usize, column: usize, cell: Option<T>) {
    let offset = row * self.size.columns() + column;
    self.cells[offset] = cell;
  }
}
