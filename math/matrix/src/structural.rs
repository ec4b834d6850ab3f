use crate::*;

impl<T: Scalar> Matrix<T> {
  /// Copies every row except `index` into a new matrix one row shorter,
  /// preserving relative order. Unset cells survive the copy. Fails with
  /// `InvalidSize` when the source has a single row.
  pub fn remove_row(&self, index: usize) -> Result<Self, MatrixError> {
    self.check_row(index)?;
    let size = MatrixSize::new(self.rows() - 1, self.columns())?;
    let mut result = Self::with_size(size);
    let mut target = 0;
    for row in 0..self.rows() {
      if row == index {
        continue;
      }
      for column in 0..self.columns() {
        result.put_cell(target, column, self.cell(row, column));
      }
      target += 1;
    }
    Ok(result)
  }

  /// Column-wise counterpart of [`Matrix::remove_row`].
  pub fn remove_column(&self, index: usize) -> Result<Self, MatrixError> {
    self.check_column(index)?;
    let size = MatrixSize::new(self.rows(), self.columns() - 1)?;
    let mut result = Self::with_size(size);
    for row in 0..self.rows() {
      let mut target = 0;
      for column in 0..self.columns() {
        if column == index {
          continue;
        }
        result.put_cell(row, target, self.cell(row, column));
        target += 1;
      }
    }
    Ok(result)
  }

  /// The classical (n-1)x(n-1) minor, the source with one row and one
  /// column deleted.
  pub fn minor_matrix(&self, row: usize, column: usize) -> Result<Self, MatrixError> {
    self.remove_row(row)?.remove_column(column)
  }
}
